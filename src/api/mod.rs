//! Gateway client for the currency conversion backend.
//!
//! Three REST calls: list currency symbols, submit a conversion and list
//! the conversion history. Every response is wrapped in `{ "data": ... }`.

mod client;
mod error;
mod types;

pub use client::{ConversionGateway, HttpGateway};
pub use error::{ErrorKind, GatewayError};
pub use types::{
    currency_options, format_amount, format_timestamp, ApiEnvelope, ConversionEntry,
    ConversionRequest, CurrencyOption, CurrencySymbolRecord,
};
