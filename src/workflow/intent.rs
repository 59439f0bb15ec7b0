use crate::api::{ConversionEntry, CurrencyOption};
use crate::mvi::Intent;
use crate::workflow::error::WorkflowError;

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowIntent {
    /// Amount field text changed.
    AmountChanged { text: String },
    /// Origin selector changed. `None` (cleared) keeps the prior value.
    OriginSelected { code: Option<String> },
    /// Destination selector changed. `None` (cleared) keeps the prior value.
    DestinationSelected { code: Option<String> },
    SymbolsRequested,
    SymbolsLoaded {
        generation: u64,
        outcome: Result<Vec<CurrencyOption>, WorkflowError>,
    },
    HistoryRequested,
    HistoryLoaded {
        generation: u64,
        outcome: Result<Vec<ConversionEntry>, WorkflowError>,
    },
    /// Ignored unless the form passes the submit guard.
    SubmitRequested,
    SubmitCompleted {
        generation: u64,
        outcome: Result<ConversionEntry, WorkflowError>,
    },
    ErrorDismissed,
}

impl Intent for WorkflowIntent {}
