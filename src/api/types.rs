//! Wire types exchanged with the conversion backend.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every backend response wraps its payload in `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// One entry of the symbols response: `{ "<code>": "<display name>" }`.
pub type CurrencySymbolRecord = BTreeMap<String, String>;

/// A selectable currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyOption {
    /// Display name, e.g. "Euro".
    pub label: String,
    /// Currency code, e.g. "EUR".
    pub value: String,
}

impl CurrencyOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Flattens a single-key symbols record. Empty records yield `None`;
    /// records with several keys use the first key in key order.
    pub fn from_record(record: &CurrencySymbolRecord) -> Option<Self> {
        record
            .iter()
            .next()
            .map(|(code, name)| Self::new(code.clone(), name.clone()))
    }

    /// Case-insensitive match against code or display name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.value.to_lowercase().contains(&query)
            || self.label.to_lowercase().contains(&query)
    }
}

/// Flattens the whole symbols payload, keeping backend order.
pub fn currency_options(records: &[CurrencySymbolRecord]) -> Vec<CurrencyOption> {
    records.iter().filter_map(CurrencyOption::from_record).collect()
}

/// Body of a conversion submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub amount: Option<f64>,
    pub from: String,
    pub to: String,
}

/// A historical conversion as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionEntry {
    pub id: String,
    pub original_amount: Option<f64>,
    pub from: String,
    pub to: String,
    pub dest_amount: Option<f64>,
    /// ISO-8601 timestamp. Unique within a session.
    pub created_at: String,
}

impl ConversionEntry {
    pub fn created_at_local(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

/// Renders an ISO-8601 timestamp in local time. Unparseable input is
/// returned unchanged.
pub fn format_timestamp(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Formats an optional amount for tables and result lines.
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}
