use crate::api::{ConversionEntry, ConversionRequest, CurrencyOption};
use crate::mvi::State;
use crate::workflow::error::WorkflowError;

/// Coarse phase of the conversion form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Latest request number issued per request kind.
///
/// A completion carrying an older number is stale and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Generations {
    pub symbols: u64,
    pub history: u64,
    pub submit: u64,
}

/// Everything the conversion screen renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowState {
    pub currency_symbols: Vec<CurrencyOption>,
    /// Committed amount; `None` when the typed text is empty or invalid.
    pub amount: Option<f64>,
    /// Raw text of the amount field as last typed.
    pub amount_text: String,
    pub origin_currency: String,
    pub dest_currency: String,
    /// Destination amount of the last successful conversion.
    pub conversion_result: Option<f64>,
    /// Full history as last fetched. Never appended to locally.
    pub conversion_history: Vec<ConversionEntry>,
    /// Derived from `conversion_history`.
    pub most_popular_destination: Option<String>,
    pub is_loading_history: bool,
    pub is_submitting: bool,
    /// Most recent failure. A new failure replaces the previous one.
    pub error: Option<WorkflowError>,
    pub generations: Generations,
}

impl State for WorkflowState {}

impl WorkflowState {
    pub fn phase(&self) -> Phase {
        if self.is_submitting {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    /// True when a submission may start.
    pub fn can_submit(&self) -> bool {
        self.validate_submission().is_ok()
    }

    /// Builds the request for the current form, or explains why the form
    /// cannot be submitted yet.
    pub fn validate_submission(&self) -> Result<ConversionRequest, WorkflowError> {
        if self.is_submitting {
            return Err(WorkflowError::validation(
                "A conversion is already in progress",
            ));
        }
        let Some(amount) = self.amount else {
            return Err(WorkflowError::validation("Enter an amount to convert"));
        };
        if self.origin_currency.is_empty() {
            return Err(WorkflowError::validation(
                "Select the currency to convert from",
            ));
        }
        if self.dest_currency.is_empty() {
            return Err(WorkflowError::validation(
                "Select the currency to convert to",
            ));
        }

        Ok(ConversionRequest {
            amount: Some(amount),
            from: self.origin_currency.clone(),
            to: self.dest_currency.clone(),
        })
    }

    /// Looks up the display name for a currency code.
    pub fn currency_label(&self, code: &str) -> Option<&str> {
        self.currency_symbols
            .iter()
            .find(|option| option.value == code)
            .map(|option| option.label.as_str())
    }
}
