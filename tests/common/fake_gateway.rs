//! In-process gateway with scripted outcomes, for driving the workflow
//! without HTTP.

#![allow(dead_code)]

use async_trait::async_trait;
use currency_converter::api::{
    ApiEnvelope, ConversionEntry, ConversionGateway, ConversionRequest, CurrencySymbolRecord,
    GatewayError,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

/// Scripted outcome for one call.
pub enum Scripted<T> {
    Ok(T),
    /// Fails with a `Server` error carrying this status and message.
    ServerError(u16, String),
    /// The gateway call panics.
    Panic,
}

struct Step<T> {
    outcome: Scripted<T>,
    delay: Duration,
}

#[derive(Default)]
pub struct FakeGateway {
    symbols: Mutex<VecDeque<Step<Vec<CurrencySymbolRecord>>>>,
    conversions: Mutex<VecDeque<Step<ConversionEntry>>>,
    histories: Mutex<VecDeque<Step<Vec<ConversionEntry>>>>,
    convert_requests: Mutex<Vec<ConversionRequest>>,
    symbols_calls: Mutex<usize>,
    history_calls: Mutex<usize>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_symbols(&self, outcome: Scripted<Vec<CurrencySymbolRecord>>) {
        self.symbols.lock().push_back(Step {
            outcome,
            delay: Duration::ZERO,
        });
    }

    pub fn push_conversion(&self, outcome: Scripted<ConversionEntry>) {
        self.conversions.lock().push_back(Step {
            outcome,
            delay: Duration::ZERO,
        });
    }

    pub fn push_history(&self, outcome: Scripted<Vec<ConversionEntry>>) {
        self.push_history_delayed(outcome, Duration::ZERO);
    }

    pub fn push_history_delayed(&self, outcome: Scripted<Vec<ConversionEntry>>, delay: Duration) {
        self.histories.lock().push_back(Step { outcome, delay });
    }

    pub fn convert_requests(&self) -> Vec<ConversionRequest> {
        self.convert_requests.lock().clone()
    }

    pub fn symbols_calls(&self) -> usize {
        *self.symbols_calls.lock()
    }

    pub fn history_calls(&self) -> usize {
        *self.history_calls.lock()
    }
}

async fn play<T>(step: Option<Step<T>>, endpoint: &str) -> Result<ApiEnvelope<T>, GatewayError> {
    let Some(step) = step else {
        return Err(GatewayError::Server {
            endpoint: endpoint.to_string(),
            status: 500,
            message: "nothing scripted".to_string(),
        });
    };
    if !step.delay.is_zero() {
        tokio::time::sleep(step.delay).await;
    }
    match step.outcome {
        Scripted::Ok(data) => Ok(ApiEnvelope { data }),
        Scripted::ServerError(status, message) => Err(GatewayError::Server {
            endpoint: endpoint.to_string(),
            status,
            message,
        }),
        Scripted::Panic => panic!("scripted gateway panic on {endpoint}"),
    }
}

#[async_trait]
impl ConversionGateway for FakeGateway {
    async fn fetch_currency_symbols(
        &self,
    ) -> Result<ApiEnvelope<Vec<CurrencySymbolRecord>>, GatewayError> {
        *self.symbols_calls.lock() += 1;
        let step = self.symbols.lock().pop_front();
        play(step, "symbols").await
    }

    async fn convert_currency(
        &self,
        request: &ConversionRequest,
    ) -> Result<ApiEnvelope<ConversionEntry>, GatewayError> {
        self.convert_requests.lock().push(request.clone());
        let step = self.conversions.lock().pop_front();
        play(step, "convert").await
    }

    async fn get_all_conversion_entries(
        &self,
    ) -> Result<ApiEnvelope<Vec<ConversionEntry>>, GatewayError> {
        *self.history_calls.lock() += 1;
        let step = self.histories.lock().pop_front();
        play(step, "history").await
    }
}
