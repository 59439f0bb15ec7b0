use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::GatewayError;
use crate::api::types::{ApiEnvelope, ConversionEntry, ConversionRequest, CurrencySymbolRecord};
use crate::config::ApiConfig;

/// The three backend calls the conversion workflow depends on.
///
/// Each call is fire-once: no retry, no caching. Failures are surfaced
/// to the caller unchanged.
#[async_trait]
pub trait ConversionGateway: Send + Sync {
    /// Lists available currencies as single-key `{code: name}` records.
    async fn fetch_currency_symbols(
        &self,
    ) -> Result<ApiEnvelope<Vec<CurrencySymbolRecord>>, GatewayError>;

    /// Submits a conversion and returns the newly created entry.
    async fn convert_currency(
        &self,
        request: &ConversionRequest,
    ) -> Result<ApiEnvelope<ConversionEntry>, GatewayError>;

    /// Returns the complete conversion history.
    async fn get_all_conversion_entries(
        &self,
    ) -> Result<ApiEnvelope<Vec<ConversionEntry>>, GatewayError>;
}

/// reqwest-backed gateway talking to the configured REST endpoints.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    symbols_path: String,
    convert_path: String,
    history_path: String,
}

impl HttpGateway {
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .map_err(|source| GatewayError::Network {
                endpoint: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            symbols_path: config.symbols_path.clone(),
            convert_path: config.convert_path.clone(),
            history_path: config.history_path.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| GatewayError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
        })
    }

    async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiEnvelope<T>, GatewayError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(method = %method, url = %url, "Gateway request");

        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|source| {
            tracing::warn!(endpoint = %path, error = %source, "Gateway request failed");
            GatewayError::Network {
                endpoint: path.to_string(),
                source,
            }
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|source| GatewayError::Network {
            endpoint: path.to_string(),
            source,
        })?;

        if !status.is_success() {
            let message = error_message(&bytes)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            tracing::warn!(
                endpoint = %path,
                status = status.as_u16(),
                %message,
                "Gateway returned error status"
            );
            return Err(GatewayError::Server {
                endpoint: path.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ConversionGateway for HttpGateway {
    async fn fetch_currency_symbols(
        &self,
    ) -> Result<ApiEnvelope<Vec<CurrencySymbolRecord>>, GatewayError> {
        self.call::<(), _>(Method::GET, &self.symbols_path, None).await
    }

    async fn convert_currency(
        &self,
        request: &ConversionRequest,
    ) -> Result<ApiEnvelope<ConversionEntry>, GatewayError> {
        self.call(Method::POST, &self.convert_path, Some(request)).await
    }

    async fn get_all_conversion_entries(
        &self,
    ) -> Result<ApiEnvelope<Vec<ConversionEntry>>, GatewayError> {
        self.call::<(), _>(Method::GET, &self.history_path, None).await
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Understands `{"error": "..."}`, `{"message": "..."}` and
/// `{"error": {"message": "..."}}`; falls back to the raw text.
fn error_message(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        let candidates = [
            value.get("message"),
            value.get("error").and_then(|e| e.get("message")),
            value.get("error"),
        ];
        for candidate in candidates.into_iter().flatten() {
            if let Some(text) = candidate.as_str() {
                return Some(text.to_string());
            }
        }
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
