//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod fake_gateway;
pub mod mock_backend;

use currency_converter::api::{ConversionEntry, CurrencySymbolRecord};
use currency_converter::config::ApiConfig;

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        ..ApiConfig::default()
    }
}

pub fn entry(id: &str, amount: f64, from: &str, to: &str, dest: f64) -> ConversionEntry {
    ConversionEntry {
        id: id.to_string(),
        original_amount: Some(amount),
        from: from.to_string(),
        to: to.to_string(),
        dest_amount: Some(dest),
        created_at: format!("2024-05-01T12:00:{:02}.000Z", id.len() % 60),
    }
}

pub fn symbol(code: &str, name: &str) -> CurrencySymbolRecord {
    [(code.to_string(), name.to_string())].into_iter().collect()
}
