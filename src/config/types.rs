use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend endpoints and HTTP client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend (e.g., "http://localhost:3000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the currency symbols endpoint (GET).
    #[serde(default = "default_symbols_path")]
    pub symbols_path: String,
    /// Path of the conversion endpoint (POST).
    #[serde(default = "default_convert_path")]
    pub convert_path: String,
    /// Path of the conversion history endpoint (GET).
    #[serde(default = "default_history_path")]
    pub history_path: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_symbols_path() -> String {
    "/api/currency/symbols".to_string()
}

fn default_convert_path() -> String {
    "/api/currency/convert".to_string()
}

fn default_history_path() -> String {
    "/api/currency/conversions".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            symbols_path: default_symbols_path(),
            convert_path: default_convert_path(),
            history_path: default_history_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
