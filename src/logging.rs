use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for interactive mode.
pub const LOG_PATH_ENV: &str = "CURRENCY_CONVERTER_LOG";

/// Initialize tracing for the interactive terminal UI.
///
/// Logging is disabled by default so it cannot corrupt the display.
/// Set `CURRENCY_CONVERTER_LOG` to a file path to enable it.
///
/// Log files are created with unique names to prevent conflicts when
/// multiple instances run simultaneously: `{path}.{timestamp}.{pid}`
pub fn init_file_tracing() {
    let Some(log_path) = std::env::var(LOG_PATH_ENV).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(default_filter())
        .with(file_layer)
        .try_init();
}

/// Initialize tracing to stderr for one-shot commands.
pub fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
