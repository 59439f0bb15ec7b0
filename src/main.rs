use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use currency_converter::api::{ConversionGateway, HttpGateway};
use currency_converter::commands;
use currency_converter::config::Config;
use currency_converter::logging;
use currency_converter::ui;

#[derive(Parser)]
#[command(name = "currency-converter", version)]
#[command(
    about = "Convert amounts between currencies and browse past conversions",
    long_about = None
)]
struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the backend base URL from config
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available currencies
    Symbols,
    /// Show past conversions, newest first
    History,
    /// Convert an amount from one currency to another
    Convert {
        /// Amount to convert (digits with an optional decimal point)
        amount: String,
        /// Currency code to convert from
        from: String,
        /// Currency code to convert to
        to: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        None => logging::init_file_tracing(),
        Some(_) => logging::init_stderr_tracing(),
    }

    let config = load_config(&cli)?;
    let gateway: Arc<dyn ConversionGateway> =
        Arc::new(HttpGateway::new(&config.api).context("Failed to build HTTP client")?);

    let mut stdout = std::io::stdout();
    match cli.command {
        None => ui::run(&config, gateway).await?,
        Some(Commands::Symbols) => commands::list_symbols(gateway, &mut stdout).await?,
        Some(Commands::History) => commands::show_history(gateway, &mut stdout).await?,
        Some(Commands::Convert { amount, from, to }) => {
            commands::convert(gateway, &amount, &from, &to, &mut stdout).await?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)?;
    match &cli.api_url {
        Some(url) => Ok(config.with_base_url(url.clone())?),
        None => Ok(config),
    }
}
