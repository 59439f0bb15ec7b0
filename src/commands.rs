//! One-shot commands that run the workflow without the terminal UI.

use std::io::Write;
use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::api::{format_amount, ConversionGateway, CurrencyOption};
use crate::workflow::Workflow;

/// Prints every available currency as `CODE  Name`.
pub async fn list_symbols<G>(gateway: Arc<G>, out: &mut dyn Write) -> Result<()>
where
    G: ConversionGateway + ?Sized + 'static,
{
    let mut workflow = Workflow::new(gateway);
    workflow.load_symbols();
    workflow.settle().await;

    let state = workflow.state();
    if let Some(error) = &state.error {
        return Err(anyhow!(error.clone()));
    }
    for option in &state.currency_symbols {
        writeln!(out, "{:<5} {}", option.value, option.label)?;
    }
    Ok(())
}

/// Prints the conversion history, newest first, followed by the most
/// popular destination currency.
pub async fn show_history<G>(gateway: Arc<G>, out: &mut dyn Write) -> Result<()>
where
    G: ConversionGateway + ?Sized + 'static,
{
    let mut workflow = Workflow::new(gateway);
    workflow.refresh_history();
    workflow.settle().await;

    let state = workflow.state();
    if let Some(error) = &state.error {
        return Err(anyhow!(error.clone()));
    }

    writeln!(
        out,
        "{:>14}  {:<5} {:<5} {:>14}  {}",
        "Amount", "From", "To", "Result", "Timestamp"
    )?;
    for entry in state.conversion_history.iter().rev() {
        writeln!(
            out,
            "{:>14}  {:<5} {:<5} {:>14}  {}",
            format_amount(entry.original_amount),
            entry.from,
            entry.to,
            format_amount(entry.dest_amount),
            entry.created_at_local()
        )?;
    }
    writeln!(
        out,
        "Most popular destination currency: {}",
        state.most_popular_destination.as_deref().unwrap_or("-")
    )?;
    Ok(())
}

/// Submits one conversion through the same validation as the form and
/// prints the converted amount.
pub async fn convert<G>(
    gateway: Arc<G>,
    amount: &str,
    from: &str,
    to: &str,
    out: &mut dyn Write,
) -> Result<Option<f64>>
where
    G: ConversionGateway + ?Sized + 'static,
{
    let mut workflow = Workflow::new(gateway);
    workflow.update_amount(amount);
    workflow.select_origin(non_empty_option(from).as_ref());
    workflow.select_destination(non_empty_option(to).as_ref());
    workflow.submit()?;
    workflow.settle_submission().await;

    if let Some(error) = &workflow.state().error {
        return Err(anyhow!(error.clone()));
    }
    let result = workflow.state().conversion_result;

    // History errors past this point do not change the outcome.
    workflow.settle().await;
    if let Some(error) = &workflow.state().error {
        tracing::warn!(error = %error, "History refresh after conversion failed");
    }

    writeln!(out, "{} {} = {} {}", amount, from, format_amount(result), to)?;
    Ok(result)
}

fn non_empty_option(code: &str) -> Option<CurrencyOption> {
    let code = code.trim();
    if code.is_empty() {
        None
    } else {
        Some(CurrencyOption::new(code, code))
    }
}
