use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{currency_options, ConversionGateway, CurrencyOption};
use crate::mvi::Reducer;
use crate::workflow::error::WorkflowError;
use crate::workflow::intent::WorkflowIntent;
use crate::workflow::reducer::WorkflowReducer;
use crate::workflow::state::WorkflowState;

/// Owns the [`WorkflowState`] and runs the gateway calls its transitions
/// ask for.
///
/// Gateway calls run as spawned tokio tasks and report back through a
/// channel; their outcomes are applied only by [`Workflow::next_completion`],
/// so every state change happens on the task that owns the workflow.
/// Requires a tokio runtime.
pub struct Workflow<G: ConversionGateway + ?Sized + 'static> {
    state: WorkflowState,
    gateway: Arc<G>,
    completions_tx: mpsc::UnboundedSender<WorkflowIntent>,
    completions_rx: mpsc::UnboundedReceiver<WorkflowIntent>,
    in_flight: usize,
}

impl<G: ConversionGateway + ?Sized + 'static> Workflow<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: WorkflowState::default(),
            gateway,
            completions_tx,
            completions_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Number of gateway calls whose outcome has not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Loads currency symbols and the conversion history.
    pub fn initialize(&mut self) {
        self.load_symbols();
        self.refresh_history();
    }

    pub fn load_symbols(&mut self) {
        self.dispatch(WorkflowIntent::SymbolsRequested);
        let generation = self.state.generations.symbols;
        let gateway = Arc::clone(&self.gateway);

        let aborted = WorkflowIntent::SymbolsLoaded {
            generation,
            outcome: Err(WorkflowError::aborted("Loading currency symbols")),
        };
        self.spawn(aborted, async move {
            let outcome = match gateway.fetch_currency_symbols().await {
                Ok(envelope) => Ok(currency_options(&envelope.data)),
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to load currency symbols");
                    Err(WorkflowError::from(err))
                }
            };
            WorkflowIntent::SymbolsLoaded {
                generation,
                outcome,
            }
        });
    }

    pub fn refresh_history(&mut self) {
        self.dispatch(WorkflowIntent::HistoryRequested);
        let generation = self.state.generations.history;
        let gateway = Arc::clone(&self.gateway);

        let aborted = WorkflowIntent::HistoryLoaded {
            generation,
            outcome: Err(WorkflowError::aborted("Loading conversion history")),
        };
        self.spawn(aborted, async move {
            let outcome = match gateway.get_all_conversion_entries().await {
                Ok(envelope) => Ok(envelope.data),
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to load conversion history");
                    Err(WorkflowError::from(err))
                }
            };
            WorkflowIntent::HistoryLoaded {
                generation,
                outcome,
            }
        });
    }

    pub fn update_amount(&mut self, text: &str) {
        self.dispatch(WorkflowIntent::AmountChanged {
            text: text.to_string(),
        });
    }

    pub fn select_origin(&mut self, option: Option<&CurrencyOption>) {
        self.dispatch(WorkflowIntent::OriginSelected {
            code: option.map(|o| o.value.clone()),
        });
    }

    pub fn select_destination(&mut self, option: Option<&CurrencyOption>) {
        self.dispatch(WorkflowIntent::DestinationSelected {
            code: option.map(|o| o.value.clone()),
        });
    }

    /// Starts a conversion for the current form.
    ///
    /// Fails with a validation error, without touching the network or the
    /// error slot, when the form is incomplete or a submission is already
    /// running.
    pub fn submit(&mut self) -> Result<(), WorkflowError> {
        let request = self.state.validate_submission()?;
        self.dispatch(WorkflowIntent::SubmitRequested);
        let generation = self.state.generations.submit;
        let gateway = Arc::clone(&self.gateway);

        tracing::debug!(
            amount = ?request.amount,
            from = %request.from,
            to = %request.to,
            "Submitting conversion"
        );

        let aborted = WorkflowIntent::SubmitCompleted {
            generation,
            outcome: Err(WorkflowError::aborted("Conversion")),
        };
        self.spawn(aborted, async move {
            let outcome = match gateway.convert_currency(&request).await {
                Ok(envelope) => {
                    tracing::info!(
                        from = %request.from,
                        to = %request.to,
                        result = ?envelope.data.dest_amount,
                        "Conversion completed"
                    );
                    Ok(envelope.data)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Conversion failed");
                    Err(WorkflowError::from(err))
                }
            };
            WorkflowIntent::SubmitCompleted {
                generation,
                outcome,
            }
        });
        Ok(())
    }

    pub fn dismiss_error(&mut self) {
        self.dispatch(WorkflowIntent::ErrorDismissed);
    }

    /// Waits for the next gateway call to finish and applies its outcome.
    ///
    /// Pends indefinitely while nothing is in flight, which makes it safe to
    /// use as a `tokio::select!` branch.
    pub async fn next_completion(&mut self) {
        if let Some(intent) = self.completions_rx.recv().await {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply(intent);
        }
    }

    /// Applies every completion that has already arrived, without waiting.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.completions_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply(intent);
            applied += 1;
        }
        applied
    }

    /// Drives completions until no gateway call is in flight, including
    /// follow-up calls issued along the way.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            self.next_completion().await;
        }
    }

    /// Drives completions until the running submission, if any, has
    /// finished. Follow-up calls it triggers may still be in flight.
    pub async fn settle_submission(&mut self) {
        while self.state.is_submitting && self.in_flight > 0 {
            self.next_completion().await;
        }
    }

    fn apply(&mut self, intent: WorkflowIntent) {
        // History is refreshed only after the latest submission succeeds.
        let refresh_history = matches!(
            &intent,
            WorkflowIntent::SubmitCompleted { generation, outcome: Ok(_) }
                if *generation == self.state.generations.submit
        );

        self.dispatch(intent);

        if refresh_history {
            self.refresh_history();
        }
    }

    fn dispatch(&mut self, intent: WorkflowIntent) {
        self.state = WorkflowReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Runs `task` and reports its completion. If the task panics,
    /// `aborted` is reported in its place so `in_flight` still drops.
    fn spawn<F>(&mut self, aborted: WorkflowIntent, task: F)
    where
        F: Future<Output = WorkflowIntent> + Send + 'static,
    {
        self.in_flight += 1;
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let intent = match tokio::spawn(task).await {
                Ok(intent) => intent,
                Err(err) => {
                    tracing::error!(error = %err, "Gateway task aborted");
                    aborted
                }
            };
            let _ = completions.send(intent);
        });
    }
}
