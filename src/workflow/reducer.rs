//! State transitions for the conversion workflow.

use crate::aggregate::most_common_by;
use crate::amount::parse_amount;
use crate::api::ConversionEntry;
use crate::mvi::Reducer;

use super::intent::WorkflowIntent;
use super::state::WorkflowState;

pub struct WorkflowReducer;

impl Reducer for WorkflowReducer {
    type State = WorkflowState;
    type Intent = WorkflowIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WorkflowIntent::AmountChanged { text } => WorkflowState {
                amount: parse_amount(&text),
                amount_text: text,
                ..state
            },

            WorkflowIntent::OriginSelected { code: Some(code) } => WorkflowState {
                origin_currency: code,
                ..state
            },
            WorkflowIntent::DestinationSelected { code: Some(code) } => WorkflowState {
                dest_currency: code,
                ..state
            },
            WorkflowIntent::OriginSelected { code: None }
            | WorkflowIntent::DestinationSelected { code: None } => state,

            WorkflowIntent::SymbolsRequested => {
                let mut generations = state.generations;
                generations.symbols += 1;
                WorkflowState {
                    generations,
                    ..state
                }
            }

            WorkflowIntent::SymbolsLoaded { generation, outcome } => {
                if generation != state.generations.symbols {
                    return state;
                }
                match outcome {
                    Ok(currency_symbols) => WorkflowState {
                        currency_symbols,
                        ..state
                    },
                    Err(error) => WorkflowState {
                        error: Some(error),
                        ..state
                    },
                }
            }

            WorkflowIntent::HistoryRequested => {
                let mut generations = state.generations;
                generations.history += 1;
                WorkflowState {
                    generations,
                    is_loading_history: true,
                    ..state
                }
            }

            WorkflowIntent::HistoryLoaded { generation, outcome } => {
                if generation != state.generations.history {
                    return state;
                }
                match outcome {
                    Ok(entries) => with_history(
                        WorkflowState {
                            is_loading_history: false,
                            ..state
                        },
                        entries,
                    ),
                    Err(error) => WorkflowState {
                        is_loading_history: false,
                        error: Some(error),
                        ..state
                    },
                }
            }

            WorkflowIntent::SubmitRequested => {
                if !state.can_submit() {
                    return state;
                }
                let mut generations = state.generations;
                generations.submit += 1;
                WorkflowState {
                    generations,
                    is_submitting: true,
                    ..state
                }
            }

            WorkflowIntent::SubmitCompleted { generation, outcome } => {
                if generation != state.generations.submit {
                    return state;
                }
                match outcome {
                    Ok(entry) => WorkflowState {
                        conversion_result: entry.dest_amount,
                        amount: None,
                        amount_text: String::new(),
                        origin_currency: String::new(),
                        dest_currency: String::new(),
                        is_submitting: false,
                        ..state
                    },
                    // Form is left populated so the user can retry.
                    Err(error) => WorkflowState {
                        is_submitting: false,
                        error: Some(error),
                        ..state
                    },
                }
            }

            WorkflowIntent::ErrorDismissed => WorkflowState {
                error: None,
                ..state
            },
        }
    }
}

/// Replaces the history and recomputes the most popular destination.
fn with_history(state: WorkflowState, entries: Vec<ConversionEntry>) -> WorkflowState {
    let most_popular_destination = most_common_by(&entries, |entry| entry.to.clone());
    WorkflowState {
        conversion_history: entries,
        most_popular_destination,
        ..state
    }
}
