//! Conversion workflow: form state, submission and history.
//!
//! - `state.rs` - `WorkflowState`, the single owner of screen data
//! - `intent.rs` - user actions and gateway completions
//! - `reducer.rs` - pure transitions, including derived state
//! - `controller.rs` - `Workflow`, which issues gateway calls and feeds
//!   their outcomes back through the reducer

mod controller;
mod error;
mod intent;
mod reducer;
mod state;

pub use controller::Workflow;
pub use error::WorkflowError;
pub use intent::WorkflowIntent;
pub use reducer::WorkflowReducer;
pub use state::{Generations, Phase, WorkflowState};
