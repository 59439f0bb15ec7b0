//! Terminal front end for the conversion workflow.
//!
//! Renders [`crate::workflow::WorkflowState`] and turns key presses into
//! workflow operations. Holds no conversion logic of its own.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod picker;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
