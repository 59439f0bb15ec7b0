//! Unidirectional state primitives shared by the workflow and the UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Side effects (HTTP calls, timers) never run inside a reducer. The owner
//! of a state performs them and feeds their outcome back as another intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
