//! Searchable currency selector shown over the form.

mod intent;
mod reducer;
mod state;

pub use intent::PickerIntent;
pub use reducer::PickerReducer;
pub use state::{PickerState, PickerTarget};
