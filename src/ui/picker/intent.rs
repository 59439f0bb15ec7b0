use crate::api::CurrencyOption;
use crate::mvi::Intent;

use super::state::PickerTarget;

#[derive(Debug, Clone)]
pub enum PickerIntent {
    Open {
        target: PickerTarget,
        options: Vec<CurrencyOption>,
        query: String,
    },
    Close,
    TypeChar(char),
    Backspace,
    MoveUp,
    MoveDown,
}

impl Intent for PickerIntent {}
