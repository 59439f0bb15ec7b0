use crate::mvi::Reducer;

use super::intent::PickerIntent;
use super::state::PickerState;

pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = PickerState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PickerIntent::Open {
                target,
                options,
                query,
            } => PickerState::Visible {
                target,
                options,
                query,
                selected: 0,
            },
            PickerIntent::Close => PickerState::Hidden,
            PickerIntent::TypeChar(ch) => match state {
                PickerState::Visible {
                    target,
                    options,
                    mut query,
                    ..
                } => {
                    query.push(ch);
                    PickerState::Visible {
                        target,
                        options,
                        query,
                        selected: 0,
                    }
                }
                other => other,
            },
            PickerIntent::Backspace => match state {
                PickerState::Visible {
                    target,
                    options,
                    mut query,
                    ..
                } => {
                    query.pop();
                    PickerState::Visible {
                        target,
                        options,
                        query,
                        selected: 0,
                    }
                }
                other => other,
            },
            PickerIntent::MoveUp => {
                let count = state.filtered().len();
                match state {
                    PickerState::Visible {
                        target,
                        options,
                        query,
                        selected,
                    } => {
                        let selected = if selected == 0 {
                            count.saturating_sub(1)
                        } else {
                            selected - 1
                        };
                        PickerState::Visible {
                            target,
                            options,
                            query,
                            selected,
                        }
                    }
                    other => other,
                }
            }
            PickerIntent::MoveDown => {
                let count = state.filtered().len();
                match state {
                    PickerState::Visible {
                        target,
                        options,
                        query,
                        selected,
                    } => {
                        let selected = if selected + 1 >= count { 0 } else { selected + 1 };
                        PickerState::Visible {
                            target,
                            options,
                            query,
                            selected,
                        }
                    }
                    other => other,
                }
            }
        }
    }
}
