use crate::api::CurrencyOption;
use crate::mvi::State;

/// Which form field a picker selection goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Origin,
    Destination,
}

impl PickerTarget {
    pub fn title(&self) -> &'static str {
        match self {
            PickerTarget::Origin => "Convert from",
            PickerTarget::Destination => "Convert to",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PickerState {
    #[default]
    Hidden,
    Visible {
        target: PickerTarget,
        options: Vec<CurrencyOption>,
        query: String,
        /// Index into the filtered options.
        selected: usize,
    },
}

impl State for PickerState {}

impl PickerState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn target(&self) -> Option<PickerTarget> {
        match self {
            Self::Visible { target, .. } => Some(*target),
            Self::Hidden => None,
        }
    }

    pub fn query(&self) -> &str {
        match self {
            Self::Visible { query, .. } => query,
            Self::Hidden => "",
        }
    }

    /// Options matching the current query, in backend order.
    pub fn filtered(&self) -> Vec<&CurrencyOption> {
        match self {
            Self::Visible { options, query, .. } => {
                options.iter().filter(|option| option.matches(query)).collect()
            }
            Self::Hidden => Vec::new(),
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Visible { selected, .. } => Some(*selected),
            Self::Hidden => None,
        }
    }

    /// The highlighted option, if the filter leaves any.
    pub fn selected_option(&self) -> Option<&CurrencyOption> {
        let index = self.selected_index()?;
        self.filtered().get(index).copied()
    }
}
