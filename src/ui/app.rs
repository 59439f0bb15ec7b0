use crate::api::ConversionGateway;
use crate::mvi::Reducer;
use crate::ui::picker::{PickerIntent, PickerReducer, PickerState, PickerTarget};
use crate::workflow::{Workflow, WorkflowState};

/// Focusable parts of the conversion form, in tab order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormField {
    Amount,
    Origin,
    Destination,
    Convert,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Amount => FormField::Origin,
            FormField::Origin => FormField::Destination,
            FormField::Destination => FormField::Convert,
            FormField::Convert => FormField::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Amount => FormField::Convert,
            FormField::Origin => FormField::Amount,
            FormField::Destination => FormField::Origin,
            FormField::Convert => FormField::Destination,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: FormField,
    picker: PickerState,
    workflow: Workflow<dyn ConversionGateway>,
    /// Why the last submit attempt was refused locally.
    notice: Option<String>,
    spinner_tick: u8,
}

impl App {
    pub fn new(workflow: Workflow<dyn ConversionGateway>) -> Self {
        Self {
            should_quit: false,
            focus: FormField::Amount,
            picker: PickerState::default(),
            workflow,
            notice: None,
            spinner_tick: 0,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        self.workflow.state()
    }

    pub fn workflow_mut(&mut self) -> &mut Workflow<dyn ConversionGateway> {
        &mut self.workflow
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn on_tick(&mut self) {
        if self.state().is_submitting || self.state().is_loading_history {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn type_amount(&mut self, ch: char) {
        let mut text = self.state().amount_text.clone();
        text.push(ch);
        self.workflow.update_amount(&text);
        self.notice = None;
    }

    pub fn backspace_amount(&mut self) {
        let mut text = self.state().amount_text.clone();
        text.pop();
        self.workflow.update_amount(&text);
    }

    pub fn submit(&mut self) {
        self.notice = match self.workflow.submit() {
            Ok(()) => None,
            Err(err) => Some(err.message),
        };
    }

    pub fn has_error(&self) -> bool {
        self.state().error.is_some()
    }

    pub fn dismiss_error(&mut self) {
        self.workflow.dismiss_error();
    }

    /// Reloads currency symbols and history.
    pub fn reload(&mut self) {
        self.workflow.initialize();
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker.is_visible()
    }

    pub fn open_picker(&mut self, target: PickerTarget, query: String) {
        let options = self.state().currency_symbols.clone();
        dispatch_mvi!(
            self,
            picker,
            PickerReducer,
            PickerIntent::Open {
                target,
                options,
                query,
            }
        );
    }

    pub fn picker_intent(&mut self, intent: PickerIntent) {
        dispatch_mvi!(self, picker, PickerReducer, intent);
    }

    /// Applies the highlighted option to the picker's target field.
    ///
    /// With no highlighted option this behaves like a cleared selection:
    /// the field keeps its previous value.
    pub fn confirm_picker(&mut self) {
        let Some(target) = self.picker.target() else {
            return;
        };
        let selected = self.picker.selected_option().cloned();
        match target {
            PickerTarget::Origin => self.workflow.select_origin(selected.as_ref()),
            PickerTarget::Destination => self.workflow.select_destination(selected.as_ref()),
        }
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Close);
        if selected.is_some() {
            self.notice = None;
            self.focus_next();
        }
    }

    pub fn cancel_picker(&mut self) {
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Close);
    }

    /// Opens the picker for the focused selector, if any.
    pub fn open_picker_for_focus(&mut self, query: String) -> bool {
        let target = match self.focus {
            FormField::Origin => PickerTarget::Origin,
            FormField::Destination => PickerTarget::Destination,
            _ => return false,
        };
        self.open_picker(target, query);
        true
    }
}
