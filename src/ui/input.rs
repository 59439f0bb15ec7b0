use crate::ui::app::{App, FormField};
use crate::ui::picker::PickerIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.is_picker_open() {
        handle_picker_key(app, key);
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.reload();
        return;
    }

    if matches!(key.code, KeyCode::Esc) {
        if app.has_error() {
            app.dismiss_error();
        }
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    match app.focus() {
        FormField::Amount => match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.type_amount(ch)
            }
            KeyCode::Backspace => app.backspace_amount(),
            KeyCode::Enter => app.focus_next(),
            _ => {}
        },
        FormField::Origin | FormField::Destination => match key.code {
            KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') => {
                app.open_picker_for_focus(String::new());
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.open_picker_for_focus(ch.to_string());
            }
            _ => {}
        },
        FormField::Convert => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                app.submit();
            }
        }
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_picker(),
        KeyCode::Enter => app.confirm_picker(),
        KeyCode::Up => app.picker_intent(PickerIntent::MoveUp),
        KeyCode::Down | KeyCode::Tab => app.picker_intent(PickerIntent::MoveDown),
        KeyCode::Backspace => app.picker_intent(PickerIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.picker_intent(PickerIntent::TypeChar(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
