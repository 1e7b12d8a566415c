//! Keyboard event handling by wizard step.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::wizard::WizardStep;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if app.show_help {
        return handle_help_mode(key);
    }

    match app.wizard.step() {
        WizardStep::Religion => handle_religion_step(key),
        WizardStep::Review => handle_review_step(key),
        WizardStep::Finished => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
            Action::CloseHelp
        }
        _ => Action::None,
    }
}

fn handle_religion_step(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::CursorNext,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::CursorPrev,
        KeyCode::Up | KeyCode::Char('k') => Action::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => Action::CursorDown,
        KeyCode::Enter | KeyCode::Char(' ') => Action::SelectHighlighted,
        KeyCode::Char(c @ '1'..='9') => Action::SelectNumber((c as u8 - b'0') as usize),
        _ => Action::None,
    }
}

fn handle_review_step(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Enter => Action::Finish,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Action::Back,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::mpsc;

    use super::*;
    use crate::app::PickerSettings;
    use crate::catalog::Catalog;
    use crate::wizard::WizardSelection;

    fn app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(
            Arc::new(Catalog::builtin()),
            PickerSettings {
                advance_delay: Duration::from_millis(300),
                reselect_advances: true,
            },
            WizardSelection::default(),
            tx,
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_religion_step_keys() {
        let app = app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('3'))), Action::SelectNumber(3));
        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), Action::SelectHighlighted);
        assert_eq!(handle_key_event(&app, key(KeyCode::Down)), Action::CursorDown);
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('h'))), Action::CursorPrev);
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('0'))), Action::None);
    }

    #[test]
    fn test_help_mode_only_closes() {
        let mut app = app();
        app.show_help = true;
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('3'))), Action::None);
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::CloseHelp);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = app();
        app.show_help = true;
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&app, ctrl_c), Action::Quit);
    }
}
