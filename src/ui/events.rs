//! Event handling and key bindings

use super::app::App;
use super::core::{Interaction, WidgetKind};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the host
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    FocusNext,
    FocusPrev,
    ToggleHelp,
    /// Reload resettable widgets, then re-render
    Reset,
    Gesture(Interaction),
    Ignore,
}

/// Translate a key press for the focused widget kind.
///
/// Text fields capture printable characters, so `q` and `?` only act as
/// shortcuts when something else has focus.
pub fn map_key(key: KeyEvent, focused: Option<WidgetKind>) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Tab | KeyCode::Down => return KeyAction::FocusNext,
        KeyCode::BackTab | KeyCode::Up => return KeyAction::FocusPrev,
        _ => {}
    }

    if focused == Some(WidgetKind::TextField) {
        return match key.code {
            KeyCode::Char(c) => KeyAction::Gesture(Interaction::TypeChar(c)),
            KeyCode::Backspace => KeyAction::Gesture(Interaction::DeleteBackward),
            KeyCode::Delete => KeyAction::Gesture(Interaction::SetText(String::new())),
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('?') => KeyAction::ToggleHelp,
        KeyCode::Char('r') => KeyAction::Reset,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Gesture(Interaction::Tap),
        KeyCode::Right | KeyCode::Char('+' | 'l') => KeyAction::Gesture(Interaction::Increment),
        KeyCode::Left | KeyCode::Char('-' | 'h') => KeyAction::Gesture(Interaction::Decrement),
        KeyCode::Backspace | KeyCode::Delete => KeyAction::Gesture(Interaction::Select(None)),
        _ => KeyAction::Ignore,
    }
}

/// Handle one key press. Returns whether the app state changed.
pub fn handle_key(key: KeyEvent, app: &mut App) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    let focused = app.focused().and_then(|id| app.tree.kind(id));
    match map_key(key, focused) {
        KeyAction::Quit => {
            app.quit();
            true
        }
        KeyAction::FocusNext => {
            app.focus_next();
            true
        }
        KeyAction::FocusPrev => {
            app.focus_prev();
            true
        }
        KeyAction::ToggleHelp => {
            app.toggle_help();
            true
        }
        KeyAction::Reset => {
            app.tree.reset_ui(app.root);
            app.tree.update_ui(app.root);
            true
        }
        KeyAction::Gesture(interaction) => app.dispatch(interaction),
        KeyAction::Ignore => false,
    }
}

/// Handle a terminal event
pub fn handle_event(event: Event, app: &mut App) -> bool {
    match event {
        Event::Key(key) => handle_key(key, app),
        Event::Resize(_, _) => true,
        _ => false,
    }
}
