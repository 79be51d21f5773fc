use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Up,
    Down,
    PageUp,
    PageDown,
    ToggleSelect,
    ToggleCleared,
    EditMemo,
    Submit,
    Blur,
    Backspace,
    Input(char),
    None,
}

/// Maps a key press to an action. While a memo is being edited every
/// printable key is text, so only `Ctrl+C` still quits.
pub fn map_key(key: KeyEvent, editing: bool) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return AppAction::Quit;
        }
        return AppAction::None;
    }

    if editing {
        return match key.code {
            KeyCode::Enter => AppAction::Submit,
            KeyCode::Esc | KeyCode::Tab => AppAction::Blur,
            KeyCode::Up => AppAction::Up,
            KeyCode::Down => AppAction::Down,
            KeyCode::PageUp => AppAction::PageUp,
            KeyCode::PageDown => AppAction::PageDown,
            KeyCode::Backspace => AppAction::Backspace,
            KeyCode::Char(ch) => AppAction::Input(ch),
            _ => AppAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => AppAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => AppAction::Up,
        KeyCode::Down | KeyCode::Char('j') => AppAction::Down,
        KeyCode::PageUp => AppAction::PageUp,
        KeyCode::PageDown => AppAction::PageDown,
        KeyCode::Char(' ') | KeyCode::Char('x') => AppAction::ToggleSelect,
        KeyCode::Char('c') => AppAction::ToggleCleared,
        KeyCode::Enter | KeyCode::Char('e') => AppAction::EditMemo,
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_are_commands_while_viewing() {
        assert_eq!(map_key(press(KeyCode::Char('q')), false), AppAction::Quit);
        assert_eq!(map_key(press(KeyCode::Char('c')), false), AppAction::ToggleCleared);
        assert_eq!(map_key(press(KeyCode::Enter), false), AppAction::EditMemo);
    }

    #[test]
    fn letters_are_text_while_editing() {
        assert_eq!(map_key(press(KeyCode::Char('q')), true), AppAction::Input('q'));
        assert_eq!(map_key(press(KeyCode::Char(' ')), true), AppAction::Input(' '));
        assert_eq!(map_key(press(KeyCode::Enter), true), AppAction::Submit);
        assert_eq!(map_key(press(KeyCode::Esc), true), AppAction::Blur);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, true), AppAction::Quit);
        assert_eq!(map_key(key, false), AppAction::Quit);
    }
}
