//! Key mapping from terminal events to line-editing actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press does to the prompt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Backspace,
    Submit,
}

/// Map keyboard input to edit actions.
pub fn handle_key_event(key: KeyEvent) -> Option<EditAction> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(EditAction::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(EditAction::Backspace),
        KeyCode::Char(ch) if !ch.is_control() => Some(EditAction::Insert(ch)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_printable_keys_insert() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(EditAction::Insert('1'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(','))),
            Some(EditAction::Insert(','))
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT)),
            Some(EditAction::Insert('E'))
        );
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(EditAction::Submit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(EditAction::Backspace)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), None);
    }

    #[test]
    fn test_control_chords_do_not_insert() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
