//! Prompt line editor.
//!
//! Terminals in raw mode do not echo or buffer lines, so the prompt keeps its
//! own bounded buffer and hands out the line on Enter.

use arrayvec::ArrayString;

use crate::map::EditAction;

/// Longest line the prompt accepts. Further input is ignored.
pub const LINE_CAPACITY: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buf: ArrayString<LINE_CAPACITY>,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text typed so far.
    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// Apply an edit. Returns the finished line on submit and starts a new one.
    pub fn apply(&mut self, action: EditAction) -> Option<String> {
        match action {
            EditAction::Insert(ch) => {
                // Full buffer: drop the character.
                let _ = self.buf.try_push(ch);
                None
            }
            EditAction::Backspace => {
                self.buf.pop();
                None
            }
            EditAction::Submit => {
                let line = self.buf.as_str().to_owned();
                self.buf.clear();
                Some(line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(editor: &mut LineEditor, s: &str) {
        for ch in s.chars() {
            assert_eq!(editor.apply(EditAction::Insert(ch)), None);
        }
    }

    #[test]
    fn test_submit_returns_line_and_resets() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "1,2");
        assert_eq!(editor.as_str(), "1,2");
        assert_eq!(editor.apply(EditAction::Submit), Some("1,2".to_owned()));
        assert_eq!(editor.as_str(), "");
    }

    #[test]
    fn test_backspace() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, "12");
        editor.apply(EditAction::Backspace);
        assert_eq!(editor.as_str(), "1");
        editor.apply(EditAction::Backspace);
        editor.apply(EditAction::Backspace);
        assert_eq!(editor.as_str(), "");
    }

    #[test]
    fn test_capacity_is_bounded() {
        let mut editor = LineEditor::new();
        type_str(&mut editor, &"x".repeat(LINE_CAPACITY + 10));
        assert_eq!(editor.as_str().len(), LINE_CAPACITY);
    }
}
