//! Multi-line text buffer with a cursor.
//!
//! Backs both the in-place slide editor and the import modal. The cursor is a
//! character index, never a byte offset, so non-ASCII text edits cleanly.

use crate::KeyInput;

/// Text buffer and cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    /// Cursor position in characters, `0..=char_count`.
    cursor: usize,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor as (line, column), both zero-based and counted in characters.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = self.text.chars().take(self.cursor);
        let mut line = 0;
        let mut col = 0;
        for c in before {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Apply an editing key. Returns whether the text changed.
    ///
    /// Keys with no editing meaning (Esc, Tab, Save) are ignored; the caller
    /// interprets them.
    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(c) => {
                self.insert(c);
                true
            },
            KeyInput::Enter => {
                self.insert('\n');
                true
            },
            KeyInput::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                self.remove_at_cursor();
                true
            },
            KeyInput::Delete => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                self.remove_at_cursor();
                true
            },
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            },
            KeyInput::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                false
            },
            KeyInput::Home => {
                let (_, col) = self.cursor_line_col();
                self.cursor -= col;
                false
            },
            KeyInput::End => {
                let rest = self.text.chars().skip(self.cursor).take_while(|&c| c != '\n').count();
                self.cursor += rest;
                false
            },
            KeyInput::Up => {
                let (line, col) = self.cursor_line_col();
                if line > 0 {
                    self.cursor = self.position_of(line - 1, col);
                }
                false
            },
            KeyInput::Down => {
                let (line, col) = self.cursor_line_col();
                if line + 1 < self.line_count() {
                    self.cursor = self.position_of(line + 1, col);
                }
                false
            },
            KeyInput::Tab | KeyInput::Esc | KeyInput::Save => false,
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text.char_indices().nth(char_idx).map_or(self.text.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    fn remove_at_cursor(&mut self) {
        let at = self.byte_offset(self.cursor);
        if at < self.text.len() {
            self.text.remove(at);
        }
    }

    /// Character index of (`line`, `col`), clamping `col` to the line length.
    fn position_of(&self, line: usize, col: usize) -> usize {
        let mut pos = 0;
        for (i, l) in self.text.split('\n').enumerate() {
            let len = l.chars().count();
            if i == line {
                return pos + col.min(len);
            }
            pos += len + 1;
        }
        self.char_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(buf: &mut TextBuffer, s: &str) {
        for c in s.chars() {
            buf.handle_key(KeyInput::Char(c));
        }
    }

    #[test]
    fn char_input_adds_to_buffer() {
        let mut buf = TextBuffer::new();
        type_str(&mut buf, "hi");

        assert_eq!(buf.text(), "hi");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn backspace_and_delete_remove_chars() {
        let mut buf = TextBuffer::with_text("abc");
        assert!(buf.handle_key(KeyInput::Backspace));
        assert_eq!(buf.text(), "ab");

        buf.handle_key(KeyInput::Home);
        assert!(buf.handle_key(KeyInput::Delete));
        assert_eq!(buf.text(), "b");

        buf.handle_key(KeyInput::End);
        assert!(!buf.handle_key(KeyInput::Delete));
    }

    #[test]
    fn edits_multibyte_text() {
        let mut buf = TextBuffer::with_text("日本");
        buf.handle_key(KeyInput::Left);
        type_str(&mut buf, "語");
        assert_eq!(buf.text(), "日語本");

        buf.handle_key(KeyInput::Backspace);
        assert_eq!(buf.text(), "日本");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn enter_inserts_newline_and_lines_navigate() {
        let mut buf = TextBuffer::new();
        type_str(&mut buf, "long line");
        buf.handle_key(KeyInput::Enter);
        type_str(&mut buf, "ab");

        assert_eq!(buf.cursor_line_col(), (1, 2));

        buf.handle_key(KeyInput::Up);
        assert_eq!(buf.cursor_line_col(), (0, 2));

        buf.handle_key(KeyInput::End);
        buf.handle_key(KeyInput::Down);
        assert_eq!(buf.cursor_line_col(), (1, 2));

        buf.handle_key(KeyInput::Home);
        assert_eq!(buf.cursor_line_col(), (1, 0));
    }

    #[test]
    fn control_keys_do_not_edit() {
        let mut buf = TextBuffer::with_text("x");
        assert!(!buf.handle_key(KeyInput::Esc));
        assert!(!buf.handle_key(KeyInput::Tab));
        assert!(!buf.handle_key(KeyInput::Save));
        assert_eq!(buf.text(), "x");
    }
}
