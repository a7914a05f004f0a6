//! The prompt's input line.

/// Single-line edit buffer.
///
/// The caret is a character index in `0..=len`, so multi-byte input moves
/// and deletes whole characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: String,
    caret: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Caret position in characters.
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_at(&self, caret: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(caret)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Insert a character at the caret. Line breaks are dropped.
    pub fn insert(&mut self, c: char) {
        if c == '\n' || c == '\r' {
            return;
        }
        let at = self.byte_at(self.caret);
        self.buffer.insert(at, c);
        self.caret += 1;
    }

    /// Delete the character left of the caret.
    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        self.caret -= 1;
        let at = self.byte_at(self.caret);
        self.buffer.remove(at);
    }

    /// Delete the character under the caret.
    pub fn delete(&mut self) {
        if self.caret < self.char_len() {
            let at = self.byte_at(self.caret);
            self.buffer.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.caret = (self.caret + 1).min(self.char_len());
    }

    pub fn home(&mut self) {
        self.caret = 0;
    }

    pub fn end(&mut self) {
        self.caret = self.char_len();
    }

    /// Replace the contents and put the caret at the end.
    pub fn set(&mut self, text: &str) {
        self.buffer = text.replace(['\n', '\r'], "");
        self.end();
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.caret = 0;
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> LineEditor {
        let mut e = LineEditor::new();
        for c in s.chars() {
            e.insert(c);
        }
        e
    }

    #[test]
    fn insert_appends_at_caret() {
        let mut e = typed("hllo");
        e.home();
        e.right();
        e.insert('e');
        assert_eq!(e.text(), "hello");
        assert_eq!(e.caret(), 2);
    }

    #[test]
    fn backspace_and_delete() {
        let mut e = typed("abc");
        e.backspace();
        assert_eq!(e.text(), "ab");
        e.home();
        e.backspace();
        assert_eq!(e.text(), "ab");
        e.delete();
        assert_eq!(e.text(), "b");
        e.end();
        e.delete();
        assert_eq!(e.text(), "b");
    }

    #[test]
    fn multibyte_chars_edit_whole() {
        let mut e = typed("a—b");
        assert_eq!(e.caret(), 3);
        e.left();
        e.backspace();
        assert_eq!(e.text(), "ab");
        assert_eq!(e.caret(), 1);
    }

    #[test]
    fn caret_is_clamped() {
        let mut e = typed("ab");
        e.right();
        assert_eq!(e.caret(), 2);
        e.home();
        e.left();
        assert_eq!(e.caret(), 0);
    }

    #[test]
    fn set_moves_caret_to_end_and_strips_newlines() {
        let mut e = LineEditor::new();
        e.set("open\nproject1 ");
        assert_eq!(e.text(), "openproject1 ");
        assert_eq!(e.caret(), 13);
    }

    #[test]
    fn newline_input_is_ignored() {
        let e = typed("a\nb\r");
        assert_eq!(e.text(), "ab");
    }

    #[test]
    fn take_empties() {
        let mut e = typed("ls");
        assert_eq!(e.take(), "ls");
        assert!(e.is_empty());
        assert_eq!(e.caret(), 0);
    }
}
