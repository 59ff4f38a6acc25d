//! Single-line text editing for the form inputs.

/// Text content and cursor (byte offset, always on a char boundary).
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
    masked: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// An input that renders every character as `*`.
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    /// Text as it should be drawn.
    pub fn display(&self) -> String {
        if self.masked {
            "*".repeat(self.text.chars().count())
        } else {
            self.text.clone()
        }
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor. Returns whether text changed.
    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    /// Delete the character under the cursor. Returns whether text changed.
    pub fn delete(&mut self) -> bool {
        let Some(next) = self.next_boundary() else {
            return false;
        };
        self.text.replace_range(self.cursor..next, "");
        true
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::new();
        s.chars().for_each(|c| input.insert(c));
        input
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = typed("ab.com");
        input.move_home();
        input.move_right();
        input.insert('@');
        assert_eq!(input.text(), "a@b.com");
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = typed("héllo");
        assert!(input.backspace());
        assert_eq!(input.text(), "héll");

        input.move_home();
        assert!(!input.backspace());
        input.move_right();
        assert!(input.delete());
        assert_eq!(input.text(), "hll");

        input.move_end();
        assert!(!input.delete());
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut input = typed("éé");
        input.move_left();
        assert_eq!(input.cursor_column(), 1);
        input.insert('x');
        assert_eq!(input.text(), "éxé");
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::masked();
        "sécret".chars().for_each(|c| input.insert(c));
        assert_eq!(input.display(), "******");
        assert_eq!(input.text(), "sécret");
    }
}
