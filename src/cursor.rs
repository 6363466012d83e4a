use unicode_width::UnicodeWidthStr;

/// Single-line text buffer with a char-indexed cursor and an optional length cap.
#[derive(Clone, Debug, Default)]
pub struct CursorBuffer {
    content: String,
    cursor_char_pos: usize,
    char_limit: Option<usize>,
}

impl CursorBuffer {
    #[must_use]
    pub fn new(content: String) -> Self {
        let cursor_char_pos = content.chars().count();
        Self {
            content,
            cursor_char_pos,
            char_limit: None,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Input past `limit` chars is dropped.
    #[must_use]
    pub fn with_char_limit(limit: usize) -> Self {
        Self {
            char_limit: Some(limit),
            ..Self::default()
        }
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_pos_of(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map_or(self.content.len(), |(i, _)| i)
    }

    pub fn cursor_byte_pos(&self) -> usize {
        self.byte_pos_of(self.cursor_char_pos)
    }

    pub fn cursor_char_pos(&self) -> usize {
        self.cursor_char_pos
    }

    /// Terminal columns between the start of the buffer and the cursor.
    pub fn cursor_display_pos(&self) -> usize {
        self.content[..self.cursor_byte_pos()].width()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns false when the buffer is full.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.char_limit.is_some_and(|limit| self.char_count() >= limit) {
            return false;
        }
        let byte_pos = self.cursor_byte_pos();
        self.content.insert(byte_pos, c);
        self.cursor_char_pos += 1;
        true
    }

    pub fn delete_char_before(&mut self) -> bool {
        if self.cursor_char_pos == 0 {
            return false;
        }
        self.cursor_char_pos -= 1;
        let byte_pos = self.cursor_byte_pos();
        self.content.remove(byte_pos);
        true
    }

    pub fn delete_char_after(&mut self) -> bool {
        if self.cursor_char_pos >= self.char_count() {
            return false;
        }
        let byte_pos = self.cursor_byte_pos();
        self.content.remove(byte_pos);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor_char_pos = self.cursor_char_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_char_pos < self.char_count() {
            self.cursor_char_pos += 1;
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor_char_pos = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor_char_pos = self.char_count();
    }

    pub fn move_word_left(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        let mut pos = self.cursor_char_pos;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        self.cursor_char_pos = pos;
    }

    pub fn move_word_right(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        let mut pos = self.cursor_char_pos;

        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }

        self.cursor_char_pos = pos;
    }

    pub fn delete_word_before(&mut self) {
        let end_byte = self.cursor_byte_pos();
        self.move_word_left();
        let start_byte = self.cursor_byte_pos();
        self.content.replace_range(start_byte..end_byte, "");
    }

    pub fn delete_to_start(&mut self) {
        let byte_pos = self.cursor_byte_pos();
        self.content.replace_range(..byte_pos, "");
        self.cursor_char_pos = 0;
    }

    pub fn delete_to_end(&mut self) {
        let byte_pos = self.cursor_byte_pos();
        self.content.truncate(byte_pos);
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_char_pos = 0;
    }
}
