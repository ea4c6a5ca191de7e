// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Minimal multiline text editing state shared by the question input box and
//! the feedback composer: a buffer plus a byte-offset cursor, with
//! wrap-aware cursor positioning for the draw pass.

use unicode_width::UnicodeWidthChar;

#[derive(Debug, Default, Clone)]
pub struct TextEdit {
    pub buffer: String,
    /// UTF-8 byte offset of the cursor within `buffer`.
    pub cursor: usize,
}

impl TextEdit {
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Replace the whole content, cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = prev_char_boundary(&self.buffer, self.cursor);
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            let next = next_char_boundary(&self.buffer, self.cursor);
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_char_boundary(&self.buffer, self.cursor);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor = next_char_boundary(&self.buffer, self.cursor);
        }
    }

    /// Move to the start of the current logical line.
    pub fn move_line_start(&mut self) {
        self.cursor = self.buffer[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// Move to the end of the current logical line.
    pub fn move_line_end(&mut self) {
        self.cursor = self.buffer[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.buffer.len());
    }

    /// Delete from the start of the current logical line to the cursor.
    pub fn delete_to_start(&mut self) {
        let start = self.buffer[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    /// Delete from the cursor to the end of the current logical line.
    pub fn delete_to_end(&mut self) {
        let end = self.buffer[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.buffer.len());
        self.buffer.replace_range(self.cursor..end, "");
    }

    /// Visual `(row, col)` of the cursor when the content is wrapped at
    /// `width` display columns.  Wide (CJK/emoji) characters count as two
    /// columns; explicit newlines always start a new row.
    pub fn cursor_position(&self, width: usize) -> (usize, usize) {
        let mut row = 0usize;
        let mut col = 0usize;
        for (offset, ch) in self.buffer.char_indices() {
            if offset >= self.cursor {
                break;
            }
            if ch == '\n' {
                row += 1;
                col = 0;
                continue;
            }
            let w = UnicodeWidthChar::width(ch).unwrap_or(1);
            if width > 0 && col + w > width {
                row += 1;
                col = 0;
            }
            col += w;
        }
        if width > 0 && col >= width {
            (row + 1, 0)
        } else {
            (row, col)
        }
    }
}

fn prev_char_boundary(s: &str, from: usize) -> usize {
    if from == 0 {
        return 0;
    }
    let mut i = from - 1;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    let mut i = from + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i.min(s.len())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(text: &str) -> TextEdit {
        let mut e = TextEdit::default();
        e.set(text);
        e
    }

    #[test]
    fn insert_then_clear() {
        let mut e = TextEdit::default();
        for c in "abc".chars() {
            e.insert_char(c);
        }
        assert_eq!(e.buffer, "abc");
        assert_eq!(e.cursor, 3);
        e.clear();
        assert!(e.buffer.is_empty());
        assert_eq!(e.cursor, 0);
    }

    #[test]
    fn backspace_removes_multibyte_char() {
        let mut e = edit("héllo");
        e.move_line_start();
        e.move_right();
        e.move_right();
        e.backspace();
        assert_eq!(e.buffer, "hllo");
        assert_eq!(e.cursor, 1);
    }

    #[test]
    fn delete_removes_at_cursor() {
        let mut e = edit("abc");
        e.move_line_start();
        e.delete();
        assert_eq!(e.buffer, "bc");
        assert_eq!(e.cursor, 0);
    }

    #[test]
    fn line_start_and_end_respect_newlines() {
        let mut e = edit("first\nsecond");
        // Cursor at end of "second"; line start lands after the newline.
        e.move_line_start();
        assert_eq!(e.cursor, 6);
        e.move_line_end();
        assert_eq!(e.cursor, 12);
    }

    #[test]
    fn delete_to_start_kills_current_line_only() {
        let mut e = edit("keep\nkill me");
        e.delete_to_start();
        assert_eq!(e.buffer, "keep\n");
    }

    #[test]
    fn cursor_position_counts_wide_chars_as_two_columns() {
        let mut e = edit("日本");
        e.cursor = e.buffer.len();
        assert_eq!(e.cursor_position(80), (0, 4));
    }

    #[test]
    fn cursor_position_soft_wraps() {
        let mut e = edit("abcdef");
        e.cursor = e.buffer.len();
        assert_eq!(e.cursor_position(4), (1, 2));
    }

    #[test]
    fn cursor_position_follows_newlines() {
        let mut e = edit("ab\ncd");
        e.cursor = e.buffer.len();
        assert_eq!(e.cursor_position(80), (1, 2));
    }
}
