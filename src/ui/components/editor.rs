//! Multi-line code editor with a logical-line cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::TEXT_MUTED;

/// Editable program source with cursor and vertical scroll state.
///
/// The cursor is a byte offset into `text`, always on a char boundary. The
/// editor owns the source text: a run captures a snapshot, so editing while
/// a request is pending can never affect that request.
#[derive(Debug, Clone, Default)]
pub struct CodeEditor {
    text: String,
    cursor: usize,
    scroll: usize,
}

impl CodeEditor {
    /// Create with initial contents, cursor at the end.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
            scroll: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return;
        }
        let col = self.text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = offset_at_column(&self.text, prev_start, start - 1, col);
    }

    pub fn move_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end >= self.text.len() {
            return;
        }
        let start = self.line_start(self.cursor);
        let col = self.text[start..self.cursor].chars().count();
        let next_start = end + 1;
        let next_end = self.line_end(next_start);
        self.cursor = offset_at_column(&self.text, next_start, next_end, col);
    }

    pub fn move_line_start(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_line_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    /// Cursor position as (line, column), both 0-indexed, column in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let line = self.text[..self.cursor].matches('\n').count();
        let col = self.text[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count();
        (line, col)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn line_start(&self, pos: usize) -> usize {
        self.text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.text[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(self.text.len())
    }

    fn ensure_cursor_visible(&mut self, height: usize) {
        let (line, _) = self.cursor_position();
        if line < self.scroll {
            self.scroll = line;
        } else if height > 0 && line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }

    /// Render the source with a line-number gutter and, when focused, a
    /// reversed cell at the cursor.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.ensure_cursor_visible(area.height as usize);

        let total_lines = self.text.split('\n').count();
        let number_width = total_lines.to_string().len().max(2);
        let gutter = number_width as u16 + 1;

        for (row, line) in self
            .text
            .split('\n')
            .skip(self.scroll)
            .take(area.height as usize)
            .enumerate()
        {
            let y = area.y + row as u16;
            let number = format!("{:>number_width$} ", self.scroll + row + 1);
            buf.set_string(area.x, y, &number, Style::default().fg(TEXT_MUTED));

            let avail = area.width.saturating_sub(gutter) as usize;
            let visible: String = line.chars().take(avail).collect();
            buf.set_string(area.x + gutter, y, &visible, Style::default());
        }

        if focused {
            let (cursor_line, cursor_col) = self.cursor_position();
            if let Some(row) = cursor_line.checked_sub(self.scroll) {
                if (row as u16) < area.height {
                    let max_x = area.width.saturating_sub(1);
                    let x = area.x + (gutter + cursor_col as u16).min(max_x);
                    let y = area.y + row as u16;
                    buf[(x, y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
                }
            }
        }
    }
}

/// Byte offset of `col` characters into the line spanning `[start, end)`,
/// clamped to the end of the line.
fn offset_at_column(text: &str, start: usize, end: usize, col: usize) -> usize {
    text[start..end]
        .char_indices()
        .nth(col)
        .map(|(i, _)| start + i)
        .unwrap_or(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_at_cursor() {
        let mut editor = CodeEditor::default();
        for c in "abc".chars() {
            editor.insert_char(c);
        }
        editor.move_left();
        editor.insert_char('X');
        assert_eq!(editor.text(), "abXc");
    }

    #[test]
    fn backspace_joins_lines() {
        let mut editor = CodeEditor::with_text("ab\ncd");
        editor.move_line_start();
        editor.backspace();
        assert_eq!(editor.text(), "abcd");
        assert_eq!(editor.cursor_position(), (0, 2));
    }

    #[test]
    fn backspace_at_start_is_a_noop() {
        let mut editor = CodeEditor::with_text("ab");
        editor.move_line_start();
        editor.backspace();
        assert_eq!(editor.text(), "ab");
    }

    #[test]
    fn vertical_movement_clamps_column_to_shorter_lines() {
        let mut editor = CodeEditor::with_text("long line\nhi\nanother long");
        // Cursor at end of last line; move up twice.
        editor.move_up();
        assert_eq!(editor.cursor_position(), (1, 2));
        editor.move_up();
        // Column is remembered per move, not across moves.
        assert_eq!(editor.cursor_position(), (0, 2));
    }

    #[test]
    fn move_down_from_last_line_is_a_noop() {
        let mut editor = CodeEditor::with_text("a\nb");
        editor.move_down();
        assert_eq!(editor.cursor_position(), (1, 1));
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut editor = CodeEditor::with_text("héllo");
        editor.move_line_start();
        editor.move_right();
        editor.move_right();
        assert_eq!(editor.cursor_position(), (0, 2));
        editor.backspace();
        assert_eq!(editor.text(), "hllo");
    }

    #[test]
    fn home_and_end_move_within_the_line() {
        let mut editor = CodeEditor::with_text("first\nsecond");
        editor.move_up();
        editor.move_line_end();
        assert_eq!(editor.cursor_position(), (0, 5));
        editor.move_line_start();
        assert_eq!(editor.cursor_position(), (0, 0));
    }
}
