//! Editor buffer - a minimal multi-line text editor for markup snippets.
//!
//! Holds lines plus a cursor as (row, column) where column is a character
//! index, not a byte index. Rendering and key handling live elsewhere;
//! this type is pure state and fully unit-testable.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

/// Byte offset of character `col` in `line` (line length when past the end).
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

fn char_count(line: &str) -> usize {
    line.chars().count()
}

impl EditorBuffer {
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(String::from).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            row: 0,
            col: 0,
        }
    }

    /// The full buffer contents, newline-joined.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor as (row, column in characters).
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.row];
        let at = byte_index(line, self.col);
        line.insert(at, c);
        self.col += 1;
    }

    pub fn newline(&mut self) {
        let at = byte_index(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let at = byte_index(line, self.col - 1);
            line.remove(at);
            self.col -= 1;
        } else if self.row > 0 {
            let tail = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_count(&self.lines[self.row]);
            self.lines[self.row].push_str(&tail);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_count(&self.lines[self.row]);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < char_count(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(char_count(&self.lines[self.row]));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(char_count(&self.lines[self.row]));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = char_count(&self.lines[self.row]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_builds_text() {
        let mut ed = EditorBuffer::from_text("");
        for c in "<h1>".chars() {
            ed.insert_char(c);
        }
        assert_eq!(ed.text(), "<h1>");
        assert_eq!(ed.cursor(), (0, 4));
    }

    #[test]
    fn newline_splits_the_current_line() {
        let mut ed = EditorBuffer::from_text("abcd");
        ed.move_right();
        ed.move_right();
        ed.newline();
        assert_eq!(ed.text(), "ab\ncd");
        assert_eq!(ed.cursor(), (1, 0));
    }

    #[test]
    fn backspace_joins_lines_at_column_zero() {
        let mut ed = EditorBuffer::from_text("ab\ncd");
        ed.move_down();
        ed.backspace();
        assert_eq!(ed.text(), "abcd");
        assert_eq!(ed.cursor(), (0, 2));
    }

    #[test]
    fn cursor_clamps_when_moving_between_lines() {
        let mut ed = EditorBuffer::from_text("long line\nab");
        ed.move_end();
        ed.move_down();
        assert_eq!(ed.cursor(), (1, 2));
        ed.move_up();
        assert_eq!(ed.cursor(), (0, 2));
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut ed = EditorBuffer::from_text("héllo");
        ed.move_right();
        ed.move_right();
        ed.insert_char('X');
        assert_eq!(ed.text(), "héXllo");
        ed.backspace();
        assert_eq!(ed.text(), "héllo");
    }

    #[test]
    fn starter_round_trips_through_the_buffer() {
        let starter = "<h1>Hello Universe</h1>\n<p>System Online</p>\n";
        let ed = EditorBuffer::from_text(starter);
        assert_eq!(ed.text(), starter);
    }
}
