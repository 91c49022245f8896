//! Line cursor
//!
//! Forward-only view over the lines of a theme file. Section parsers share one cursor by
//! `&mut` reference: they [`peek`](LineCursor::peek) at the next significant line and only
//! [`advance`](LineCursor::advance) once they have decided to consume it. A section that meets
//! the keyword of the next section therefore returns without consuming it, and the caller sees
//! the same line on its next peek.
//!
//! Blank lines and `#` comments are never significant and are stepped over by `peek`.

/// Comment marker, recognized after trimming.
pub const COMMENT_MARKER: char = '#';

/// A significant (non-blank, non-comment) line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the source
    pub number: usize,
    /// Line content with surrounding whitespace removed
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Split into `(key, value)` on the first run of whitespace.
    ///
    /// Returns `None` for a single-token line.
    pub fn entry(&self) -> Option<(&'a str, &'a str)> {
        let (key, rest) = self.text.split_once(char::is_whitespace)?;
        let value = rest.trim_start();
        if value.is_empty() {
            return None;
        }
        Some((key, value))
    }

    /// Whitespace-delimited tokens.
    pub fn tokens(&self) -> Vec<&'a str> {
        self.text.split_whitespace().collect()
    }
}

fn is_significant(text: &str) -> bool {
    !text.is_empty() && !text.starts_with(COMMENT_MARKER)
}

pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::from_lines(source.lines())
    }

    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        LineCursor {
            lines: lines.into_iter().collect(),
            pos: 0,
        }
    }

    /// Step over insignificant lines and return the next significant one without consuming it.
    pub fn peek(&mut self) -> Option<Line<'a>> {
        while let Some(raw) = self.lines.get(self.pos) {
            let text = raw.trim();
            if is_significant(text) {
                return Some(Line {
                    number: self.pos + 1,
                    text,
                });
            }
            self.pos += 1;
        }
        None
    }

    /// Consume the current line.
    pub fn advance(&mut self) {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// Return the next significant line and consume it.
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let line = self.peek()?;
        self.advance();
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_skips_blank_and_comments() {
        let mut cursor = LineCursor::new("\n  # note\n\n  name  Dark  \n");
        let line = cursor.peek().unwrap();
        assert_eq!(line.text, "name  Dark");
        assert_eq!(line.number, 4);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = LineCursor::new("a 1\nb 2");
        assert_eq!(cursor.peek().unwrap().text, "a 1");
        assert_eq!(cursor.peek().unwrap().text, "a 1");
        cursor.advance();
        assert_eq!(cursor.next_line().unwrap().text, "b 2");
        assert!(cursor.next_line().is_none());
        assert!(cursor.peek().is_none());
    }

    #[test]
    fn test_entry_splits_on_first_whitespace_run() {
        let line = Line {
            number: 1,
            text: "font   Fira Code",
        };
        assert_eq!(line.entry(), Some(("font", "Fira Code")));
    }

    #[test]
    fn test_entry_requires_value() {
        let line = Line {
            number: 1,
            text: "lonely",
        };
        assert_eq!(line.entry(), None);
    }

    #[test]
    fn test_tokens() {
        let line = Line {
            number: 1,
            text: "10\t20  30",
        };
        assert_eq!(line.tokens(), vec!["10", "20", "30"]);
    }
}
