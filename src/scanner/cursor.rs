//! Position-addressable cursor over a flattened source buffer.
//!
//! Line breaks are ordinary characters here, so a token that spans several
//! physical lines is consumed with the same `next()` calls as one that
//! doesn't.

/// Saved cursor position, see [`Cursor::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().filter(|&c| c != '\r').collect(),
            pos: 0,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.0;
    }

    /// True if the buffer continues with `s` at the current position.
    pub fn starts_with(&self, s: &str) -> bool {
        let mut i = self.pos;
        for c in s.chars() {
            if self.chars.get(i) != Some(&c) {
                return false;
            }
            i += 1;
        }
        true
    }

    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    /// True if the previous character is a line break (or there is none).
    pub fn at_line_start(&self) -> bool {
        self.pos == 0 || self.chars.get(self.pos - 1) == Some(&'\n')
    }

    /// Consume spaces and tabs on the current line, returning how many.
    pub fn skip_blanks(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consume any whitespace, line breaks included.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consume up to and including the next line break.
    pub fn skip_line(&mut self) {
        while let Some(c) = self.next() {
            if c == '\n' {
                break;
            }
        }
    }
}

impl Iterator for Cursor {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_crosses_line_breaks() {
        let mut cur = Cursor::new("a\nb");
        assert_eq!(cur.next(), Some('a'));
        assert_eq!(cur.next(), Some('\n'));
        assert!(cur.at_line_start());
        assert_eq!(cur.next(), Some('b'));
        assert_eq!(cur.next(), None);
        assert!(cur.is_eof());
    }

    #[test]
    fn carriage_returns_dropped() {
        let cur = Cursor::new("a\r\nb");
        assert_eq!(cur.collect::<String>(), "a\nb");
    }

    #[test]
    fn mark_and_reset() {
        let mut cur = Cursor::new("  x");
        let mark = cur.mark();
        assert_eq!(cur.skip_blanks(), 2);
        assert_eq!(cur.peek(), Some('x'));
        cur.reset(mark);
        assert_eq!(cur.peek(), Some(' '));
    }

    #[test]
    fn starts_with_checks_ahead() {
        let mut cur = Cursor::new("def f");
        assert!(cur.starts_with("def "));
        assert!(!cur.starts_with("define"));
        cur.advance(4);
        assert_eq!(cur.peek(), Some('f'));
        assert!(!cur.starts_with("fx"));
    }

    #[test]
    fn skip_line_stops_after_break() {
        let mut cur = Cursor::new("# note\nx");
        cur.skip_line();
        assert_eq!(cur.peek(), Some('x'));
    }
}
