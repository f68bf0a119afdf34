use crate::error::ParseError;

/// Deepest term nesting a parse may reach, and the tallest tree it may return.
pub const MAX_DEPTH: usize = 256;

/// Single-character lookahead over normalized input.
///
/// A cursor lives for exactly one parse call; nothing about it outlives the
/// tree it helps build.
#[derive(Debug)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            depth: 0,
        }
    }

    /// The character under the cursor, `None` past the end.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves one character forward. Saturates at the end sentinel.
    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Advances past `expected` if it is the current character.
    pub fn consume(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn at_number(&self) -> bool {
        matches!(self.current(), Some(c) if c.is_ascii_digit() || c == '.')
    }

    pub fn at_alpha(&self) -> bool {
        matches!(self.current(), Some(c) if c.is_alphabetic())
    }

    /// Opens one level of term nesting, failing past [`MAX_DEPTH`].
    pub fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { position: self.pos });
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consumes the maximal run of characters matching `pred` and returns it.
    pub fn take_while(&mut self, pred: impl Fn(&Self) -> bool) -> String {
        let start = self.pos;
        while pred(&*self) {
            self.advance();
        }
        self.chars[start..self.pos].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_reaches_end_sentinel() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.current(), Some('a'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('b'));
        cursor.advance();
        assert_eq!(cursor.current(), None);
        cursor.advance();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_consume_leaves_state_on_mismatch() {
        let mut cursor = Cursor::new("+1");
        assert!(!cursor.consume('-'));
        assert_eq!(cursor.position(), 0);
        assert!(cursor.consume('+'));
        assert_eq!(cursor.current(), Some('1'));
    }

    #[test]
    fn test_classification() {
        let cursor = Cursor::new(".");
        assert!(cursor.at_number());
        assert!(!cursor.at_alpha());

        let cursor = Cursor::new("é");
        assert!(cursor.at_alpha());

        let cursor = Cursor::new("");
        assert!(!cursor.at_number());
        assert!(!cursor.at_alpha());
    }

    #[test]
    fn test_nesting_limit() {
        let mut cursor = Cursor::new("(((");
        for _ in 0..MAX_DEPTH {
            cursor.enter().unwrap();
        }
        assert_eq!(cursor.enter(), Err(ParseError::TooDeep { position: 0 }));

        cursor.leave();
        assert!(cursor.enter().is_ok());
    }

    #[test]
    fn test_take_while_is_maximal() {
        let mut cursor = Cursor::new("12.5.1x");
        assert_eq!(cursor.take_while(Cursor::at_number), "12.5.1");
        assert_eq!(cursor.take_while(Cursor::at_alpha), "x");
        assert_eq!(cursor.current(), None);
    }
}
