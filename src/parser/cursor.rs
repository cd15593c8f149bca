//! Mutable scanning cursor over one purified comment.
//!
//! All tag strategies share one cursor per comment; each consumes exactly
//! its own argument syntax and leaves the position at the start of the
//! trailing prose. Patterns are `^`-anchored and applied to the unscanned
//! rest of the input.

use regex::Regex;
use std::sync::LazyLock;

static RE_IDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_$-]+").unwrap());

static RE_IDENT_CHAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_$-]+(?:\.[A-Za-z0-9_$-]+)*").unwrap());

static RE_WHITE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+").unwrap());

static RE_HORIZONTAL_WHITE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]+").unwrap());

pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    /// Unscanned remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Byte position, for save/rewind. Always on a char boundary.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(self.input.is_char_boundary(pos));
        self.pos = pos;
    }

    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.input[from..to]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Non-consuming test of an anchored pattern.
    pub fn look(&self, re: &Regex) -> bool {
        re.is_match(self.rest())
    }

    /// Consume an anchored pattern if it matches, returning the matched text.
    pub fn scan(&mut self, re: &Regex) -> Option<&'a str> {
        let m = re.find(self.rest())?;
        debug_assert_eq!(m.start(), 0, "cursor patterns must be ^-anchored");
        let text = &self.rest()[..m.end()];
        self.pos += m.end();
        Some(text)
    }

    /// Consume one expected character.
    pub fn eat_char(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume the next character unconditionally.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub fn skip_white(&mut self) {
        self.scan(&RE_WHITE);
    }

    pub fn skip_horizontal_white(&mut self) {
        self.scan(&RE_HORIZONTAL_WHITE);
    }

    /// `[A-Za-z0-9_$-]+`
    pub fn ident(&mut self) -> Option<&'a str> {
        self.scan(&RE_IDENT)
    }

    /// `ident(.ident)*`
    pub fn ident_chain(&mut self) -> Option<&'a str> {
        self.scan(&RE_IDENT_CHAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_advances() {
        let mut cur = Cursor::new("foo bar");
        assert_eq!(cur.ident(), Some("foo"));
        cur.skip_white();
        assert_eq!(cur.ident(), Some("bar"));
        assert!(cur.at_end());
    }

    #[test]
    fn look_does_not_advance() {
        let cur = Cursor::new("foo");
        assert!(cur.look(&RE_IDENT));
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn ident_chain_with_dots() {
        let mut cur = Cursor::new("Ext.grid.Panel rest");
        assert_eq!(cur.ident_chain(), Some("Ext.grid.Panel"));
        assert_eq!(cur.rest(), " rest");
    }

    #[test]
    fn ident_chain_does_not_eat_trailing_dot() {
        let mut cur = Cursor::new("foo. and prose");
        assert_eq!(cur.ident_chain(), Some("foo"));
        assert_eq!(cur.peek(), Some('.'));
    }

    #[test]
    fn ident_allows_dollar_and_dash() {
        let mut cur = Cursor::new("$button-height");
        assert_eq!(cur.ident(), Some("$button-height"));
    }

    #[test]
    fn horizontal_white_stops_at_newline() {
        let mut cur = Cursor::new("  \t\nx");
        cur.skip_horizontal_white();
        assert_eq!(cur.peek(), Some('\n'));
    }

    #[test]
    fn rewind() {
        let mut cur = Cursor::new("abc");
        let save = cur.pos();
        cur.bump();
        cur.bump();
        cur.set_pos(save);
        assert_eq!(cur.rest(), "abc");
    }
}
