//! Balanced-delimiter consumption for type expressions and default values.
//!
//! Honors nested `{}`, `[]`, `()` and backslash-escaped quoted strings.
//! Malformed input is expected, not exceptional: when balancing fails the
//! cursor rewinds and the result degrades to a simple non-nested token
//! capture, so the caller always gets a value and the scan always moves
//! forward.

use crate::parser::cursor::Cursor;
use regex::Regex;
use std::sync::LazyLock;

static RE_PLAIN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[^{}\[\]()"']+"#).unwrap());

static RE_NOT_CURLY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^}]*").unwrap());

static RE_NOT_SQUARE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\]]*").unwrap());

static RE_DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"(?:[^"\\]|\\.)*""#).unwrap());

static RE_SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^'(?:[^'\\]|\\.)*'").unwrap());

static RE_BARE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[^\s{}\[\]()"']+"#).unwrap());

/// Result of a balanced capture. `Degraded` carries the rewound fallback
/// token so malformed type expressions never fail the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    Balanced(String),
    Degraded(String),
}

impl Capture {
    pub fn into_text(self) -> String {
        match self {
            Capture::Balanced(t) | Capture::Degraded(t) => t,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Capture::Degraded(_))
    }
}

/// Consume text up to an unnested `}`. The terminator is left unconsumed.
pub fn until_close_curly(cur: &mut Cursor) -> Capture {
    until_close(cur, '}', &RE_NOT_CURLY)
}

/// Consume text up to an unnested `]`. The terminator is left unconsumed.
pub fn until_close_square(cur: &mut Cursor) -> Capture {
    until_close(cur, ']', &RE_NOT_SQUARE)
}

fn until_close(cur: &mut Cursor, close: char, fallback: &Regex) -> Capture {
    let start = cur.pos();
    loop {
        match cur.peek() {
            Some(c) if c == close => {
                return Capture::Balanced(cur.slice(start, cur.pos()).to_string());
            }
            Some(_) => {
                if !eat_chunk(cur) {
                    break;
                }
            }
            None => break,
        }
    }
    // Unbalanced: rewind and take the simple non-nested token.
    cur.set_pos(start);
    let text = cur.scan(fallback).unwrap_or("");
    Capture::Degraded(text.to_string())
}

/// Consume a balanced value stopping at the first unnested whitespace or
/// stray closer. Returns None when nothing could be consumed; never errors.
pub fn until_space(cur: &mut Cursor) -> Option<String> {
    let start = cur.pos();
    loop {
        match cur.peek() {
            None => break,
            Some(c) if c.is_whitespace() => break,
            Some('}') | Some(']') | Some(')') => break,
            Some('{') | Some('[') | Some('(') | Some('"') | Some('\'') => {
                if !eat_group(cur) {
                    cur.set_pos(start);
                    return None;
                }
            }
            Some(_) => {
                cur.scan(&RE_BARE_RUN);
            }
        }
    }
    if cur.pos() == start {
        None
    } else {
        Some(cur.slice(start, cur.pos()).to_string())
    }
}

/// Consume either a maximal unnested run or one balanced sub-group.
/// False means the input cannot be balanced from here.
fn eat_chunk(cur: &mut Cursor) -> bool {
    match cur.peek() {
        None => false,
        Some('{') | Some('[') | Some('(') | Some('"') | Some('\'') => eat_group(cur),
        // A stray closer at this nesting level cannot be balanced.
        Some('}') | Some(']') | Some(')') => false,
        Some(_) => cur.scan(&RE_PLAIN_RUN).is_some(),
    }
}

/// Consume one recursively-balanced bracketed or quoted group.
fn eat_group(cur: &mut Cursor) -> bool {
    match cur.peek() {
        Some('"') => cur.scan(&RE_DOUBLE_QUOTED).is_some(),
        Some('\'') => cur.scan(&RE_SINGLE_QUOTED).is_some(),
        Some(open @ ('{' | '[' | '(')) => {
            let close = match open {
                '{' => '}',
                '[' => ']',
                _ => ')',
            };
            let save = cur.pos();
            cur.bump();
            loop {
                match cur.peek() {
                    Some(c) if c == close => {
                        cur.bump();
                        return true;
                    }
                    Some(_) => {
                        if !eat_chunk(cur) {
                            cur.set_pos(save);
                            return false;
                        }
                    }
                    None => {
                        cur.set_pos(save);
                        return false;
                    }
                }
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curly(input: &str) -> Capture {
        let mut cur = Cursor::new(input);
        assert!(cur.eat_char('{'));
        until_close_curly(&mut cur)
    }

    #[test]
    fn simple_type() {
        assert_eq!(curly("{Number} x"), Capture::Balanced("Number".to_string()));
    }

    #[test]
    fn nested_curlies() {
        assert_eq!(
            curly("{{foo: {bar: Number}}} rest"),
            Capture::Balanced("{foo: {bar: Number}}".to_string())
        );
    }

    #[test]
    fn function_type_with_parens() {
        assert_eq!(
            curly("{function(Number, String)} x"),
            Capture::Balanced("function(Number, String)".to_string())
        );
    }

    #[test]
    fn quoted_close_does_not_terminate() {
        assert_eq!(
            curly(r#"{"}"} rest"#),
            Capture::Balanced(r#""}""#.to_string())
        );
    }

    #[test]
    fn escaped_quote_inside_string() {
        assert_eq!(
            curly(r#"{"a\"}b"} rest"#),
            Capture::Balanced(r#""a\"}b""#.to_string())
        );
    }

    #[test]
    fn unbalanced_falls_back_to_token() {
        // Inner `[` never closes; fall back to everything before `}`.
        let cap = curly("{Array[} x");
        assert_eq!(cap, Capture::Degraded("Array[".to_string()));
    }

    #[test]
    fn missing_terminator_degrades() {
        let cap = curly("{Number");
        assert_eq!(cap, Capture::Degraded("Number".to_string()));
    }

    #[test]
    fn balanced_round_trips() {
        for t in ["Number", "String[]", "{a: (B|C)}", r#"'it''s'"#, "fn(a,{b:c})"] {
            let input = format!("{{{t}}} tail");
            let mut cur = Cursor::new(&input);
            cur.eat_char('{');
            assert_eq!(
                until_close_curly(&mut cur),
                Capture::Balanced(t.to_string()),
                "round trip failed for {t}"
            );
            assert!(cur.eat_char('}'));
        }
    }

    #[test]
    fn until_space_plain_token() {
        let mut cur = Cursor::new("simple rest");
        assert_eq!(until_space(&mut cur), Some("simple".to_string()));
        assert_eq!(cur.rest(), " rest");
    }

    #[test]
    fn until_space_balanced_object() {
        let mut cur = Cursor::new("{a: 1, b: 'x y'} tail");
        assert_eq!(until_space(&mut cur), Some("{a: 1, b: 'x y'}".to_string()));
    }

    #[test]
    fn until_space_quoted_default() {
        let mut cur = Cursor::new(r#""hello world" tail"#);
        assert_eq!(until_space(&mut cur), Some(r#""hello world""#.to_string()));
    }

    #[test]
    fn until_space_unbalanced_is_no_match() {
        let mut cur = Cursor::new("{a: 1");
        let pos = cur.pos();
        assert_eq!(until_space(&mut cur), None);
        assert_eq!(cur.pos(), pos);
    }

    #[test]
    fn until_space_stops_at_unnested_closer() {
        let mut cur = Cursor::new("foo]");
        assert_eq!(until_space(&mut cur), Some("foo".to_string()));
        assert_eq!(cur.peek(), Some(']'));
    }

    #[test]
    fn never_panics_on_junk() {
        for junk in ["{", "}", "{{{", r#"{"unterminated"#, "{)(}", ""] {
            let mut cur = Cursor::new(junk);
            cur.eat_char('{');
            let _ = until_close_curly(&mut cur);
            let mut cur = Cursor::new(junk);
            let _ = until_space(&mut cur);
        }
    }
}
