//! Comment purification — strip `*` decoration and normalize indentation.
//!
//! Two layouts are tolerated: consistently `*`-prefixed lines (the common
//! `/** ... */` body), and star-free text where the first non-blank line's
//! leading whitespace fixes the reference indent for the whole comment.

use regex::Regex;
use std::sync::LazyLock;

static RE_STAR_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*\s?(.*)$").unwrap());

static RE_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*$").unwrap());

/// Strip comment decoration from the body of a `/** ... */` block.
///
/// A line matching `^\s*\*\s?(.*)$` keeps only the captured group and fixes
/// the indent-trim at zero for the rest of the comment. Blank lines pass
/// through unchanged. Otherwise the first non-blank line measures the
/// reference indent, and every later line has up to that many leading
/// whitespace characters removed (fewer when less whitespace is present).
pub fn purify(input: &str) -> String {
    let mut indent: Option<usize> = None;
    let mut out: Vec<String> = Vec::new();

    for line in input.lines() {
        if let Some(caps) = RE_STAR_LINE.captures(line) {
            indent = Some(0);
            out.push(caps[1].to_string());
        } else if RE_BLANK.is_match(line) {
            out.push(line.to_string());
        } else if let Some(width) = indent {
            out.push(strip_indent(line, width));
        } else {
            let width = leading_white_width(line);
            indent = Some(width);
            out.push(strip_indent(line, width));
        }
    }

    out.join("\n")
}

fn leading_white_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Remove up to `width` leading whitespace characters.
fn strip_indent(line: &str, width: usize) -> String {
    let mut chars = line.char_indices();
    let mut removed = 0;
    for (i, c) in chars.by_ref() {
        if removed >= width || !c.is_whitespace() {
            return line[i..].to_string();
        }
        removed += 1;
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_lines_strip_exactly_star_space() {
        let input = " * Some docs.\n * More docs.";
        assert_eq!(purify(input), "Some docs.\nMore docs.");
    }

    #[test]
    fn star_lines_preserve_inner_indentation() {
        let input = " * Code:\n *     indented();";
        assert_eq!(purify(input), "Code:\n    indented();");
    }

    #[test]
    fn star_without_trailing_space() {
        assert_eq!(purify(" *Some docs."), "Some docs.");
    }

    #[test]
    fn star_free_strips_first_line_width() {
        let input = "    First line.\n    Second line.\n      Deeper.";
        assert_eq!(purify(input), "First line.\nSecond line.\n  Deeper.");
    }

    #[test]
    fn star_free_shallower_lines_lose_less() {
        let input = "    First.\n  Shallow.";
        assert_eq!(purify(input), "First.\nShallow.");
    }

    #[test]
    fn blank_lines_pass_through() {
        let input = " * a\n\n * b";
        assert_eq!(purify(input), "a\n\nb");
    }

    #[test]
    fn blank_line_before_reference_indent() {
        let input = "\n   text here";
        assert_eq!(purify(input), "\ntext here");
    }

    #[test]
    fn star_mode_zeroes_trim_for_later_plain_lines() {
        // Once a star line is seen, plain lines are kept as-is.
        let input = " * a\n   plain";
        assert_eq!(purify(input), "a\n   plain");
    }
}
