//! The comment driver: purified text in, flat tag list out.
//!
//! The list always starts with a plain doc tag holding the leading prose.
//! Prose after a tag accumulates into that tag's `doc` until the next tag
//! begins. An `@` only opens a tag at a tag position: at the very start,
//! or right after whitespace outside an indented code block. Everywhere
//! else it stays literal, so email addresses and code samples survive.

use crate::model::{Tag, TagKind};
use crate::parser::cursor::Cursor;
use crate::parser::purify::purify;
use crate::parser::registry::{Context, TagRegistry};
use crate::warnings::{Location, Reporter, WarnKind};
use regex::Regex;
use std::sync::LazyLock;

static RE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*").unwrap());

static RE_PROSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^@]+").unwrap());

/// Parse one purified-or-raw doc comment body into its flat tag list.
pub fn parse_comment(
    input: &str,
    location: Location,
    registry: &TagRegistry,
    reporter: &mut Reporter,
) -> Vec<Tag> {
    let text = purify(input);
    let mut ctx = Context::new(reporter, location);
    let mut cur = Cursor::new(&text);
    let mut tags = vec![Tag::new(TagKind::Doc)];
    let mut current = 0;

    while !cur.at_end() {
        if cur.peek() == Some('@') && at_tag_position(&tags[current].doc) {
            cur.bump();
            match cur.scan(&RE_KEYWORD) {
                Some(keyword) => match registry.by_keyword(keyword) {
                    Some(strategy) => {
                        let parsed = strategy.parse(&mut cur, &mut ctx);
                        cur.skip_horizontal_white();
                        if !parsed.is_empty() {
                            tags.extend(parsed);
                            current = tags.len() - 1;
                        }
                    }
                    None => {
                        ctx.warn(WarnKind::Tag, format!("unknown tag: @{keyword}"));
                        tags[current].doc.push('@');
                        tags[current].doc.push_str(keyword);
                    }
                },
                None => tags[current].doc.push('@'),
            }
        } else {
            // Literal '@' or a prose run up to the next '@'.
            if cur.peek() == Some('@') {
                tags[current].doc.push('@');
                cur.bump();
            }
            if let Some(prose) = cur.scan(&RE_PROSE) {
                tags[current].doc.push_str(prose);
            }
        }
    }

    for tag in &mut tags {
        tag.doc = tag.doc.trim().to_string();
    }
    tags
}

/// A tag may begin here: nothing accumulated yet, or the accumulated prose
/// ends with whitespace and the current line is not a 4-space-indented code
/// block.
fn at_tag_position(doc: &str) -> bool {
    if doc.is_empty() {
        return true;
    }
    if !doc.ends_with(|c: char| c.is_whitespace()) {
        return false;
    }
    let last_line = doc.rsplit('\n').next().unwrap_or("");
    last_line.chars().take_while(|c| *c == ' ').count() < 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warnings::Warning;

    fn parse(input: &str) -> (Vec<Tag>, Vec<Warning>) {
        let registry = TagRegistry::standard();
        let mut reporter = Reporter::new();
        let tags = parse_comment(
            input,
            Location::new("test.js", 1),
            &registry,
            &mut reporter,
        );
        (tags, reporter.take())
    }

    #[test]
    fn leading_doc_then_tags() {
        let (tags, warns) = parse(
            " * Frobnicates the widget.\n\
             * @param {Number} x The x coordinate.\n\
             * @return {Boolean} True on success.",
        );
        assert!(warns.is_empty());
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0].kind, TagKind::Doc);
        assert_eq!(tags[0].doc, "Frobnicates the widget.");
        assert_eq!(tags[1].kind, TagKind::Param);
        assert_eq!(tags[1].name.as_deref(), Some("x"));
        assert_eq!(tags[1].doc, "The x coordinate.");
        assert_eq!(tags[2].kind, TagKind::Return);
        assert_eq!(tags[2].doc, "True on success.");
    }

    #[test]
    fn prose_accumulates_across_lines() {
        let (tags, _) = parse(" * @param {String} s First line.\n * Second line.");
        assert_eq!(tags[1].doc, "First line.\nSecond line.");
    }

    #[test]
    fn empty_comment_is_single_blank_doc_tag() {
        let (tags, warns) = parse("");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind, TagKind::Doc);
        assert_eq!(tags[0].doc, "");
        assert!(warns.is_empty());
    }

    #[test]
    fn unknown_tag_warns_and_stays_literal() {
        let (tags, warns) = parse(" * See @bogus for details.");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].doc, "See @bogus for details.");
        assert_eq!(warns.len(), 1);
        assert_eq!(warns[0].kind, WarnKind::Tag);
        assert!(warns[0].message.contains("@bogus"));
    }

    #[test]
    fn email_address_stays_literal() {
        let (tags, warns) = parse(" * Mail john@example.com about it.");
        assert!(warns.is_empty());
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].doc, "Mail john@example.com about it.");
    }

    #[test]
    fn code_block_keeps_tags_literal() {
        let (tags, warns) = parse(
            " * Example:\n\
             *\n\
             *     el.on('click', handler);\n\
             *     @param stays literal here\n\
             * @param {Number} x Real tag.",
        );
        assert!(warns.is_empty());
        assert_eq!(tags.len(), 2);
        assert!(tags[0].doc.contains("@param stays literal here"));
        assert_eq!(tags[1].name.as_deref(), Some("x"));
    }

    #[test]
    fn bare_at_sign_is_literal() {
        let (tags, warns) = parse(" * Costs @ 5 dollars.");
        assert!(warns.is_empty());
        assert_eq!(tags[0].doc, "Costs @ 5 dollars.");
    }

    #[test]
    fn at_mid_word_is_literal() {
        let (tags, warns) = parse(" * foo@param bar");
        assert!(warns.is_empty());
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].doc, "foo@param bar");
    }

    #[test]
    fn discarded_tag_routes_prose_to_previous() {
        // @override without a class produces nothing; its line becomes prose
        // of the preceding tag.
        let (tags, _) = parse(" * Intro.\n * @override\n * Trailing prose.");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].doc, "Intro.\n\nTrailing prose.");
    }

    #[test]
    fn flag_tags_have_no_arguments() {
        let (tags, _) = parse(" * @static\n * @private");
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[1].kind, TagKind::Static);
        assert_eq!(tags[2].kind, TagKind::Private);
    }

    #[test]
    fn alias_dual_meaning_dispatch() {
        let (tags, _) = parse(" * @alias Ext.Panel#show");
        assert_eq!(tags[1].kind, TagKind::Inheritdoc);
        let (tags, _) = parse(" * @alias widget.textfield");
        assert_eq!(tags[1].kind, TagKind::Alias);
    }

    #[test]
    fn deprecated_text_is_its_doc() {
        let (tags, _) = parse(" * @deprecated 4.0 Use {@link #onRender} instead.");
        assert_eq!(tags[1].kind, TagKind::Deprecated);
        assert_eq!(tags[1].version.as_deref(), Some("4.0"));
        assert_eq!(tags[1].doc, "Use {@link #onRender} instead.");
    }

    #[test]
    fn malformed_type_still_produces_tag_and_warning() {
        let (tags, warns) = parse(" * @param {Array[ x docs");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1].kind, TagKind::Param);
        assert!(warns.iter().any(|w| w.kind == WarnKind::TagSyntax));
    }
}
