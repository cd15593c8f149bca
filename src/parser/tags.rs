//! One parsing/enrichment strategy per tag kind.
//!
//! Strategy shapes: bare flags, standard `{Type} [name=default]` tags,
//! rest-of-line free text, identifier-chain lists, alias shorthands, the
//! dual-meaning `@alias`, the conditionally-discarded `@override`, and the
//! `@enum` composite. Dual-source tags (`@extends`, `@mixins`, `@requires`)
//! also answer `from_declaration` for structurally-declared values.

use crate::model::{Deprecation, Entity, Tag, TagKind};
use crate::parser::cursor::Cursor;
use crate::parser::registry::{Context, TagStrategy};
use crate::parser::standard::{parse_standard, TagSpec};
use crate::warnings::WarnKind;
use regex::Regex;
use std::sync::LazyLock;

static RE_NONSPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+").unwrap());

static RE_REST_OF_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\n]*").unwrap());

static RE_VERSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d[\w.\-]*").unwrap());

static RE_REQUIRED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[ \t]*\(required\)").unwrap());

// Legacy inheritdoc spelling hiding behind @alias: "@alias Class#member".
// A look-ahead heuristic kept for backward compatibility, not a model to
// generalize.
static RE_ALIAS_AS_INHERITDOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+(?:[\w.]+)?#\w+").unwrap());

// "Class#member", "#member" or bare "Class".
static RE_INHERIT_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[\w$.]+#[\w$]+|#[\w$]+|[\w$.]+)").unwrap());

static RE_LIST_SEP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t,]+").unwrap());

/// The complete built-in strategy table, in registration order.
pub fn builtin_strategies() -> Vec<Box<dyn TagStrategy + Send + Sync>> {
    vec![
        // Entity-defining members
        Box::new(NamedMemberTag::new(TagKind::Class, &["class"])),
        Box::new(NamedMemberTag::new(TagKind::Method, &["method"])),
        Box::new(NamedMemberTag::new(TagKind::Event, &["event"])),
        Box::new(NamedMemberTag::new(TagKind::CssMixin, &["css_mixin"])),
        Box::new(CfgTag),
        Box::new(StandardMemberTag::new(TagKind::Property, &["property"])),
        Box::new(StandardMemberTag::new(TagKind::CssVar, &["css_var", "var"])),
        Box::new(EnumTag),
        // Member detail
        Box::new(ParamTag),
        Box::new(ReturnTag),
        Box::new(TypeTag),
        Box::new(ThrowsTag),
        Box::new(ConstructorTag),
        // Class metadata
        Box::new(ExtendsTag),
        Box::new(ListTag::new(TagKind::Mixins, &["mixins", "mixin"])),
        Box::new(ListTag::new(TagKind::Requires, &["requires"])),
        Box::new(ListTag::new(TagKind::Uses, &["uses"])),
        Box::new(ListTag::new(
            TagKind::AlternateClassNames,
            &["alternateClassName", "alternateClassNames"],
        )),
        Box::new(AliasTag),
        Box::new(AliasShorthandTag::new("xtype", "widget")),
        Box::new(AliasShorthandTag::new("ptype", "plugin")),
        Box::new(AliasShorthandTag::new("ftype", "feature")),
        Box::new(OverrideTag),
        Box::new(InheritdocTag),
        // Cross-cutting
        Box::new(DeprecatedTag),
        Box::new(SinceTag),
        Box::new(AuthorTag),
        Box::new(FlagTag::new(TagKind::Static, &["static"])),
        Box::new(FlagTag::new(TagKind::Private, &["private"])),
        Box::new(FlagTag::new(TagKind::Protected, &["protected"])),
        Box::new(FlagTag::new(TagKind::Readonly, &["readonly"])),
        Box::new(FlagTag::new(TagKind::Abstract, &["abstract"])),
        Box::new(FlagTag::new(TagKind::Hide, &["hide"])),
        Box::new(FlagTag::new(TagKind::Chainable, &["chainable"])),
        Box::new(FlagTag::new(TagKind::Singleton, &["singleton"])),
    ]
}

// -- Flag tags ------------------------------------------------------------

/// No argument; presence is the payload.
struct FlagTag {
    kind: TagKind,
    keywords: &'static [&'static str],
}

impl FlagTag {
    fn new(kind: TagKind, keywords: &'static [&'static str]) -> Self {
        FlagTag { kind, keywords }
    }
}

impl TagStrategy for FlagTag {
    fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    fn key(&self) -> TagKind {
        self.kind
    }

    fn parse(&self, _cur: &mut Cursor, _ctx: &mut Context) -> Vec<Tag> {
        vec![Tag::new(self.kind)]
    }

    fn enrich(&self, _tags: &[Tag], entity: &mut Entity, _ctx: &mut Context) {
        match self.kind {
            TagKind::Static => entity.is_static = true,
            TagKind::Private => entity.is_private = true,
            TagKind::Protected => entity.is_protected = true,
            TagKind::Readonly => entity.is_readonly = true,
            TagKind::Abstract => entity.is_abstract = true,
            TagKind::Chainable => entity.is_chainable = true,
            TagKind::Singleton => entity.is_singleton = true,
            // @hide overrides whatever else claimed visibility for this key.
            TagKind::Hide => entity.hidden = true,
            _ => {}
        }
    }
}

// -- Member tags ----------------------------------------------------------

/// `@class Name`, `@method name`, `@event name`, `@css_mixin name`.
struct NamedMemberTag {
    kind: TagKind,
    keywords: &'static [&'static str],
}

impl NamedMemberTag {
    fn new(kind: TagKind, keywords: &'static [&'static str]) -> Self {
        NamedMemberTag { kind, keywords }
    }
}

impl TagStrategy for NamedMemberTag {
    fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    fn key(&self) -> TagKind {
        self.kind
    }

    fn parse(&self, cur: &mut Cursor, ctx: &mut Context) -> Vec<Tag> {
        vec![parse_standard(cur, &TagSpec::name_only(self.kind), ctx)]
    }

    fn enrich(&self, tags: &[Tag], entity: &mut Entity, _ctx: &mut Context) {
        if self.kind == TagKind::Class && tags.iter().any(|t| t.is_enum) {
            entity.is_enum = true;
        }
    }
}

/// `@property {Type} [name=default]`, `@css_var {Type} [name=default]`.
struct StandardMemberTag {
    kind: TagKind,
    keywords: &'static [&'static str],
}

impl StandardMemberTag {
    fn new(kind: TagKind, keywords: &'static [&'static str]) -> Self {
        StandardMemberTag { kind, keywords }
    }
}

impl TagStrategy for StandardMemberTag {
    fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    fn key(&self) -> TagKind {
        self.kind
    }

    fn parse(&self, cur: &mut Cursor, ctx: &mut Context) -> Vec<Tag> {
        vec![parse_standard(cur, &TagSpec::full(self.kind), ctx)]
    }
}

/// `@cfg {Type} [name=default] (required)` — the trailing marker forces the
/// config non-optional.
struct CfgTag;

impl TagStrategy for CfgTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["cfg"]
    }

    fn key(&self) -> TagKind {
        TagKind::Cfg
    }

    fn parse(&self, cur: &mut Cursor, ctx: &mut Context) -> Vec<Tag> {
        let mut tag = parse_standard(cur, &TagSpec::full(TagKind::Cfg), ctx);
        if cur.scan(&RE_REQUIRED).is_some() {
            tag.optional = Some(false);
        }
        vec![tag]
    }
}

/// `@enum {Type} [name=default]` — composite: produces a class tag marked
/// as an enum.
struct EnumTag;

impl TagStrategy for EnumTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["enum"]
    }

    fn key(&self) -> TagKind {
        TagKind::Class
    }

    fn parse(&self, cur: &mut Cursor, ctx: &mut Context) -> Vec<Tag> {
        let mut tag = parse_standard(cur, &TagSpec::full(TagKind::Class), ctx);
        tag.is_enum = true;
        vec![tag]
    }
}

// -- Member detail --------------------------------------------------------

struct ParamTag;

impl TagStrategy for ParamTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["param"]
    }

    fn key(&self) -> TagKind {
        TagKind::Param
    }

    fn parse(&self, cur: &mut Cursor, ctx: &mut Context) -> Vec<Tag> {
        vec![parse_standard(cur, &TagSpec::full(TagKind::Param), ctx)]
    }
}

/// `@return {Type} docs...`. An identifier chain after the type is taken as
/// a name only when it is `return` or a dotted `return.*` subproperty;
/// anything else stays prose.
struct ReturnTag;

impl TagStrategy for ReturnTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["return", "returns"]
    }

    fn key(&self) -> TagKind {
        TagKind::Return
    }

    fn parse(&self, cur: &mut Cursor, ctx: &mut Context) -> Vec<Tag> {
        let mut tag = parse_standard(cur, &TagSpec::type_only(TagKind::Return), ctx);
        let save = cur.pos();
        cur.skip_horizontal_white();
        match cur.ident_chain() {
            Some(chain) if chain == "return" || chain.starts_with("return.") => {
                tag.name = Some(chain.to_string());
            }
            _ => cur.set_pos(save),
        }
        vec![tag]
    }
}

/// `@type {Foo}` or the braceless `@type Boolean|String`.
struct TypeTag;

impl TagStrategy for TypeTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["type"]
    }

    fn key(&self) -> TagKind {
        TagKind::Type
    }

    fn parse(&self, cur: &mut Cursor, ctx: &mut Context) -> Vec<Tag> {
        let save = cur.pos();
        cur.skip_horizontal_white();
        if cur.peek() == Some('{') {
            cur.set_pos(save);
            return vec![parse_standard(cur, &TagSpec::type_only(TagKind::Type), ctx)];
        }
        let mut tag = Tag::new(TagKind::Type);
        match cur.scan(&RE_NONSPACE) {
            Some(token) => tag.type_ = Some(token.to_string()),
            None => cur.set_pos(save),
        }
        vec![tag]
    }
}

struct ThrowsTag;

impl TagStrategy for ThrowsTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["throws"]
    }

    fn key(&self) -> TagKind {
        TagKind::Throws
    }

    fn parse(&self, cur: &mut Cursor, ctx: &mut Context) -> Vec<Tag> {
        vec![parse_standard(cur, &TagSpec::type_only(TagKind::Throws), ctx)]
    }
}

struct ConstructorTag;

impl TagStrategy for ConstructorTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["constructor"]
    }

    fn key(&self) -> TagKind {
        TagKind::Constructor
    }

    fn parse(&self, _cur: &mut Cursor, _ctx: &mut Context) -> Vec<Tag> {
        vec![Tag::new(TagKind::Constructor)]
    }
}

// -- Class metadata -------------------------------------------------------

/// `@extends Parent`. Dual-source: the same field can come from a
/// structural declaration.
struct ExtendsTag;

impl TagStrategy for ExtendsTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["extends", "extend"]
    }

    fn key(&self) -> TagKind {
        TagKind::Extends
    }

    fn parse(&self, cur: &mut Cursor, ctx: &mut Context) -> Vec<Tag> {
        vec![parse_standard(cur, &TagSpec::name_only(TagKind::Extends), ctx)]
    }

    fn enrich(&self, tags: &[Tag], entity: &mut Entity, _ctx: &mut Context) {
        entity.extends = tags.iter().find_map(|t| t.name.clone());
    }

    fn from_declaration(&self, raw: &str) -> Option<Tag> {
        let name = raw.trim();
        if name.is_empty() {
            return None;
        }
        let mut tag = Tag::new(TagKind::Extends);
        tag.name = Some(name.to_string());
        Some(tag)
    }
}

/// Whitespace/comma-separated identifier-chain lists: `@mixins`,
/// `@requires`, `@uses`, `@alternateClassNames`.
struct ListTag {
    kind: TagKind,
    keywords: &'static [&'static str],
}

impl ListTag {
    fn new(kind: TagKind, keywords: &'static [&'static str]) -> Self {
        ListTag { kind, keywords }
    }
}

impl TagStrategy for ListTag {
    fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    fn key(&self) -> TagKind {
        self.kind
    }

    fn parse(&self, cur: &mut Cursor, _ctx: &mut Context) -> Vec<Tag> {
        let mut tag = Tag::new(self.kind);
        loop {
            let save = cur.pos();
            cur.scan(&RE_LIST_SEP);
            match cur.ident_chain() {
                Some(name) => tag.members.push(name.to_string()),
                None => {
                    cur.set_pos(save);
                    break;
                }
            }
        }
        vec![tag]
    }

    fn enrich(&self, tags: &[Tag], entity: &mut Entity, _ctx: &mut Context) {
        let target = match self.kind {
            TagKind::Mixins => &mut entity.mixins,
            TagKind::Requires => &mut entity.requires,
            TagKind::Uses => &mut entity.uses,
            TagKind::AlternateClassNames => &mut entity.alternate_class_names,
            _ => return,
        };
        for tag in tags {
            target.extend(tag.members.iter().cloned());
        }
    }

    fn from_declaration(&self, raw: &str) -> Option<Tag> {
        // Second capability for the dual-source list tags only.
        if !matches!(self.kind, TagKind::Mixins | TagKind::Requires) {
            return None;
        }
        let mut tag = Tag::new(self.kind);
        tag.members = raw
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if tag.members.is_empty() {
            None
        } else {
            Some(tag)
        }
    }
}

/// `@alias namespace.name` — but a legacy spelling of inheritdoc
/// (`@alias Class#member`) is detected by look-ahead and reparsed as such.
struct AliasTag;

impl TagStrategy for AliasTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["alias"]
    }

    fn key(&self) -> TagKind {
        TagKind::Alias
    }

    fn parse(&self, cur: &mut Cursor, _ctx: &mut Context) -> Vec<Tag> {
        if cur.look(&RE_ALIAS_AS_INHERITDOC) {
            return vec![parse_inheritdoc_ref(cur)];
        }
        let mut tag = Tag::new(TagKind::Alias);
        cur.skip_horizontal_white();
        tag.name = cur.ident_chain().map(str::to_string);
        vec![tag]
    }

    fn enrich(&self, tags: &[Tag], entity: &mut Entity, _ctx: &mut Context) {
        entity
            .aliases
            .extend(tags.iter().filter_map(|t| t.name.clone()));
    }
}

/// `@xtype foo` and friends — shorthand for `@alias <namespace>.foo`.
struct AliasShorthandTag {
    keyword: &'static str,
    namespace: &'static str,
}

impl AliasShorthandTag {
    fn new(keyword: &'static str, namespace: &'static str) -> Self {
        AliasShorthandTag { keyword, namespace }
    }
}

impl TagStrategy for AliasShorthandTag {
    fn keywords(&self) -> &'static [&'static str] {
        match self.keyword {
            "xtype" => &["xtype"],
            "ptype" => &["ptype"],
            _ => &["ftype"],
        }
    }

    fn key(&self) -> TagKind {
        TagKind::Alias
    }

    fn parse(&self, cur: &mut Cursor, _ctx: &mut Context) -> Vec<Tag> {
        cur.skip_horizontal_white();
        match cur.ident_chain() {
            Some(chain) => {
                let mut tag = Tag::new(TagKind::Alias);
                tag.name = Some(format!("{}.{}", self.namespace, chain));
                vec![tag]
            }
            None => Vec::new(),
        }
    }

    fn enrich(&self, tags: &[Tag], entity: &mut Entity, _ctx: &mut Context) {
        entity
            .aliases
            .extend(tags.iter().filter_map(|t| t.name.clone()));
    }
}

/// `@override Class` — without a class the tag doesn't count and is dropped
/// without diagnostic.
struct OverrideTag;

impl TagStrategy for OverrideTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["override"]
    }

    fn key(&self) -> TagKind {
        TagKind::Override
    }

    fn parse(&self, cur: &mut Cursor, _ctx: &mut Context) -> Vec<Tag> {
        let save = cur.pos();
        cur.skip_horizontal_white();
        match cur.ident_chain() {
            Some(class) => {
                let mut tag = Tag::new(TagKind::Override);
                tag.class = Some(class.to_string());
                vec![tag]
            }
            None => {
                cur.set_pos(save);
                Vec::new()
            }
        }
    }

    fn enrich(&self, tags: &[Tag], entity: &mut Entity, _ctx: &mut Context) {
        entity.overrides = tags.iter().find_map(|t| t.class.clone());
    }
}

struct InheritdocTag;

impl TagStrategy for InheritdocTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["inheritdoc", "inheritDoc"]
    }

    fn key(&self) -> TagKind {
        TagKind::Inheritdoc
    }

    fn parse(&self, cur: &mut Cursor, _ctx: &mut Context) -> Vec<Tag> {
        vec![parse_inheritdoc_ref(cur)]
    }

    fn enrich(&self, tags: &[Tag], entity: &mut Entity, _ctx: &mut Context) {
        entity.inherit_doc = Some(
            tags.iter()
                .find_map(|t| t.name.clone())
                .unwrap_or_default(),
        );
    }
}

/// Shared `Class#member` reference parsing for @inheritdoc and the legacy
/// @alias spelling.
fn parse_inheritdoc_ref(cur: &mut Cursor) -> Tag {
    let mut tag = Tag::new(TagKind::Inheritdoc);
    let save = cur.pos();
    cur.skip_horizontal_white();
    match cur.scan(&RE_INHERIT_REF) {
        Some(reference) => tag.name = Some(reference.to_string()),
        None => cur.set_pos(save),
    }
    tag
}

// -- Cross-cutting --------------------------------------------------------

/// `@deprecated [version] explanation...` — the explanation is the tag's
/// accumulated prose.
struct DeprecatedTag;

impl TagStrategy for DeprecatedTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["deprecated"]
    }

    fn key(&self) -> TagKind {
        TagKind::Deprecated
    }

    fn parse(&self, cur: &mut Cursor, _ctx: &mut Context) -> Vec<Tag> {
        let mut tag = Tag::new(TagKind::Deprecated);
        cur.skip_horizontal_white();
        if let Some(version) = cur.scan(&RE_VERSION) {
            tag.version = Some(version.to_string());
        }
        vec![tag]
    }

    fn enrich(&self, tags: &[Tag], entity: &mut Entity, _ctx: &mut Context) {
        if let Some(tag) = tags.first() {
            entity.deprecated = Some(Deprecation {
                version: tag.version.clone(),
                text: tag.doc.clone(),
            });
        }
    }
}

/// `@since 4.1.0` — single-occurrence; duplicates keep the first and warn.
struct SinceTag;

impl TagStrategy for SinceTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["since"]
    }

    fn key(&self) -> TagKind {
        TagKind::Since
    }

    fn parse(&self, cur: &mut Cursor, _ctx: &mut Context) -> Vec<Tag> {
        let mut tag = Tag::new(TagKind::Since);
        cur.skip_horizontal_white();
        let line = cur.scan(&RE_REST_OF_LINE).unwrap_or("").trim();
        if !line.is_empty() {
            tag.version = Some(line.to_string());
        }
        vec![tag]
    }

    fn enrich(&self, tags: &[Tag], entity: &mut Entity, ctx: &mut Context) {
        if tags.len() > 1 {
            ctx.warn(WarnKind::Dup, "duplicate @since tag; first wins");
        }
        entity.since = tags.first().and_then(|t| t.version.clone());
    }
}

/// `@author Name <mail>` — rest of line, informational only.
struct AuthorTag;

impl TagStrategy for AuthorTag {
    fn keywords(&self) -> &'static [&'static str] {
        &["author"]
    }

    fn key(&self) -> TagKind {
        TagKind::Author
    }

    fn parse(&self, cur: &mut Cursor, _ctx: &mut Context) -> Vec<Tag> {
        let mut tag = Tag::new(TagKind::Author);
        cur.skip_horizontal_white();
        let line = cur.scan(&RE_REST_OF_LINE).unwrap_or("").trim();
        if !line.is_empty() {
            tag.name = Some(line.to_string());
        }
        vec![tag]
    }

    fn enrich(&self, tags: &[Tag], entity: &mut Entity, _ctx: &mut Context) {
        entity
            .authors
            .extend(tags.iter().filter_map(|t| t.name.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::registry::TagRegistry;
    use crate::warnings::{Location, Reporter};

    fn run(keyword: &str, input: &str) -> Vec<Tag> {
        let reg = TagRegistry::standard();
        let mut reporter = Reporter::new();
        let mut ctx = Context::new(&mut reporter, Location::default());
        let mut cur = Cursor::new(input);
        reg.by_keyword(keyword).unwrap().parse(&mut cur, &mut ctx)
    }

    #[test]
    fn cfg_required_marker() {
        let tags = run("cfg", " {String} title (required) A title");
        assert_eq!(tags[0].optional, Some(false));
        assert_eq!(tags[0].name.as_deref(), Some("title"));
    }

    #[test]
    fn cfg_required_case_insensitive() {
        let tags = run("cfg", " {String} title (REQUIRED)");
        assert_eq!(tags[0].optional, Some(false));
    }

    #[test]
    fn cfg_without_marker_stays_unset() {
        let tags = run("cfg", " {String} title docs");
        assert_eq!(tags[0].optional, None);
    }

    #[test]
    fn enum_is_single_class_tag() {
        let tags = run("enum", " {String} [align=left]");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind, TagKind::Class);
        assert!(tags[0].is_enum);
        assert_eq!(tags[0].type_.as_deref(), Some("String"));
        assert_eq!(tags[0].name.as_deref(), Some("align"));
        assert_eq!(tags[0].default.as_deref(), Some("left"));
    }

    #[test]
    fn override_without_class_discards() {
        assert!(run("override", "\nmore prose").is_empty());
    }

    #[test]
    fn override_with_class() {
        let tags = run("override", " Foo");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind, TagKind::Override);
        assert_eq!(tags[0].class.as_deref(), Some("Foo"));
    }

    #[test]
    fn type_bare_token() {
        let tags = run("type", " Boolean|String");
        assert_eq!(tags[0].kind, TagKind::Type);
        assert_eq!(tags[0].type_.as_deref(), Some("Boolean|String"));
    }

    #[test]
    fn type_curly_form() {
        let tags = run("type", " {Ext.Element}");
        assert_eq!(tags[0].type_.as_deref(), Some("Ext.Element"));
    }

    #[test]
    fn alias_plain() {
        let tags = run("alias", " widget.textfield");
        assert_eq!(tags[0].kind, TagKind::Alias);
        assert_eq!(tags[0].name.as_deref(), Some("widget.textfield"));
    }

    #[test]
    fn alias_legacy_inheritdoc_form() {
        let tags = run("alias", " Ext.Panel#method");
        assert_eq!(tags[0].kind, TagKind::Inheritdoc);
        assert_eq!(tags[0].name.as_deref(), Some("Ext.Panel#method"));
    }

    #[test]
    fn alias_legacy_hash_only_form() {
        let tags = run("alias", " #method");
        assert_eq!(tags[0].kind, TagKind::Inheritdoc);
        assert_eq!(tags[0].name.as_deref(), Some("#method"));
    }

    #[test]
    fn xtype_rewrites_to_alias() {
        let tags = run("xtype", " textfield");
        assert_eq!(tags[0].kind, TagKind::Alias);
        assert_eq!(tags[0].name.as_deref(), Some("widget.textfield"));
    }

    #[test]
    fn ptype_and_ftype_namespaces() {
        assert_eq!(run("ptype", " p")[0].name.as_deref(), Some("plugin.p"));
        assert_eq!(run("ftype", " f")[0].name.as_deref(), Some("feature.f"));
    }

    #[test]
    fn mixins_whitespace_separated() {
        let tags = run("mixins", " Ext.mixin.A Ext.mixin.B");
        assert_eq!(tags[0].members, vec!["Ext.mixin.A", "Ext.mixin.B"]);
    }

    #[test]
    fn mixins_comma_separated() {
        let tags = run("mixins", " A, B,C");
        assert_eq!(tags[0].members, vec!["A", "B", "C"]);
    }

    #[test]
    fn deprecated_version_token() {
        let tags = run("deprecated", " 4.0 Use something else.");
        assert_eq!(tags[0].version.as_deref(), Some("4.0"));
    }

    #[test]
    fn deprecated_without_version() {
        let tags = run("deprecated", " Use something else.");
        assert_eq!(tags[0].version, None);
    }

    #[test]
    fn since_takes_rest_of_line() {
        let tags = run("since", " 4.1.0\nNext line prose");
        assert_eq!(tags[0].version.as_deref(), Some("4.1.0"));
    }

    #[test]
    fn return_keeps_prose_out_of_name() {
        let tags = run("return", " {String} resulting value");
        assert_eq!(tags[0].type_.as_deref(), Some("String"));
        assert_eq!(tags[0].name, None);
    }

    #[test]
    fn return_dotted_subproperty_name() {
        let tags = run("return", " {String} return.name The name");
        assert_eq!(tags[0].name.as_deref(), Some("return.name"));
    }

    #[test]
    fn extends_from_declaration_matches_field() {
        let reg = TagRegistry::standard();
        let s = reg.by_keyword("extends").unwrap();
        let parsed = run("extends", " Ext.Base");
        let declared = s.from_declaration("Ext.Base").unwrap();
        assert_eq!(parsed[0].name, declared.name);
        assert_eq!(parsed[0].kind, declared.kind);
    }

    #[test]
    fn mixins_from_declaration() {
        let reg = TagRegistry::standard();
        let s = reg.by_keyword("mixins").unwrap();
        let tag = s.from_declaration("Ext.A, Ext.B").unwrap();
        assert_eq!(tag.members, vec!["Ext.A", "Ext.B"]);
    }

    #[test]
    fn uses_has_no_declaration_source() {
        let reg = TagRegistry::standard();
        assert!(reg.by_keyword("uses").unwrap().from_declaration("X").is_none());
    }
}
