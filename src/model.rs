//! Data model for parsed documentation — format-agnostic.

use serde::Serialize;
use std::fmt;

/// Every tag kind the registry knows, plus the implicit `doc` tag that
/// collects leading prose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    #[default]
    Doc,
    // Entity-defining members
    Class,
    Method,
    Event,
    Cfg,
    Property,
    CssVar,
    CssMixin,
    // Member detail
    Param,
    Return,
    Type,
    Throws,
    Constructor,
    // Class metadata
    Extends,
    Mixins,
    Requires,
    Uses,
    AlternateClassNames,
    Alias,
    Override,
    Inheritdoc,
    // Cross-cutting
    Deprecated,
    Since,
    Author,
    Static,
    Private,
    Protected,
    Readonly,
    Abstract,
    Hide,
    Chainable,
    Singleton,
}

impl TagKind {
    /// True for tag kinds that define a documentable entity.
    pub fn is_member(self) -> bool {
        matches!(
            self,
            TagKind::Class
                | TagKind::Method
                | TagKind::Event
                | TagKind::Cfg
                | TagKind::Property
                | TagKind::CssVar
                | TagKind::CssMixin
        )
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TagKind::Doc => "doc",
            TagKind::Class => "class",
            TagKind::Method => "method",
            TagKind::Event => "event",
            TagKind::Cfg => "cfg",
            TagKind::Property => "property",
            TagKind::CssVar => "css_var",
            TagKind::CssMixin => "css_mixin",
            TagKind::Param => "param",
            TagKind::Return => "return",
            TagKind::Type => "type",
            TagKind::Throws => "throws",
            TagKind::Constructor => "constructor",
            TagKind::Extends => "extends",
            TagKind::Mixins => "mixins",
            TagKind::Requires => "requires",
            TagKind::Uses => "uses",
            TagKind::AlternateClassNames => "alternate_class_names",
            TagKind::Alias => "alias",
            TagKind::Override => "override",
            TagKind::Inheritdoc => "inheritdoc",
            TagKind::Deprecated => "deprecated",
            TagKind::Since => "since",
            TagKind::Author => "author",
            TagKind::Static => "static",
            TagKind::Private => "private",
            TagKind::Protected => "protected",
            TagKind::Readonly => "readonly",
            TagKind::Abstract => "abstract",
            TagKind::Hide => "hide",
            TagKind::Chainable => "chainable",
            TagKind::Singleton => "singleton",
        };
        f.write_str(name)
    }
}

/// One parsed `@name ...` annotation. Fields a tag kind does not use stay
/// `None`/empty. `doc` accumulates trailing prose during the parse and is
/// whitespace-stripped at end of parse.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Tag {
    pub kind: TagKind,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub doc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// None = unspecified; Some(false) = explicitly required (cfg).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    /// @deprecated version token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// @override target class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Set by the @enum composite on the class tag it produces.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_enum: bool,
    /// List-tag payload (@mixins, @requires, ...).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
    /// Nested subproperties, filled by the nester.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Tag>,
}

impl Tag {
    pub fn new(kind: TagKind) -> Self {
        Tag {
            kind,
            ..Tag::default()
        }
    }
}

/// @deprecated payload on an assembled entity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Deprecation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub text: String,
}

/// Canonical assembled documentation record for one class or member.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Entity {
    pub tagname: TagKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub doc: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// cfg only, from an explicit "(required)" marker.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Tag>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Tag>,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_: Option<Tag>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub throws: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uses: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_class_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherit_doc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_enum: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_static: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_private: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_protected: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_readonly: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_abstract: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_chainable: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_singleton: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl Entity {
    pub fn new(tagname: TagKind) -> Self {
        Entity {
            tagname,
            ..Entity::default()
        }
    }
}

/// One documented class with its member entities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassDoc {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    pub entity: Entity,
    pub members: Vec<Entity>,
}

/// All documentation extracted from one source file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceDoc {
    pub source_file: String,
    pub classes: Vec<ClassDoc>,
    /// Members documented before any class in the file.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orphans: Vec<Entity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagname_display() {
        assert_eq!(TagKind::Cfg.to_string(), "cfg");
        assert_eq!(TagKind::CssVar.to_string(), "css_var");
        assert_eq!(TagKind::AlternateClassNames.to_string(), "alternate_class_names");
    }

    #[test]
    fn member_kinds() {
        assert!(TagKind::Class.is_member());
        assert!(TagKind::CssMixin.is_member());
        assert!(!TagKind::Param.is_member());
        assert!(!TagKind::Doc.is_member());
    }

    #[test]
    fn tag_serializes_sparse() {
        let tag = Tag::new(TagKind::Param);
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, r#"{"kind":"param"}"#);
    }
}
