//! Assembly of a flat tag list into one documentation entity.
//!
//! The entity's own kind comes from the first member-defining tag; comments
//! with only member detail (@param, @return, @constructor) are methods.
//! Field merging is positional where order matters (docs, first root) and
//! strategy-driven for everything else: each distinct tag kind present gets
//! one `enrich` call, in first-appearance order.

use crate::model::{Entity, Tag, TagKind};
use crate::parser::registry::{Context, TagRegistry};
use crate::subproperties::nest;
use std::collections::HashMap;

/// Per-kind grouping of one comment's tags. Multiple same-kind tags are
/// legal; each bucket preserves comment order.
pub type TagMap = HashMap<TagKind, Vec<Tag>>;

/// Decide which entity kind a comment documents, if any.
pub fn primary_tagname(tags: &[Tag]) -> Option<TagKind> {
    if let Some(tag) = tags.iter().find(|t| t.kind.is_member()) {
        return Some(tag.kind);
    }
    let implies_method = tags.iter().any(|t| {
        matches!(
            t.kind,
            TagKind::Param | TagKind::Return | TagKind::Constructor
        )
    });
    implies_method.then_some(TagKind::Method)
}

/// Build the entity of the given kind from one comment's tags.
pub fn assemble(
    tagname: TagKind,
    tags: Vec<Tag>,
    registry: &TagRegistry,
    ctx: &mut Context,
) -> Entity {
    let mut entity = Entity::new(tagname);
    let (kind_order, buckets) = group_tags(tags);

    let mut doc_parts: Vec<String> = Vec::new();
    if let Some(docs) = buckets.get(&TagKind::Doc) {
        doc_parts.extend(docs.iter().filter(|t| !t.doc.is_empty()).map(|t| t.doc.clone()));
    }

    // The entity's own tag: first root after nesting. Further roots in the
    // same comment are ignored.
    if let Some(own) = buckets.get(&tagname) {
        let mut nested = nest(own.clone(), ctx);
        if !nested.is_empty() {
            let root = nested.remove(0);
            if matches!(tagname, TagKind::Cfg | TagKind::Property | TagKind::CssVar)
                && !root.doc.is_empty()
            {
                doc_parts.push(root.doc);
            }
            entity.name = root.name;
            entity.type_ = root.type_;
            entity.default = root.default;
            entity.required = root.optional == Some(false);
            entity.properties = root.properties;
            entity.is_enum = root.is_enum;
        }
    }

    // @type is the fallback type source for properties and configs.
    if entity.type_.is_none() {
        if let Some(types) = buckets.get(&TagKind::Type) {
            entity.type_ = types.iter().find_map(|t| t.type_.clone());
        }
    }

    if matches!(tagname, TagKind::Method | TagKind::Event | TagKind::CssMixin) {
        if let Some(params) = buckets.get(&TagKind::Param) {
            entity.params = nest(params.clone(), ctx);
        }
    }

    if tagname == TagKind::Method {
        entity.return_ = Some(return_value(buckets.get(&TagKind::Return), ctx));
        if let Some(throws) = buckets.get(&TagKind::Throws) {
            entity.throws = throws.clone();
        }
        if let Some(ctors) = buckets.get(&TagKind::Constructor) {
            if entity.name.is_none() {
                entity.name = Some("constructor".to_string());
            }
            doc_parts.extend(ctors.iter().filter(|t| !t.doc.is_empty()).map(|t| t.doc.clone()));
        }
    }

    entity.doc = doc_parts.join("\n\n");

    for kind in kind_order {
        if let (Some(strategy), Some(bucket)) = (registry.by_key(kind), buckets.get(&kind)) {
            strategy.enrich(bucket, &mut entity, ctx);
        }
    }

    entity
}

/// Group tags per kind, recording first-appearance kind order.
pub fn group_tags(tags: Vec<Tag>) -> (Vec<TagKind>, TagMap) {
    let mut order: Vec<TagKind> = Vec::new();
    let mut buckets: TagMap = TagMap::new();
    for tag in tags {
        if !buckets.contains_key(&tag.kind) {
            order.push(tag.kind);
        }
        buckets.entry(tag.kind).or_default().push(tag);
    }
    (order, buckets)
}

/// A method always has a return value: "undefined" when undocumented,
/// "Object" when documented without a type.
fn return_value(rets: Option<&Vec<Tag>>, ctx: &mut Context) -> Tag {
    let mut root = match rets {
        None => {
            let mut tag = Tag::new(TagKind::Return);
            tag.type_ = Some("undefined".to_string());
            tag
        }
        Some(rets) => {
            let mut nested = nest(rets.clone(), ctx);
            if nested.is_empty() {
                Tag::new(TagKind::Return)
            } else {
                nested.remove(0)
            }
        }
    };
    if root.type_.is_none() {
        root.type_ = Some("Object".to_string());
    }
    if root.name.is_none() {
        root.name = Some("return".to_string());
    }
    root
}
