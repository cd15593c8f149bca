//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the SourceDoc model directly; sparse fields are omitted by the
//! model's serde attributes.

use crate::model::SourceDoc;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &SourceDoc) -> String {
        // The model contains only maps, vecs and strings; serialization
        // cannot fail.
        serde_json::to_string_pretty(doc).unwrap_or_else(|_| "{}".to_string())
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassDoc, Entity, TagKind};

    #[test]
    fn sparse_entity_fields_are_omitted() {
        let mut entity = Entity::new(TagKind::Class);
        entity.name = Some("Ext.Panel".to_string());
        let doc = SourceDoc {
            source_file: "panel.js".to_string(),
            classes: vec![ClassDoc {
                name: "Ext.Panel".to_string(),
                extends: None,
                entity,
                members: Vec::new(),
            }],
            orphans: Vec::new(),
        };
        let json = JsonRenderer.render(&doc);
        assert!(json.contains("\"Ext.Panel\""));
        assert!(json.contains("\"source_file\": \"panel.js\""));
        assert!(!json.contains("\"mixins\""));
        assert!(!json.contains("\"deprecated\""));
    }
}
