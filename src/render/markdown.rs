//! GitHub-flavored markdown renderer.

use crate::model::{ClassDoc, Entity, SourceDoc, Tag, TagKind};
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &SourceDoc) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {}\n", doc.source_file));

        if !doc.orphans.is_empty() {
            lines.push("## Globals\n".to_string());
            for member in &doc.orphans {
                lines.push(render_member(member));
            }
        }

        for class in &doc.classes {
            lines.push(render_class(class));
        }

        lines.join("\n")
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn render_class(class: &ClassDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## {}\n", class.name));

    let badges = render_badges(&class.entity);
    if !badges.is_empty() {
        lines.push(badges);
        lines.push(String::new());
    }

    if let Some(ref parent) = class.extends {
        lines.push(format!("Extends: `{}`\n", parent));
    }
    if !class.entity.mixins.is_empty() {
        lines.push(format!("Mixins: {}\n", code_list(&class.entity.mixins)));
    }
    if !class.entity.aliases.is_empty() {
        lines.push(format!("Aliases: {}\n", code_list(&class.entity.aliases)));
    }
    if !class.entity.alternate_class_names.is_empty() {
        lines.push(format!(
            "Alternate names: {}\n",
            code_list(&class.entity.alternate_class_names)
        ));
    }

    if !class.entity.doc.is_empty() {
        lines.push(class.entity.doc.clone());
        lines.push(String::new());
    }

    for (kind, title) in SECTIONS {
        let members: Vec<&Entity> =
            class.members.iter().filter(|m| m.tagname == *kind).collect();
        if members.is_empty() {
            continue;
        }
        lines.push(format!("### {}\n", title));
        for member in members {
            lines.push(render_member(member));
        }
    }

    lines.join("\n")
}

const SECTIONS: &[(TagKind, &str)] = &[
    (TagKind::Cfg, "Configs"),
    (TagKind::Property, "Properties"),
    (TagKind::Method, "Methods"),
    (TagKind::Event, "Events"),
    (TagKind::CssVar, "CSS Variables"),
    (TagKind::CssMixin, "CSS Mixins"),
];

/// Render a single member's documentation block.
fn render_member(member: &Entity) -> String {
    let mut lines: Vec<String> = Vec::new();

    let name = member.name.as_deref().unwrap_or("(unnamed)");
    lines.push(format!("#### {}\n", name));

    let badges = render_badges(member);
    if !badges.is_empty() {
        lines.push(badges);
        lines.push(String::new());
    }

    if let Some(ref type_) = member.type_ {
        let mut line = format!("Type: `{}`", type_);
        if let Some(ref default) = member.default {
            line.push_str(&format!(" — defaults to `{}`", default));
        }
        lines.push(line);
        lines.push(String::new());
    }

    if !member.doc.is_empty() {
        lines.push(member.doc.clone());
        lines.push(String::new());
    }

    if !member.properties.is_empty() {
        lines.push("##### Properties\n".to_string());
        for prop in &member.properties {
            render_tag_item(&mut lines, prop, 0);
        }
        lines.push(String::new());
    }

    if !member.params.is_empty() {
        lines.push("##### Parameters\n".to_string());
        for param in &member.params {
            render_tag_item(&mut lines, param, 0);
        }
        lines.push(String::new());
    }

    if let Some(ref ret) = member.return_ {
        lines.push("##### Returns\n".to_string());
        render_tag_item(&mut lines, ret, 0);
        lines.push(String::new());
    }

    if !member.throws.is_empty() {
        lines.push("##### Throws\n".to_string());
        for throw in &member.throws {
            render_tag_item(&mut lines, throw, 0);
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `* **name** (`Type`): doc` with children indented two spaces per level.
fn render_tag_item(lines: &mut Vec<String>, tag: &Tag, depth: usize) {
    let indent = "  ".repeat(depth);
    let mut item = format!("{}* ", indent);
    if let Some(ref name) = tag.name {
        item.push_str(&format!("**{}**", name));
        if tag.optional == Some(true) {
            item.push_str(" (optional)");
        }
        if let Some(ref type_) = tag.type_ {
            item.push_str(&format!(" (`{}`)", type_));
        }
    } else if let Some(ref type_) = tag.type_ {
        item.push_str(&format!("`{}`", type_));
    }
    if let Some(ref default) = tag.default {
        item.push_str(&format!(" — defaults to `{}`", default));
    }
    if !tag.doc.is_empty() {
        item.push_str(": ");
        item.push_str(&tag.doc.replace('\n', &format!("\n{}  ", indent)));
    }
    lines.push(item);
    for child in &tag.properties {
        render_tag_item(lines, child, depth + 1);
    }
}

/// Badges: visibility and lifecycle markers.
fn render_badges(entity: &Entity) -> String {
    let mut badges: Vec<String> = Vec::new();

    if entity.is_singleton {
        badges.push("`singleton`".to_string());
    }
    if entity.is_enum {
        badges.push("`enum`".to_string());
    }
    if entity.is_static {
        badges.push("`static`".to_string());
    }
    if entity.is_abstract {
        badges.push("`abstract`".to_string());
    }
    if entity.is_chainable {
        badges.push("`chainable`".to_string());
    }
    if entity.is_readonly {
        badges.push("`readonly`".to_string());
    }
    if entity.is_private {
        badges.push("*`private`*".to_string());
    }
    if entity.is_protected {
        badges.push("*`protected`*".to_string());
    }
    if entity.required {
        badges.push("**`required`**".to_string());
    }
    if let Some(ref dep) = entity.deprecated {
        match dep.version {
            Some(ref v) => badges.push(format!("*`deprecated {}`*", v)),
            None => badges.push("*`deprecated`*".to_string()),
        }
    }
    if let Some(ref since) = entity.since {
        badges.push(format!("`since {}`", since));
    }

    if badges.is_empty() {
        return String::new();
    }

    format!("> {}", badges.join(" "))
}

fn code_list(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("`{}`", i))
        .collect::<Vec<_>>()
        .join(", ")
}
