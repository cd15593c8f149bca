//! The shared `@tag {Type} [name=default]` micro-grammar.
//!
//! Most documentable tags are some subset of this shape; each strategy
//! declares which clauses apply through a `TagSpec`.

use crate::model::{Tag, TagKind};
use crate::parser::cursor::Cursor;
use crate::parser::delimited::{until_close_curly, until_close_square, until_space};
use crate::parser::registry::Context;
use crate::warnings::WarnKind;

/// Which clauses of the standard pattern a tag kind uses.
#[derive(Debug, Clone, Copy)]
pub struct TagSpec {
    pub kind: TagKind,
    pub with_type: bool,
    pub with_name: bool,
    pub with_default: bool,
    pub allow_optional: bool,
}

impl TagSpec {
    pub fn full(kind: TagKind) -> Self {
        TagSpec {
            kind,
            with_type: true,
            with_name: true,
            with_default: true,
            allow_optional: true,
        }
    }

    pub fn type_only(kind: TagKind) -> Self {
        TagSpec {
            kind,
            with_type: true,
            with_name: false,
            with_default: false,
            allow_optional: false,
        }
    }

    pub fn name_only(kind: TagKind) -> Self {
        TagSpec {
            kind,
            with_type: false,
            with_name: true,
            with_default: false,
            allow_optional: false,
        }
    }
}

/// Parse the standard pattern at the cursor. Partial results are kept and
/// syntax problems are routed to the diagnostic sink; this never fails.
pub fn parse_standard(cur: &mut Cursor, spec: &TagSpec, ctx: &mut Context) -> Tag {
    let mut tag = Tag::new(spec.kind);

    if spec.with_type {
        parse_type_clause(cur, spec, &mut tag, ctx);
    }
    if spec.with_name {
        parse_name_clause(cur, spec, &mut tag, ctx);
    }

    tag
}

fn parse_type_clause(cur: &mut Cursor, spec: &TagSpec, tag: &mut Tag, ctx: &mut Context) {
    let save = cur.pos();
    cur.skip_horizontal_white();
    if !cur.eat_char('{') {
        cur.set_pos(save);
        return;
    }

    let cap = until_close_curly(cur);
    if cap.is_degraded() {
        ctx.warn(
            WarnKind::TagSyntax,
            format!("unbalanced type expression in @{}", spec.kind),
        );
    }
    let mut text = cap.into_text();
    if !cur.eat_char('}') {
        ctx.warn(
            WarnKind::TagSyntax,
            format!("missing closing }} in @{} type", spec.kind),
        );
    }
    if spec.allow_optional && text.ends_with('=') {
        text.pop();
        tag.optional = Some(true);
    }
    tag.type_ = Some(text.trim().to_string());
}

fn parse_name_clause(cur: &mut Cursor, spec: &TagSpec, tag: &mut Tag, ctx: &mut Context) {
    let save = cur.pos();
    cur.skip_horizontal_white();

    if spec.allow_optional && cur.eat_char('[') {
        // Bracketed form: [name=default], always optional.
        cur.skip_horizontal_white();
        tag.name = cur.ident_chain().map(str::to_string);
        cur.skip_horizontal_white();
        if cur.eat_char('=') {
            cur.skip_horizontal_white();
            let cap = until_close_square(cur);
            if cap.is_degraded() {
                ctx.warn(
                    WarnKind::TagSyntax,
                    format!("unbalanced default value in @{}", spec.kind),
                );
            }
            let text = cap.into_text().trim().to_string();
            if !text.is_empty() {
                tag.default = Some(text);
            }
        }
        if !cur.eat_char(']') {
            ctx.warn(
                WarnKind::TagSyntax,
                format!("missing closing ] in @{}", spec.kind),
            );
        }
        tag.optional = Some(true);
        return;
    }

    match cur.ident_chain() {
        Some(name) => {
            tag.name = Some(name.to_string());
            if spec.with_default && cur.eat_char('=') {
                tag.default = until_space(cur);
            }
        }
        None => cur.set_pos(save),
    }
}
