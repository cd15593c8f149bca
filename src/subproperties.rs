//! Nesting of dotted names into subproperty trees.
//!
//! `@param options.name` becomes a child of `@param options`, renamed to the
//! segment after its parent's name. Parent lookup uses the original full
//! names, so `a.b.c` finds `a.b` even when `a.b` has itself been nested (or
//! dropped — in which case its whole subtree disappears with it).

use crate::model::Tag;
use crate::parser::registry::Context;
use crate::warnings::WarnKind;
use std::collections::HashMap;

/// Nest one flat tag list (all of the same kind) into a tree.
pub fn nest(mut items: Vec<Tag>, ctx: &mut Context) -> Vec<Tag> {
    if items.is_empty() {
        return items;
    }

    // The first item can never be a subproperty. A dotted name there keeps
    // only the part after the dot, and the rest of the group is discarded.
    if let Some(name) = items[0].name.clone() {
        if let Some(dot) = name.find('.') {
            ctx.warn(
                WarnKind::Subproperty,
                format!(
                    "subproperty {} used before its parent; treating as {}",
                    name,
                    &name[dot + 1..]
                ),
            );
            items[0].name = Some(name[dot + 1..].to_string());
            items.truncate(1);
            return items;
        }
    }

    let names: Vec<Option<String>> = items.iter().map(|t| t.name.clone()).collect();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, name) in names.iter().enumerate() {
        if let Some(name) = name {
            index.entry(name).or_insert(i);
        }
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); items.len()];
    let mut renames: Vec<Option<String>> = vec![None; items.len()];
    let mut roots: Vec<usize> = Vec::new();

    for (i, name) in names.iter().enumerate() {
        let split = name.as_deref().and_then(split_last_segment);
        match split {
            Some((prefix, suffix)) => match index.get(prefix) {
                Some(&parent) if parent != i => {
                    children[parent].push(i);
                    renames[i] = Some(suffix.to_string());
                }
                _ => ctx.warn(
                    WarnKind::Subproperty,
                    format!(
                        "ignoring subproperty {}: no parent named {}",
                        name.as_deref().unwrap_or(""),
                        prefix
                    ),
                ),
            },
            None => roots.push(i),
        }
    }

    let mut slots: Vec<Option<Tag>> = items.into_iter().map(Some).collect();
    roots
        .into_iter()
        .map(|i| build(i, &mut slots, &children, &mut renames))
        .collect()
}

fn split_last_segment(name: &str) -> Option<(&str, &str)> {
    let dot = name.rfind('.')?;
    let (prefix, suffix) = (&name[..dot], &name[dot + 1..]);
    if prefix.is_empty() || suffix.is_empty() {
        None
    } else {
        Some((prefix, suffix))
    }
}

fn build(
    i: usize,
    slots: &mut Vec<Option<Tag>>,
    children: &[Vec<usize>],
    renames: &mut Vec<Option<String>>,
) -> Tag {
    let mut tag = slots[i].take().unwrap_or_default();
    if let Some(name) = renames[i].take() {
        tag.name = Some(name);
    }
    for &child in &children[i] {
        let nested = build(child, slots, children, renames);
        tag.properties.push(nested);
    }
    tag
}
