//! Class hierarchy lookup: which class a member is seen through vs. the
//! class that actually defines it.

use crate::model::ClassDoc;
use std::collections::{HashMap, HashSet};

/// Name-indexed view over a set of documented classes.
pub struct Hierarchy<'a> {
    by_name: HashMap<&'a str, &'a ClassDoc>,
}

impl<'a> Hierarchy<'a> {
    /// Index classes by name. On a duplicate name the first wins.
    pub fn new(classes: &'a [ClassDoc]) -> Self {
        let mut by_name = HashMap::new();
        for class in classes {
            by_name.entry(class.name.as_str()).or_insert(class);
        }
        Hierarchy { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a ClassDoc> {
        self.by_name.get(name).copied()
    }

    /// The inheritance chain from the named class up to its root.
    /// An unknown parent ends the chain; a cycle stops at the repeat.
    pub fn chain(&self, name: &str) -> Vec<&'a ClassDoc> {
        let mut chain = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = self.get(name);
        while let Some(class) = current {
            if !seen.insert(class.name.as_str()) {
                break;
            }
            chain.push(class);
            current = class.extends.as_deref().and_then(|p| self.get(p));
        }
        chain
    }

    /// All member names visible on the class, mapped to the class that owns
    /// the effective definition. A redefinition in a subclass takes
    /// ownership from the ancestor.
    pub fn members(&self, name: &str) -> HashMap<String, String> {
        let mut owners = HashMap::new();
        for class in self.chain(name).into_iter().rev() {
            for member in &class.members {
                if let Some(member_name) = &member.name {
                    owners.insert(member_name.clone(), class.name.clone());
                }
            }
        }
        owners
    }

    /// The owning class of one member as seen from `class`.
    pub fn owner_of(&self, class: &str, member: &str) -> Option<String> {
        self.members(class).remove(member)
    }
}

/// Member-name → owning-class map for one class, across its whole chain.
pub fn resolve_ownership(classes: &[ClassDoc], class: &str) -> HashMap<String, String> {
    Hierarchy::new(classes).members(class)
}
