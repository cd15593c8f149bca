//! Tag strategy trait and the static registration table.
//!
//! The registry is built once at startup and shared read-only afterwards.
//! Dispatch is by keyword spelling; enrichment lookup is by semantic key.
//! Adding a strategy means adding one line to `TagRegistry::standard()` —
//! the driver never changes.

use crate::model::{Entity, Tag, TagKind};
use crate::parser::cursor::Cursor;
use crate::warnings::{Location, Reporter, WarnKind};
use std::collections::HashMap;

/// Per-comment parse/assembly context: the diagnostic sink plus the position
/// metadata it needs.
pub struct Context<'a> {
    reporter: &'a mut Reporter,
    location: Location,
}

impl<'a> Context<'a> {
    pub fn new(reporter: &'a mut Reporter, location: Location) -> Self {
        Context { reporter, location }
    }

    pub fn warn(&mut self, kind: WarnKind, message: impl Into<String>) {
        self.reporter.warn(kind, message, &self.location);
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

/// One parsing/enrichment strategy per tag kind.
///
/// `parse` consumes exactly the tag's own argument syntax from the shared
/// cursor and returns the record(s) it produced; the driver appends them.
/// Returning an empty vec discards the tag (e.g. `@override` without a
/// class). `enrich` merges derived fields into an assembled entity.
/// `from_declaration` is the second capability of dual-source tags: reading
/// the same field from a structurally-declared (non-comment) source.
pub trait TagStrategy {
    /// Keyword spellings answered by this strategy.
    fn keywords(&self) -> &'static [&'static str];

    /// Semantic key used for enrichment lookup.
    fn key(&self) -> TagKind;

    fn parse(&self, cur: &mut Cursor, ctx: &mut Context) -> Vec<Tag>;

    fn enrich(&self, _tags: &[Tag], _entity: &mut Entity, _ctx: &mut Context) {}

    fn from_declaration(&self, _raw: &str) -> Option<Tag> {
        None
    }
}

/// Keyword → strategy lookup table. Built once; read-only thereafter.
pub struct TagRegistry {
    strategies: Vec<Box<dyn TagStrategy + Send + Sync>>,
    by_keyword: HashMap<&'static str, usize>,
    by_key: HashMap<TagKind, usize>,
}

impl TagRegistry {
    pub fn new() -> Self {
        TagRegistry {
            strategies: Vec::new(),
            by_keyword: HashMap::new(),
            by_key: HashMap::new(),
        }
    }

    /// The full built-in strategy table.
    pub fn standard() -> Self {
        let mut reg = TagRegistry::new();
        for strategy in crate::parser::tags::builtin_strategies() {
            reg.register(strategy);
        }
        reg
    }

    /// Register a strategy. A duplicate keyword is a programming error, not
    /// user input, so it panics.
    pub fn register(&mut self, strategy: Box<dyn TagStrategy + Send + Sync>) {
        let idx = self.strategies.len();
        for kw in strategy.keywords() {
            let clash = self.by_keyword.insert(kw, idx);
            assert!(clash.is_none(), "duplicate tag keyword registered: @{kw}");
        }
        // First strategy registered for a key answers enrichment for it.
        self.by_key.entry(strategy.key()).or_insert(idx);
        self.strategies.push(strategy);
    }

    pub fn by_keyword(&self, keyword: &str) -> Option<&(dyn TagStrategy + Send + Sync)> {
        self.by_keyword
            .get(keyword)
            .map(|&i| self.strategies[i].as_ref())
    }

    pub fn by_key(&self, key: TagKind) -> Option<&(dyn TagStrategy + Send + Sync)> {
        self.by_key.get(&key).map(|&i| self.strategies[i].as_ref())
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        TagRegistry::standard()
    }
}
