//! tagdoc — structured API documentation from @tag-annotated doc comments.
//!
//! The pipeline: raw `/** ... */` text → purify → cursor-driven @tag scan
//! (per-tag strategies from a static registry) → flat tag list → tag map →
//! entity assembly (with dotted subproperty nesting) → rendering.

pub mod assemble;
pub mod extract;
pub mod hierarchy;
pub mod model;
pub mod parser;
pub mod render;
pub mod subproperties;
pub mod warnings;
