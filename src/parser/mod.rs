//! Doc-comment parsing: purification, cursor scanning, the shared tag
//! micro-grammar, the strategy registry and the comment driver.

pub mod cursor;
pub mod delimited;
pub mod doc;
pub mod purify;
pub mod registry;
pub mod standard;
pub mod tags;

pub use doc::parse_comment;
pub use registry::{Context, TagRegistry, TagStrategy};
