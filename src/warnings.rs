//! Diagnostic sink — every malformed-input point reports here.
//!
//! The core never aborts a batch: anomalies become `Warning` values and
//! parsing continues. Suppression policy is the caller's business; the CLI
//! just prints everything to stderr.

use std::fmt;

/// Warning categories, matching the conditions of the error-handling table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarnKind {
    /// Unbalanced brackets/quotes degraded to a single-token capture.
    TagSyntax,
    /// Unregistered @keyword re-absorbed as literal prose.
    Tag,
    /// Dotted subproperty with an unresolved prefix, or a dotted first item.
    Subproperty,
    /// A single-occurrence tag (e.g. @since) repeated; first wins.
    Dup,
}

impl fmt::Display for WarnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WarnKind::TagSyntax => "tag_syntax",
            WarnKind::Tag => "tag",
            WarnKind::Subproperty => "subproperty",
            WarnKind::Dup => "dup",
        };
        f.write_str(name)
    }
}

/// Position metadata threaded through for diagnostics only.
#[derive(Debug, Clone, Default)]
pub struct Location {
    pub filename: String,
    pub line: usize,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Location {
            filename: filename.into(),
            line,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarnKind,
    pub message: String,
    pub location: Location,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}:{})",
            self.kind, self.message, self.location.filename, self.location.line
        )
    }
}

/// Collects warnings for one run. Owned by the pipeline invocation, drained
/// by the caller.
#[derive(Debug, Default)]
pub struct Reporter {
    warnings: Vec<Warning>,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter::default()
    }

    pub fn warn(&mut self, kind: WarnKind, message: impl Into<String>, location: &Location) {
        self.warnings.push(Warning {
            kind,
            message: message.into(),
            location: location.clone(),
        });
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn take(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}
