//! Extraction of `/** ... */` blocks from raw source text.
//!
//! Line numbers are recorded at the opening delimiter so every warning a
//! comment later produces can point back into the original file.

use regex::Regex;
use std::sync::LazyLock;

static RE_DOC_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*(.*?)\*/").unwrap());

/// One doc comment's body (delimiters stripped, decoration intact) and the
/// 1-based line of its opening `/**`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedComment {
    pub text: String,
    pub line: usize,
}

/// All doc comments in source order. Regular `/* ... */` and `//` comments
/// are not doc comments and are skipped.
pub fn extract_doc_comments(source: &str) -> Vec<ExtractedComment> {
    RE_DOC_COMMENT
        .captures_iter(source)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            ExtractedComment {
                text: caps[1].to_string(),
                line: source[..whole.start()].matches('\n').count() + 1,
            }
        })
        .collect()
}
