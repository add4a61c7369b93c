//! Parser module — comment extraction and tag parsing.

pub mod extract;
pub mod inline;
pub mod signature;
pub mod tags;

use crate::error::MalformedComment;
use crate::model::DocEntry;
use tracing::debug;

/// Result of parsing one source file.
#[derive(Debug, Default)]
pub struct ParsedFile {
    /// Entries in source order.
    pub entries: Vec<DocEntry>,
    /// Comments that were skipped; the rest of the file is still parsed.
    pub malformed: Vec<MalformedComment>,
}

/// Parse every documentation comment in `source` into a [`DocEntry`].
pub fn parse(source: &str) -> ParsedFile {
    let extraction = extract::extract(source);

    let entries = extraction
        .blocks
        .into_iter()
        .map(|block| {
            debug!(
                line = block.line,
                declaration = block.declaration.as_deref().unwrap_or("<none>"),
                "parsed documentation comment"
            );
            let mut entry = tags::parse_comment(&block.text);
            entry.signature = block.declaration;
            entry
        })
        .collect();

    ParsedFile {
        entries,
        malformed: extraction.malformed,
    }
}
