//! Pipeline configuration.

use crate::render::tags::TagTable;
use std::path::PathBuf;

/// Default output root.
pub const DEFAULT_OUTPUT_DIR: &str = "docs";

/// Default level-1 heading of `index.md`.
pub const DEFAULT_INDEX_TITLE: &str = "Documentation Index";

/// Which tag label table to render with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TagSet {
    /// `param`, `return`, `throws`, `see`, `author`, `version`
    Standard,
    /// The standard set plus the remaining block tags of the Javadoc tool
    #[default]
    Javadoc,
}

impl TagSet {
    pub fn table(self) -> TagTable {
        match self {
            TagSet::Standard => TagTable::STANDARD,
            TagSet::Javadoc => TagTable::JAVADOC,
        }
    }
}

/// Configuration for [`Processor`](crate::Processor).
#[derive(Debug, Clone)]
pub struct Config {
    /// Output root; documents mirror the input tree below it.
    pub output_dir: PathBuf,
    /// Extensions (without the dot) collected when the input is a directory.
    pub extensions: Vec<String>,
    pub tags: TagSet,
    pub index_title: String,
    /// Append each file's first description paragraph to its index line.
    pub index_summaries: bool,
    /// Emit a `## Contents` list at the top of every document.
    pub table_of_contents: bool,
    /// Abort on the first per-file error instead of skipping the file.
    pub fail_fast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extensions: vec!["java".to_string()],
            tags: TagSet::default(),
            index_title: DEFAULT_INDEX_TITLE.to_string(),
            index_summaries: true,
            table_of_contents: false,
            fail_fast: false,
        }
    }
}
