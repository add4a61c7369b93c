//! Data model for parsed documentation comments — format-agnostic.

use std::path::PathBuf;

/// Raw documentation comment as found by the extractor.
///
/// Lives only for the duration of one file's extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    /// Comment body with the delimiters and leading `*` markers removed.
    pub text: String,
    /// Byte offset of the opening `/**`.
    pub offset: usize,
    /// 1-based line of the opening `/**`.
    pub line: usize,
    /// First declaration line following the comment, if any.
    pub declaration: Option<String>,
}

/// A single `@name value` group, values in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub values: Vec<String>,
}

/// Parsed documentation comment plus its declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocEntry {
    /// Paragraphs separated by a blank line; empty when the comment has none.
    pub description: String,
    /// Tags in order of first appearance. Unrecognized names are kept too.
    pub tags: Vec<Tag>,
    /// Declaration line with trailing `{`/`;` removed.
    pub signature: Option<String>,
}

impl DocEntry {
    /// Append a value under `name`, creating the group on first use.
    pub fn push_tag(&mut self, name: &str, value: String) {
        match self.tags.iter_mut().find(|t| t.name == name) {
            Some(tag) => tag.values.push(value),
            None => self.tags.push(Tag {
                name: name.to_string(),
                values: vec![value],
            }),
        }
    }

    /// Values recorded for `name`, empty if the tag never appeared.
    #[cfg(test)]
    pub(crate) fn tag_values(&self, name: &str) -> &[String] {
        self.tags
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.values.as_slice())
            .unwrap_or(&[])
    }

    /// First paragraph of the description, used for index summaries.
    pub fn summary(&self) -> Option<&str> {
        self.description
            .split("\n\n")
            .map(str::trim)
            .find(|p| !p.is_empty())
    }
}

/// One generated document, as listed in `index.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Source path relative to the input root.
    pub source: PathBuf,
    /// Output path relative to the output root.
    pub output: PathBuf,
    pub summary: Option<String>,
}
