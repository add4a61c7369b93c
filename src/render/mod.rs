//! Markdown rendering of parsed entries, documents and the index.

pub mod index;
pub mod markdown;
pub mod tags;

pub use markdown::MarkdownRenderer;
