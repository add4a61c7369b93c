//! javadoc-md — generate Markdown documentation from Javadoc comments.
//!
//! The library exposes the whole pipeline: [`parser`] turns one source file
//! into [`model::DocEntry`] values, [`render`] turns those into Markdown, and
//! [`pipeline::Processor`] walks an input tree, writes one document per file
//! and assembles `index.md`.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod toc;

pub use config::{Config, TagSet};
pub use error::{Error, MalformedComment, MalformedKind};
pub use pipeline::{Processor, Summary};
