//! javadoc-md — generate Markdown documentation from Javadoc comments.
//!
//! - **directory/file mode**: `javadoc-md src/ -o docs` writes one document per
//!   source file plus `docs/index.md`
//! - **stdin mode**: `javadoc-md - < Foo.java` prints the entries to stdout

mod logger;

use anyhow::{bail, Context, Result};
use clap::Parser;
use javadoc_md::config::{Config, TagSet, DEFAULT_INDEX_TITLE, DEFAULT_OUTPUT_DIR};
use javadoc_md::render::markdown::UNTITLED;
use javadoc_md::render::MarkdownRenderer;
use javadoc_md::{parser, Processor};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "javadoc-md",
    about = "Generate Markdown documentation from Javadoc comments"
)]
struct Cli {
    /// Source file or directory. Use `-` to read a single file from stdin.
    input: String,

    /// Output directory
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// File extension to collect from directories (repeatable)
    #[arg(short = 'e', long = "ext", default_value = "java")]
    extensions: Vec<String>,

    /// Tag label table
    #[arg(long, value_enum, default_value_t = TagSet::Javadoc)]
    tags: TagSet,

    /// Add a table of contents to every generated document
    #[arg(long)]
    toc: bool,

    /// Omit description summaries from index.md
    #[arg(long)]
    no_summary: bool,

    /// Title of index.md
    #[arg(long, default_value = DEFAULT_INDEX_TITLE)]
    index_title: String,

    /// Stop at the first file that cannot be read or written
    #[arg(long)]
    fail_fast: bool,

    /// Debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            output_dir: self.output.clone(),
            extensions: self.extensions.clone(),
            tags: self.tags,
            index_title: self.index_title.clone(),
            index_summaries: !self.no_summary,
            table_of_contents: self.toc,
            fail_fast: self.fail_fast,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    if cli.input == "-" {
        return stdin_mode(&cli.config());
    }

    let processor = Processor::new(&cli.input, cli.config());
    let summary = processor
        .process()
        .with_context(|| format!("failed to document {}", cli.input))?;
    print!("{}", summary);

    if summary.processed.is_empty() {
        bail!("no files were processed");
    }
    Ok(())
}

/// stdin mode: read one source from stdin, write its entries to stdout.
fn stdin_mode(config: &Config) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let parsed = parser::parse(&input);
    for malformed in &parsed.malformed {
        warn!("skipping comment: {}", malformed);
    }

    let renderer = MarkdownRenderer::from(config);
    let output = renderer.render_fragments(&parsed.entries, UNTITLED);
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
