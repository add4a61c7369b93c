//! Pipeline driver: walk the input, extract and render each file, write the
//! documents and `index.md`.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{DocEntry, IndexEntry};
use crate::parser;
use crate::render::index::{render_index, to_slash};
use crate::render::MarkdownRenderer;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the generated index inside the output root.
pub const INDEX_FILE: &str = "index.md";

/// Documents one input file or directory tree.
#[derive(Debug, Clone)]
pub struct Processor {
    input: PathBuf,
    config: Config,
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct Summary {
    pub output_dir: PathBuf,
    /// Generated documents, in the order they are listed in the index.
    pub processed: Vec<IndexEntry>,
    /// Files that produced no document, with the reason.
    pub skipped: Vec<Error>,
    /// Comments dropped from otherwise processed files.
    pub malformed: Vec<Error>,
}

/// Result of [`Processor::discover`].
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    /// Directory entries the search could not read.
    pub unreadable: Vec<Error>,
}

struct FileOutcome {
    entry: IndexEntry,
    malformed: Vec<Error>,
}

impl Processor {
    pub fn new(input: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            input: input.into(),
            config,
        }
    }

    /// Source files to document, sorted for deterministic output, plus the
    /// directory entries that could not be read while searching.
    ///
    /// A file input is returned as-is regardless of its extension; a
    /// directory is searched recursively for the configured extensions.
    pub fn discover(&self) -> Result<Discovery> {
        if !self.input.exists() {
            return Err(Error::InputNotFound(self.input.clone()));
        }
        if self.input.is_file() {
            return Ok(Discovery {
                files: vec![self.input.clone()],
                unreadable: Vec::new(),
            });
        }

        let root = glob::Pattern::escape(&self.input.to_string_lossy());
        let root = root.trim_end_matches('/');
        let mut discovery = Discovery::default();
        for ext in &self.config.extensions {
            let pattern = format!("{}/**/*.{}", root, ext.trim_start_matches('.'));
            debug!(%pattern, "searching for sources");
            for entry in glob::glob(&pattern)? {
                match entry {
                    Ok(path) if path.is_file() => discovery.files.push(path),
                    Ok(_) => {}
                    Err(err) => discovery.unreadable.push(Error::UnreadableFile {
                        path: err.path().to_path_buf(),
                        source: err.into_error(),
                    }),
                }
            }
        }
        discovery.files.sort();
        discovery.files.dedup();
        Ok(discovery)
    }

    /// Run the whole pipeline and write `index.md`.
    ///
    /// Fails outright when the input is missing or the output root cannot be
    /// written; per-file failures are collected in the [`Summary`] unless
    /// `fail_fast` is set.
    pub fn process(&self) -> Result<Summary> {
        let discovery = self.discover()?;
        info!(
            input = %self.input.display(),
            files = discovery.files.len(),
            "documenting sources"
        );

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| Error::WriteFailure {
            path: output_dir.clone(),
            source,
        })?;

        let renderer = MarkdownRenderer::from(&self.config);
        let mut summary = Summary {
            output_dir: output_dir.clone(),
            ..Default::default()
        };

        for err in discovery.unreadable {
            if self.config.fail_fast {
                return Err(err);
            }
            warn!("skipping: {}", err);
            summary.skipped.push(err);
        }

        let mut taken: HashSet<PathBuf> = HashSet::new();
        for path in &discovery.files {
            let relative = self.relative_path(path);
            let output = output_path(&relative, &taken);
            taken.insert(output.clone());

            match self.process_file(path, relative, output, &renderer) {
                Ok(outcome) => {
                    summary.processed.push(outcome.entry);
                    summary.malformed.extend(outcome.malformed);
                }
                Err(err) if self.config.fail_fast => return Err(err),
                Err(err) => {
                    warn!("skipping: {}", err);
                    summary.skipped.push(err);
                }
            }
        }

        let index_path = output_dir.join(INDEX_FILE);
        let index = render_index(
            &self.config.index_title,
            &summary.processed,
            self.config.index_summaries,
        );
        fs::write(&index_path, index).map_err(|source| Error::WriteFailure {
            path: index_path.clone(),
            source,
        })?;
        info!(index = %index_path.display(), "wrote index");

        Ok(summary)
    }

    fn process_file(
        &self,
        path: &Path,
        relative: PathBuf,
        output: PathBuf,
        renderer: &MarkdownRenderer,
    ) -> Result<FileOutcome> {
        let content = fs::read_to_string(path).map_err(|source| Error::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Err(Error::EmptyFile(path.to_path_buf()));
        }

        let parsed = parser::parse(&content);
        let malformed: Vec<Error> = parsed
            .malformed
            .into_iter()
            .map(|source| {
                warn!("skipping comment in {}: {}", path.display(), source);
                Error::MalformedComment {
                    path: path.to_path_buf(),
                    source,
                }
            })
            .collect();

        let fallback = relative
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let markdown = renderer.render_document(&to_slash(&relative), &parsed.entries, &fallback);

        let out_path = self.config.output_dir.join(&output);
        let write_failure = |source| Error::WriteFailure {
            path: out_path.clone(),
            source,
        };
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(write_failure)?;
        }
        fs::write(&out_path, markdown).map_err(write_failure)?;
        info!(
            entries = parsed.entries.len(),
            "generated {}",
            out_path.display()
        );

        let summary = parsed
            .entries
            .iter()
            .find_map(DocEntry::summary)
            .map(str::to_string);

        Ok(FileOutcome {
            entry: IndexEntry {
                source: relative,
                output,
                summary,
            },
            malformed,
        })
    }

    /// Path of `path` relative to the input root; the bare file name when the
    /// input is a single file.
    fn relative_path(&self, path: &Path) -> PathBuf {
        if self.input.is_file() {
            return path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| path.to_path_buf());
        }
        let path = without_cur_dir(path);
        path.strip_prefix(without_cur_dir(&self.input))
            .map(Path::to_path_buf)
            .unwrap_or(path)
    }
}

/// `A.java` → `A.md`, or `A.java.md` when `A.md` is already taken by a
/// source with the same stem.
fn output_path(relative: &Path, taken: &HashSet<PathBuf>) -> PathBuf {
    let output = relative.with_extension("md");
    if !taken.contains(&output) {
        return output;
    }
    let mut name = relative.as_os_str().to_os_string();
    name.push(".md");
    PathBuf::from(name)
}

/// Drop `.` components; glob does not report them in the paths it yields.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl Summary {
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Documentation generated in: {}", self.output_dir.display())?;
        writeln!(
            f,
            "Processed {} file(s), skipped {} file(s), skipped {} comment(s)",
            self.processed.len(),
            self.skipped.len(),
            self.malformed.len()
        )?;
        for err in &self.skipped {
            writeln!(f, "  skipped file: {}", err)?;
        }
        for err in &self.malformed {
            writeln!(f, "  skipped comment: {}", err)?;
        }
        Ok(())
    }
}
