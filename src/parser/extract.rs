//! Documentation comment extractor.
//!
//! Finds `/** ... */` blocks, strips the delimiters and leading `*` markers,
//! and pairs each block with the first declaration line that follows it.

use super::signature::{clean_declaration, strip_annotations};
use crate::error::{MalformedComment, MalformedKind};
use crate::model::CommentBlock;

const OPEN: &str = "/**";
const CLOSE: &str = "*/";

/// Blocks and malformed comments found in one source text.
#[derive(Debug, Default)]
pub struct Extraction {
    pub blocks: Vec<CommentBlock>,
    pub malformed: Vec<MalformedComment>,
}

/// Scan `source` for documentation comments in source order.
///
/// A block in which another `/**` starts a line before the `*/` is reported as
/// [`MalformedKind::Nested`] and scanning resumes at the inner opener. A `/**`
/// in the middle of a comment line is plain text. A block that never closes is
/// reported as [`MalformedKind::Unterminated`].
pub fn extract(source: &str) -> Extraction {
    let mut out = Extraction::default();
    let mut pos = 0;

    while let Some(start) = find_open(source, pos) {
        let body_start = start + OPEN.len();
        let rest = &source[body_start..];
        let line = line_of(source, start);

        let close = rest.find(CLOSE);
        let reopen = find_reopen(rest);

        match (close, reopen) {
            (Some(c), Some(r)) if r < c => {
                out.malformed.push(MalformedComment {
                    line,
                    kind: MalformedKind::Nested,
                });
                pos = body_start + r;
            }
            (None, Some(r)) => {
                out.malformed.push(MalformedComment {
                    line,
                    kind: MalformedKind::Nested,
                });
                pos = body_start + r;
            }
            (Some(c), _) => {
                let end = body_start + c + CLOSE.len();
                out.blocks.push(CommentBlock {
                    text: strip_markers(rest[..c].trim_end_matches('*')),
                    offset: start,
                    line,
                    declaration: find_declaration(&source[end..]),
                });
                pos = end;
            }
            (None, None) => {
                out.malformed.push(MalformedComment {
                    line,
                    kind: MalformedKind::Unterminated,
                });
                break;
            }
        }
    }

    out
}

/// Next `/**` at or after `from`, skipping the empty comment `/**/` and
/// openers that sit behind a `//` line comment.
fn find_open(source: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(rel) = source[pos..].find(OPEN) {
        let start = pos + rel;
        let after = start + OPEN.len();
        let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);

        if source[after..].starts_with('/') || has_line_comment(&source[line_start..start]) {
            pos = after;
            continue;
        }
        return Some(start);
    }
    None
}

/// Offset in a comment body of a `/**` that opens its own line.
fn find_reopen(body: &str) -> Option<usize> {
    body.match_indices(OPEN).map(|(i, _)| i).find(|&i| {
        match body[..i].rfind('\n') {
            Some(nl) => body[nl + 1..i].trim().is_empty(),
            None => false,
        }
    })
}

/// Whether `code` contains a `//` outside string and char literals.
fn has_line_comment(code: &str) -> bool {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev = '\0';

    for c in code.chars() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
            }
            None => {
                if c == '/' && prev == '/' {
                    return true;
                }
                if c == '"' || c == '\'' {
                    quote = Some(c);
                }
            }
        }
        prev = if quote.is_some() { '\0' } else { c };
    }
    false
}

fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

/// Remove leading whitespace and `*` continuation markers from every line.
pub fn strip_markers(body: &str) -> String {
    body.lines()
        .map(|line| {
            let line = line.trim_start().trim_start_matches('*');
            line.strip_prefix(' ').unwrap_or(line).trim_end()
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// First declaration line in `after`, which starts right behind a `*/`.
///
/// Blank lines, line comments, ordinary block comments and annotation-only
/// lines are skipped. Reaching another documentation comment, a `package` or
/// `import` statement, or end of input yields `None`.
fn find_declaration(after: &str) -> Option<String> {
    let mut in_block = false;

    for raw in after.lines() {
        let mut line = raw.trim();

        if in_block {
            match line.find(CLOSE) {
                Some(i) => {
                    in_block = false;
                    line = line[i + CLOSE.len()..].trim();
                }
                None => continue,
            }
        }

        // Ordinary comments, possibly several on one line
        loop {
            if line.starts_with(OPEN) && !line.starts_with("/**/") {
                return None;
            }
            if line.starts_with("//") {
                line = "";
            } else if let Some(inner) = line.strip_prefix("/*") {
                match inner.find(CLOSE) {
                    Some(i) => {
                        line = inner[i + CLOSE.len()..].trim();
                        continue;
                    }
                    None => {
                        in_block = true;
                        line = "";
                    }
                }
            }
            break;
        }

        let line = strip_annotations(line);
        if line.is_empty() {
            continue;
        }
        if is_package_or_import(line) {
            return None;
        }
        if let Some(decl) = clean_declaration(line) {
            return Some(decl);
        }
    }

    None
}

fn is_package_or_import(line: &str) -> bool {
    let first = line.split_whitespace().next().unwrap_or("");
    first == "package" || first == "import"
}
