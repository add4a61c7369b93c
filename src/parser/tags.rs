//! Tag parser — splits a stripped comment into description and `@` tags.

use super::inline;
use crate::model::DocEntry;
use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([A-Za-z][\w-]*)(?:\s+(.*))?$").unwrap());

/// Parse the text of one comment block. The returned entry has no signature.
///
/// Lines before the first `@tag` line form the description; every tag value
/// absorbs the following lines until the next `@tag` line. Unknown tags are
/// kept like known ones.
pub fn parse_comment(text: &str) -> DocEntry {
    let mut entry = DocEntry::default();
    let mut description: Vec<&str> = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in text.lines() {
        let line = line.trim();

        if let Some(caps) = RE_TAG.captures(line) {
            if let Some((name, value)) = current.take() {
                entry.push_tag(&name, inline::to_markdown_line(&value));
            }
            let value = caps.get(2).map_or("", |m| m.as_str().trim());
            current = Some((caps[1].to_string(), value.to_string()));
            continue;
        }

        match current.as_mut() {
            Some((_, value)) => {
                if !line.is_empty() {
                    if !value.is_empty() {
                        value.push(' ');
                    }
                    value.push_str(line);
                }
            }
            None => description.push(line),
        }
    }

    if let Some((name, value)) = current {
        entry.push_tag(&name, inline::to_markdown_line(&value));
    }

    entry.description = inline::to_markdown(&join_paragraphs(&description));
    entry
}

/// Join lines with single spaces; blank lines separate paragraphs.
fn join_paragraphs(lines: &[&str]) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in lines {
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs.join("\n\n")
}
