//! Inline Javadoc and HTML markup to Markdown.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{@code\s+([^}]*)\}").unwrap());

static RE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{@literal\s+([^}]*)\}").unwrap());

static RE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{@link(?:plain)?\s+([^\s}(]+(?:\([^)]*\))?)(?:\s+([^}]*))?\}").unwrap()
});

static RE_HTML_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<\s*code\s*>(.*?)<\s*/\s*code\s*>").unwrap());

static RE_HTML_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:b|strong)>(.*?)</(?:b|strong)>").unwrap());

static RE_HTML_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:i|em)>(.*?)</(?:i|em)>").unwrap());

static RE_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<\s*/?\s*p\s*/?\s*>").unwrap());

/// Convert markup and normalize paragraphs.
///
/// `<p>` and blank-line breaks become `\n\n`; whitespace inside a paragraph
/// collapses to single spaces.
pub fn to_markdown(text: &str) -> String {
    let text = convert(text);
    let text = RE_PARAGRAPH.replace_all(&text, "\n\n");
    paragraphs(&text).collect::<Vec<_>>().join("\n\n")
}

/// Like [`to_markdown`], but keeps everything on one line (tag values).
pub fn to_markdown_line(text: &str) -> String {
    let text = convert(text);
    let text = RE_PARAGRAPH.replace_all(&text, " ");
    paragraphs(&text).collect::<Vec<_>>().join(" ")
}

fn convert(text: &str) -> String {
    let text = RE_CODE.replace_all(text, "`$1`");
    let text = RE_LITERAL.replace_all(&text, "$1");
    let text = RE_LINK.replace_all(&text, |caps: &Captures| match caps.get(2) {
        Some(label) if !label.as_str().trim().is_empty() => label.as_str().trim().to_string(),
        _ => format!("`{}`", &caps[1]),
    });
    let text = RE_HTML_CODE.replace_all(&text, "`$1`");
    let text = RE_HTML_BOLD.replace_all(&text, "**$1**");
    let text = RE_HTML_ITALIC.replace_all(&text, "*$1*");
    text.into_owned()
}

fn paragraphs(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split("\n\n")
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|p| !p.is_empty())
}
