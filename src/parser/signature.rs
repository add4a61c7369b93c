//! Declaration lines: cleanup and name derivation for headings.

use regex::Regex;
use std::sync::LazyLock;

static RE_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Za-z_$][\w$]*(?:\.[\w$]+)*(?:\s*\([^)]*\))?\s*").unwrap());

static RE_TRAILING_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(?://|/\*).*$").unwrap());

/// Keywords that introduce a type; the name follows them.
const TYPE_KEYWORDS: &[&str] = &["class", "interface", "enum", "record", "@interface"];

/// Strip leading annotations such as `@Override` or `@SuppressWarnings("x")`.
///
/// `@interface` is a declaration keyword, not an annotation, and is kept.
pub fn strip_annotations(mut line: &str) -> &str {
    loop {
        if line.starts_with("@interface") {
            return line;
        }
        match RE_ANNOTATION.find(line) {
            Some(m) if m.end() > 0 => line = &line[m.end()..],
            _ => return line,
        }
    }
}

/// Normalize a declaration line for display.
///
/// Cuts at the body brace (unless it belongs to an initializer) and at the
/// first `;`, drops trailing comments and commas, and collapses whitespace.
pub fn clean_declaration(line: &str) -> Option<String> {
    let mut decl = RE_TRAILING_COMMENT.replace(line, "").into_owned();

    if let Some(i) = decl.find('{') {
        if !decl[..i].contains('=') {
            decl.truncate(i);
        }
    }
    if let Some(i) = decl.find(';') {
        decl.truncate(i);
    }

    let decl = decl.trim().trim_end_matches(',');
    let decl = decl.split_whitespace().collect::<Vec<_>>().join(" ");
    if decl.is_empty() {
        None
    } else {
        Some(decl)
    }
}

/// Name declared by a signature: the type name after `class`/`interface`/...,
/// the method name before `(`, or the field name before `=`. In a list of
/// enum constants or fields, the first name.
pub fn declared_name(signature: &str) -> Option<String> {
    let sig = strip_annotations(signature.trim());

    let head = match (sig.find('('), sig.find('=')) {
        (Some(p), Some(e)) if e < p => &sig[..e],
        (Some(p), _) => &sig[..p],
        (None, Some(e)) => &sig[..e],
        (None, None) => sig,
    };
    let tokens: Vec<&str> = head.split_whitespace().collect();

    if let Some(i) = tokens.iter().position(|t| TYPE_KEYWORDS.contains(t)) {
        return tokens.get(i + 1).and_then(|t| identifier(t));
    }

    let head = match top_level_comma(head) {
        Some(i) => &head[..i],
        None => head,
    };
    head.split_whitespace().last().and_then(identifier)
}

/// First `,` outside `<...>` generics.
fn top_level_comma(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Leading identifier of a token, dropping generics and array brackets.
fn identifier(token: &str) -> Option<String> {
    let ident: String = token
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    if ident.is_empty() {
        None
    } else {
        Some(ident)
    }
}
