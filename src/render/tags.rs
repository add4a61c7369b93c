//! Tag lookup table: tag name → display label and formatter.

use std::borrow::Cow;

/// How the values of a tag group are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// One value on the label line; several values as a sub-list.
    Text,
    /// Always a sub-list.
    List,
    /// Sub-list of `name — description`, split at the first whitespace.
    Named,
    /// Bare label when no value is given, otherwise like `Text`.
    Flag,
    /// Like `Text`, each value in a code span.
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRule {
    pub name: &'static str,
    pub label: &'static str,
    pub style: TagStyle,
}

const fn rule(name: &'static str, label: &'static str, style: TagStyle) -> TagRule {
    TagRule { name, label, style }
}

const STANDARD_RULES: &[TagRule] = &[
    rule("param", "Parameters", TagStyle::Named),
    rule("return", "Returns", TagStyle::Text),
    rule("throws", "Throws", TagStyle::Named),
    rule("see", "See also", TagStyle::List),
    rule("author", "Author", TagStyle::Text),
    rule("version", "Version", TagStyle::Text),
];

const JAVADOC_RULES: &[TagRule] = &[
    rule("param", "Parameters", TagStyle::Named),
    rule("return", "Returns", TagStyle::Text),
    rule("returns", "Returns", TagStyle::Text),
    rule("throws", "Throws", TagStyle::Named),
    rule("exception", "Throws", TagStyle::Named),
    rule("see", "See also", TagStyle::List),
    rule("author", "Author", TagStyle::Text),
    rule("version", "Version", TagStyle::Text),
    rule("since", "Since", TagStyle::Text),
    rule("deprecated", "Deprecated", TagStyle::Flag),
    rule("serial", "Serial", TagStyle::Text),
    rule("serialData", "Serial data", TagStyle::Text),
    rule("serialField", "Serial fields", TagStyle::Named),
    rule("apiNote", "API note", TagStyle::Text),
    rule("implSpec", "Implementation requirements", TagStyle::Text),
    rule("implNote", "Implementation note", TagStyle::Text),
    rule("hidden", "Hidden", TagStyle::Flag),
    rule("todo", "To-do", TagStyle::List),
    rule("this", "This", TagStyle::Code),
    rule("copyright", "Copyright", TagStyle::Text),
    rule("license", "License", TagStyle::Text),
    rule("constructor", "Constructor", TagStyle::Flag),
    rule("private", "Private", TagStyle::Flag),
    rule("static", "Static", TagStyle::Flag),
    rule("abstract", "Abstract", TagStyle::Flag),
];

/// Fixed lookup table with a default branch for unrecognized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagTable {
    rules: &'static [TagRule],
}

/// Label and style a tag name renders with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub label: Cow<'a, str>,
    pub style: TagStyle,
}

impl TagTable {
    pub const STANDARD: TagTable = TagTable {
        rules: STANDARD_RULES,
    };
    pub const JAVADOC: TagTable = TagTable {
        rules: JAVADOC_RULES,
    };

    pub fn lookup(&self, name: &str) -> Option<&'static TagRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Resolve a tag name. Unknown names keep their `@name` as the label.
    pub fn resolve<'a>(&self, name: &'a str) -> Resolved<'a> {
        match self.lookup(name) {
            Some(rule) => Resolved {
                label: Cow::Borrowed(rule.label),
                style: rule.style,
            },
            None => Resolved {
                label: Cow::Owned(format!("@{name}")),
                style: TagStyle::Text,
            },
        }
    }
}

/// Render one labeled group as Markdown list lines.
pub fn format_group(label: &str, style: TagStyle, values: &[&str]) -> Vec<String> {
    let values: Vec<&str> = match style {
        TagStyle::Flag => values.iter().copied().filter(|v| !v.is_empty()).collect(),
        _ => values.to_vec(),
    };

    if values.is_empty() || (values.len() == 1 && values[0].is_empty()) {
        return vec![format!("* **{label}**")];
    }

    let item = |v: &str| match style {
        TagStyle::Named => named(v),
        TagStyle::Code => format!("`{v}`"),
        _ => v.to_string(),
    };

    let as_list = matches!(style, TagStyle::List | TagStyle::Named) || values.len() > 1;
    if !as_list {
        return vec![format!("* **{label}:** {}", item(values[0]))];
    }

    let mut lines = vec![format!("* **{label}:**")];
    lines.extend(values.iter().map(|v| format!("  * {}", item(v))));
    lines
}

/// `a first operand` → `a — first operand`
fn named(value: &str) -> String {
    match value.split_once(char::is_whitespace) {
        Some((name, desc)) if !desc.trim().is_empty() => format!("{name} — {}", desc.trim()),
        _ => value.trim().to_string(),
    }
}
