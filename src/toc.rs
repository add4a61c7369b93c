//! GitHub-flavored markdown anchor/slug generation and the per-file
//! contents list.

use std::collections::HashMap;

/// GitHub heading anchor slug.
///
/// - lowercase
/// - keep alphanumerics, spaces, hyphens and underscores
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

/// Hands out unique anchors the way GitHub does for repeated headings:
/// `add`, `add-1`, `add-2`, ...
#[derive(Debug, Default)]
pub struct Anchors {
    seen: HashMap<String, usize>,
}

impl Anchors {
    pub fn next(&mut self, heading: &str) -> String {
        let slug = github_slug(heading);
        let count = self.seen.entry(slug.clone()).or_insert(0);
        let anchor = if *count == 0 {
            slug
        } else {
            format!("{}-{}", slug, count)
        };
        *count += 1;
        anchor
    }
}

/// Render a contents list linking to each heading, in order.
pub fn render_contents<'a>(headings: impl IntoIterator<Item = &'a str>) -> String {
    let mut anchors = Anchors::default();
    headings
        .into_iter()
        .map(|h| format!("* [{}](#{})", h, anchors.next(h)))
        .collect::<Vec<_>>()
        .join("\n")
}
