//! GitHub-flavored markdown renderer for documentation entries.

use super::tags::{format_group, TagStyle, TagTable};
use crate::config::Config;
use crate::model::DocEntry;
use crate::parser::signature::declared_name;
use crate::toc;

/// Heading used when an entry has no declaration and no file name is known.
pub const UNTITLED: &str = "Untitled";

/// Renders [`DocEntry`] values. Output depends only on the input entries and
/// the renderer settings.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownRenderer {
    tags: TagTable,
    table_of_contents: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            tags: TagTable::JAVADOC,
            table_of_contents: false,
        }
    }
}

impl From<&Config> for MarkdownRenderer {
    fn from(config: &Config) -> Self {
        Self {
            tags: config.tags.table(),
            table_of_contents: config.table_of_contents,
        }
    }
}

impl MarkdownRenderer {
    pub fn new(tags: TagTable, table_of_contents: bool) -> Self {
        Self {
            tags,
            table_of_contents,
        }
    }

    /// Render one entry as a level-3 section.
    ///
    /// `fallback` titles entries that have no declaration.
    pub fn render_entry(&self, entry: &DocEntry, fallback: &str) -> String {
        let mut blocks: Vec<String> = vec![format!("### {}", heading(entry, fallback))];

        if let Some(ref signature) = entry.signature {
            blocks.push(format!("`{}`", signature));
        }

        if !entry.description.is_empty() {
            blocks.push(entry.description.clone());
        }

        let tags = self.render_tags(entry);
        if !tags.is_empty() {
            blocks.push(tags);
        }

        blocks.join("\n\n")
    }

    /// Concatenate the fragments of one file with a blank line between them.
    pub fn render_fragments(&self, entries: &[DocEntry], fallback: &str) -> String {
        entries
            .iter()
            .map(|e| self.render_entry(e, fallback))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render the complete document for one source file.
    pub fn render_document(&self, title: &str, entries: &[DocEntry], fallback: &str) -> String {
        let mut out = format!("# {}\n\n", title);

        if self.table_of_contents && !entries.is_empty() {
            out.push_str("## Contents\n\n");
            let headings: Vec<String> = entries.iter().map(|e| heading(e, fallback)).collect();
            out.push_str(&toc::render_contents(headings.iter().map(String::as_str)));
            out.push_str("\n\n");
        }

        out.push_str("## Documentation\n\n");
        if entries.is_empty() {
            out.push_str("_No documentation comments found._\n");
        } else {
            out.push_str(&self.render_fragments(entries, fallback));
            out.push('\n');
        }
        out
    }

    /// Tag groups in order of first appearance, merged by display label.
    fn render_tags(&self, entry: &DocEntry) -> String {
        let mut groups: Vec<(String, TagStyle, Vec<&str>)> = Vec::new();

        for tag in &entry.tags {
            let resolved = self.tags.resolve(&tag.name);
            let values = tag.values.iter().map(String::as_str);
            match groups.iter_mut().find(|(label, _, _)| *label == resolved.label) {
                Some((_, _, existing)) => existing.extend(values),
                None => groups.push((resolved.label.into_owned(), resolved.style, values.collect())),
            }
        }

        groups
            .iter()
            .flat_map(|(label, style, values)| format_group(label, *style, values))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Heading text: declared name, else the whole declaration, else `fallback`.
pub fn heading(entry: &DocEntry, fallback: &str) -> String {
    match entry.signature {
        Some(ref signature) => declared_name(signature).unwrap_or_else(|| signature.clone()),
        None if fallback.is_empty() => UNTITLED.to_string(),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn entry(source: &str) -> DocEntry {
        parser::parse(source).entries.remove(0)
    }

    const ADD: &str = "/**\n * Adds two numbers.\n * @param a first operand\n * @param b second operand\n * @return the sum\n */\npublic int add(int a, int b)\n";

    #[test]
    fn renders_method_entry() {
        let md = MarkdownRenderer::default().render_entry(&entry(ADD), "Calc.java");
        assert_eq!(
            md,
            "### add\n\n\
             `public int add(int a, int b)`\n\n\
             Adds two numbers.\n\n\
             * **Parameters:**\n  * a — first operand\n  * b — second operand\n\
             * **Returns:** the sum"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = MarkdownRenderer::default();
        let e = entry(ADD);
        assert_eq!(renderer.render_entry(&e, "x"), renderer.render_entry(&e, "x"));
    }

    #[test]
    fn one_list_item_per_param_in_order() {
        let e = entry("/**\n * @param z last\n * @param y middle\n * @param x first\n */\nvoid f(int z, int y, int x);");
        let md = MarkdownRenderer::default().render_entry(&e, "");
        let items: Vec<&str> = md.lines().filter(|l| l.starts_with("  * ")).collect();
        assert_eq!(items, ["  * z — last", "  * y — middle", "  * x — first"]);
    }

    #[test]
    fn no_tags_no_tag_section() {
        let md = MarkdownRenderer::default().render_entry(&entry("/** Just text. */ int x;"), "");
        assert_eq!(md, "### x\n\n`int x`\n\nJust text.");
    }

    #[test]
    fn empty_description_has_no_empty_paragraph() {
        let md = MarkdownRenderer::default().render_entry(&entry("/** @return it */ int get();"), "");
        assert_eq!(md, "### get\n\n`int get()`\n\n* **Returns:** it");
    }

    #[test]
    fn missing_signature_uses_fallback() {
        let renderer = MarkdownRenderer::default();
        let e = entry("/** Header. */");
        assert!(renderer.render_entry(&e, "Foo.java").starts_with("### Foo.java\n\nHeader."));
        assert!(renderer.render_entry(&e, "").starts_with("### Untitled\n"));
    }

    #[test]
    fn unknown_tags_render_under_their_name() {
        let e = entry("/** @custom value */ int x;");
        let md = MarkdownRenderer::default().render_entry(&e, "");
        assert!(md.ends_with("* **@custom:** value"), "got: {md}");
    }

    #[test]
    fn standard_table_labels_only_core_tags() {
        let e = entry("/** @since 1.2 */ int x;");
        let md = MarkdownRenderer::new(TagTable::STANDARD, false).render_entry(&e, "");
        assert!(md.ends_with("* **@since:** 1.2"), "got: {md}");
    }

    #[test]
    fn throws_and_exception_merge() {
        let e = entry("/**\n * @throws IOException on read\n * @exception IllegalStateException when closed\n */\nvoid read();");
        let md = MarkdownRenderer::default().render_entry(&e, "");
        assert!(md.ends_with(
            "* **Throws:**\n  * IOException — on read\n  * IllegalStateException — when closed"
        ));
    }

    #[test]
    fn document_with_contents() {
        let parsed = parser::parse("/** A. */ class A {\n/** f. */ void f();\n/** f again. */ void f(int x);\n}");
        let renderer = MarkdownRenderer::new(TagTable::JAVADOC, true);
        let doc = renderer.render_document("A.java", &parsed.entries, "A.java");
        assert!(doc.starts_with(
            "# A.java\n\n## Contents\n\n* [A](#a)\n* [f](#f)\n* [f](#f-1)\n\n## Documentation\n\n### A\n"
        ));
        assert!(doc.ends_with("f again.\n"));
    }

    #[test]
    fn document_without_entries() {
        let doc = MarkdownRenderer::default().render_document("Empty.java", &[], "Empty.java");
        assert_eq!(
            doc,
            "# Empty.java\n\n## Documentation\n\n_No documentation comments found._\n"
        );
    }
}
