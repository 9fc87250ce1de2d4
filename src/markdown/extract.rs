use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena};
use log::debug;

use crate::config::TocConfig;
use crate::markdown::engine::create_comrak_options;

/// A heading found in the document, before nesting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedHeading {
    pub level: u32,
    pub id: String,
    /// Plain heading text, HTML-escaped
    pub name: String,
}

/// Extract headings from markdown content, in document order.
///
/// Headings outside the configured level window are left out.
pub fn extract_headings(markdown: &str, config: &TocConfig) -> Vec<ExtractedHeading> {
    let arena = Arena::new();
    let options = create_comrak_options();
    let root = parse_document(&arena, markdown, &options);

    let mut headings = Vec::new();
    let mut unnamed = 0;

    for node in root.descendants() {
        let level = match node.data.borrow().value {
            NodeValue::Heading(ref heading) => u32::from(heading.level),
            _ => continue,
        };

        let text = collect_text(node);

        if !config.includes_level(level) {
            debug!(
                "Skipping h{} heading '{}' outside levels {}..={}",
                level, text, config.min_level, config.max_level
            );
            continue;
        }

        let mut id = slug::slugify(&text);
        if id.is_empty() {
            // Nothing sluggable: number it `_1`, `_2`, ... so the anchor is never bare
            unnamed += 1;
            id = format!("_{}", unnamed);
        }

        headings.push(ExtractedHeading {
            level,
            id,
            name: html_escape::encode_text(&text).into_owned(),
        });
    }

    headings
}

/// Plain text of a heading; inline markup and raw HTML tags are dropped
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();

    for descendant in node.descendants() {
        match descendant.data.borrow().value {
            NodeValue::Text(ref literal) => text.push_str(literal),
            NodeValue::Code(ref code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }

    text.trim().to_string()
}
