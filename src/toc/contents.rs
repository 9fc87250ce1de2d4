use std::fmt;
use std::slice;

use serde::Serialize;

use crate::config::TocConfig;
use crate::toc::anchor::AnchorLink;
use crate::utils::error::TocError;

/// Represents the table of contents for a given page.
///
/// Only top-level entries are held here; deeper headings live in each
/// entry's children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableOfContents {
    items: Vec<AnchorLink>,
}

impl TableOfContents {
    pub(crate) fn new(items: Vec<AnchorLink>) -> Self {
        Self { items }
    }

    /// Top-level entries in document order
    pub fn items(&self) -> &[AnchorLink] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, AnchorLink> {
        self.items.iter()
    }

    /// Number of top-level entries, nested headings not counted
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Generate a navigation list for the table of contents
    pub fn to_html(&self, config: &TocConfig) -> String {
        if self.items.is_empty() {
            return String::new();
        }

        let mut html = format!("<ul class=\"{}\">\n", config.list_class);
        for item in &self.items {
            item.write_html(&mut html, config);
        }
        html.push_str("</ul>");
        html
    }

    /// Pretty-printed JSON for the whole tree
    pub fn to_json(&self) -> Result<String, TocError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TocError::Generic(format!("Failed to serialize table of contents: {}", e)))
    }
}

impl<'a> IntoIterator for &'a TableOfContents {
    type Item = &'a AnchorLink;
    type IntoIter = slice::Iter<'a, AnchorLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for TableOfContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            f.write_str(&item.render_indented(0))?;
        }
        Ok(())
    }
}
