use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::config::TocConfig;

/// One level of indentation in the text rendering
const INDENT: &str = "    ";

/// A single entry in the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorLink {
    title: String,
    id: String,
    level: u32,
    children: Vec<AnchorLink>,
    active: bool,
}

impl AnchorLink {
    /// Create an inactive entry from its already built children
    pub fn new(
        title: impl Into<String>,
        id: impl Into<String>,
        level: u32,
        children: Vec<AnchorLink>,
    ) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            level,
            children,
            active: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn children(&self) -> &[AnchorLink] {
        &self.children
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// In-page link target for this entry
    pub fn url(&self) -> String {
        format!("#{}", self.id)
    }

    /// Render this entry and its subtree, one `title - url` line per entry,
    /// indented by tree depth starting at `depth`.
    pub fn render_indented(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write_indented(&mut out, depth);
        out
    }

    fn write_indented(&self, out: &mut String, depth: usize) {
        out.push_str(&INDENT.repeat(depth));
        out.push_str(&self.title);
        out.push_str(" - ");
        out.push_str(&self.url());
        out.push('\n');

        for child in &self.children {
            child.write_indented(out, depth + 1);
        }
    }

    /// Append this entry as an HTML list item
    pub(crate) fn write_html(&self, html: &mut String, config: &TocConfig) {
        if self.active {
            html.push_str(&format!("<li class=\"{}\">", config.active_class));
        } else {
            html.push_str("<li>");
        }
        html.push_str(&format!("<a href=\"{}\">{}</a>", self.url(), self.title));

        if !self.children.is_empty() {
            html.push_str("\n<ul>\n");
            for child in &self.children {
                child.write_html(html, config);
            }
            html.push_str("</ul>\n");
        }

        html.push_str("</li>\n");
    }
}

impl fmt::Display for AnchorLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_indented(0))
    }
}

impl Serialize for AnchorLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnchorLink", 6)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("level", &self.level)?;
        state.serialize_field("url", &self.url())?;
        state.serialize_field("active", &self.active)?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(title: &str, id: &str, level: u32) -> AnchorLink {
        AnchorLink::new(title, id, level, Vec::new())
    }

    #[test]
    fn test_url_is_derived_from_id() {
        let link = leaf("Heading 1", "heading-1", 1);
        assert_eq!(link.url(), "#heading-1");
        assert!(!link.is_active());
    }

    #[test]
    fn test_url_is_not_encoded() {
        let link = leaf("Ünïcode", "ünï code", 2);
        assert_eq!(link.url(), "#ünï code");
    }

    #[test]
    fn test_single_line_rendering() {
        let link = leaf("Heading &amp; 1", "heading-1", 1);
        assert_eq!(link.to_string(), "Heading &amp; 1 - #heading-1\n");
        assert_eq!(link.render_indented(2), "        Heading &amp; 1 - #heading-1\n");
    }

    #[test]
    fn test_indentation_follows_tree_depth() {
        // An h3 sitting directly under an h1 is still one level deeper
        let link = AnchorLink::new("Top", "top", 1, vec![leaf("Deep", "deep", 3)]);
        assert_eq!(link.to_string(), "Top - #top\n    Deep - #deep\n");
    }

    #[test]
    fn test_children_render_in_order() {
        let link = AnchorLink::new(
            "Guide",
            "guide",
            1,
            vec![
                AnchorLink::new("Install", "install", 2, vec![leaf("Linux", "linux", 3)]),
                leaf("Usage", "usage", 2),
            ],
        );
        let expected = "\
Guide - #guide
    Install - #install
        Linux - #linux
    Usage - #usage
";
        assert_eq!(link.render_indented(0), expected);
    }

    #[test]
    fn test_html_item() {
        let mut link = AnchorLink::new("Top", "top", 1, vec![leaf("Sub", "sub", 2)]);
        link.set_active(true);

        let mut html = String::new();
        link.write_html(&mut html, &TocConfig::default());
        assert_eq!(
            html,
            "<li class=\"active\"><a href=\"#top\">Top</a>\n<ul>\n<li><a href=\"#sub\">Sub</a></li>\n</ul>\n</li>\n"
        );
    }

    #[test]
    fn test_serialize_includes_url() {
        let value = serde_json::to_value(leaf("A", "a", 1)).unwrap();
        assert_eq!(value["url"], "#a");
        assert_eq!(value["active"], false);
        assert!(value["children"].as_array().unwrap().is_empty());
    }
}
