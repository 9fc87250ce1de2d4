//! Reference heading extractor: turns Markdown into the nested heading
//! tokens consumed by [`crate::toc::get_toc`].

pub mod engine;
pub mod extract;
pub mod nesting;

use log::warn;

use crate::config::TocConfig;
use crate::toc::HeadingToken;

pub use extract::{extract_headings, ExtractedHeading};
pub use nesting::nest_headings;

/// Extract and nest the headings of a markdown document
pub fn get_markdown_toc(markdown: &str, config: &TocConfig) -> Vec<HeadingToken> {
    let headings = extract_headings(markdown, config);
    if headings.is_empty() {
        warn!("No headings found between levels {} and {}", config.min_level, config.max_level);
    }
    nest_headings(headings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::get_toc;

    fn toc_text(markdown: &str) -> (String, usize) {
        let toc = get_toc(&get_markdown_toc(markdown, &TocConfig::default()));
        (toc.to_string().trim().to_string(), toc.len())
    }

    #[test]
    fn test_indented_toc() {
        let (text, len) = toc_text("# Heading 1\n## Heading 2\n### Heading 3\n");
        assert_eq!(
            text,
            "Heading 1 - #heading-1\n    Heading 2 - #heading-2\n        Heading 3 - #heading-3"
        );
        assert_eq!(len, 1);
    }

    #[test]
    fn test_indented_toc_html() {
        let (text, len) = toc_text("# Heading 1\n## <code>Heading</code> 2\n## Heading 3\n");
        assert_eq!(
            text,
            "Heading 1 - #heading-1\n    Heading 2 - #heading-2\n    Heading 3 - #heading-3"
        );
        assert_eq!(len, 1);
    }

    #[test]
    fn test_flat_h2_toc() {
        let (text, len) = toc_text("## Heading 1\n## Heading 2\n## Heading 3\n");
        assert_eq!(
            text,
            "Heading 1 - #heading-1\nHeading 2 - #heading-2\nHeading 3 - #heading-3"
        );
        assert_eq!(len, 3);
    }

    #[test]
    fn test_mixed_html() {
        let markdown = "# Heading 1\n## Heading 2\n# Heading 3\n### Heading 4\n### <a>Heading 5</a>\n";
        let (text, len) = toc_text(markdown);
        let expected = "\
Heading 1 - #heading-1
    Heading 2 - #heading-2
Heading 3 - #heading-3
    Heading 4 - #heading-4
    Heading 5 - #heading-5";
        assert_eq!(text, expected);
        assert_eq!(len, 2);
    }

    #[test]
    fn test_level() {
        let markdown = "\
# Heading 1
## Heading 1.1
### Heading 1.1.1
### Heading 1.1.2
## Heading 1.2
";
        let toc = get_toc(&get_markdown_toc(markdown, &TocConfig::default()));

        fn level_sequence(items: &[crate::toc::AnchorLink], out: &mut Vec<u32>) {
            for item in items {
                out.push(item.level());
                level_sequence(item.children(), out);
            }
        }

        let mut levels = Vec::new();
        level_sequence(toc.items(), &mut levels);
        assert_eq!(levels, vec![1, 2, 3, 3, 2]);
    }

    #[test]
    fn test_unsluggable_headings_keep_an_anchor() {
        let toc = get_toc(&get_markdown_toc("# !!!\n\n## ???\n", &TocConfig::default()));
        assert_eq!(toc.to_string(), "!!! - #_1\n    ??? - #_2\n");
    }

    #[test]
    fn test_nested_anchor() {
        let markdown = "# Heading 1\n## Heading 2\n# Heading 3\n### Heading 4\n### <a href=\"/\">Heading 5</a>\n";
        let (text, len) = toc_text(markdown);
        let expected = "\
Heading 1 - #heading-1
    Heading 2 - #heading-2
Heading 3 - #heading-3
    Heading 4 - #heading-4
    Heading 5 - #heading-5";
        assert_eq!(text, expected);
        assert_eq!(len, 2);
    }

    #[test]
    fn test_entityref() {
        let (text, len) = toc_text("# Heading & 1\n## Heading > 2\n### Heading < 3\n");
        let expected = "\
Heading &amp; 1 - #heading-1
    Heading &gt; 2 - #heading-2
        Heading &lt; 3 - #heading-3";
        assert_eq!(text, expected);
        assert_eq!(len, 1);
    }

    #[test]
    fn test_charref_is_decoded() {
        let (text, len) = toc_text("# &#64;Header\n");
        assert_eq!(text, "@Header - #header");
        assert_eq!(len, 1);
    }

    #[test]
    fn test_front_matter_is_ignored() {
        let (text, _) = toc_text("---\ntitle: Page\n---\n\n# Real\n");
        assert_eq!(text, "Real - #real");
    }

    #[test]
    fn test_empty_document() {
        let (text, len) = toc_text("No headings here.\n");
        assert_eq!(text, "");
        assert_eq!(len, 0);
    }
}
