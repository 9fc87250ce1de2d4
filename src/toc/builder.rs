use log::debug;

use crate::toc::anchor::AnchorLink;
use crate::toc::contents::TableOfContents;
use crate::toc::token::{count_tokens, HeadingToken};

/// Build the table of contents for a page from its nested heading tokens.
///
/// The token forest is taken as-is: sibling order and nesting are kept,
/// titles, ids and levels are copied verbatim. The first top-level entry is
/// marked active and no other entry is.
pub fn get_toc(tokens: &[HeadingToken]) -> TableOfContents {
    let mut items: Vec<AnchorLink> = tokens.iter().map(parse_toc_token).collect();

    // For the table of contents, always mark the first element as active
    if let Some(first) = items.first_mut() {
        first.set_active(true);
    }

    debug!(
        "Built table of contents with {} top-level entries ({} total)",
        items.len(),
        count_tokens(tokens)
    );
    TableOfContents::new(items)
}

/// Convert a token and its descendants, children first.
fn parse_toc_token(token: &HeadingToken) -> AnchorLink {
    let children = token.children.iter().map(parse_toc_token).collect();
    AnchorLink::new(token.name.clone(), token.id.clone(), token.level, children)
}
