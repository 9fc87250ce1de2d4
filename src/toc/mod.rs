//! Per-page table of contents.
//!
//! Heading tokens arrive already nested; [`get_toc`] turns them into an
//! [`AnchorLink`] tree owned by a [`TableOfContents`].

mod anchor;
mod builder;
mod contents;
mod token;

pub use anchor::AnchorLink;
pub use builder::get_toc;
pub use contents::TableOfContents;
pub use token::{
    count_tokens, load_tokens, parse_tokens_json, parse_tokens_yaml, validate_tokens,
    HeadingToken,
};
