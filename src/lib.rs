//! Table of contents trees for rendered documentation pages.
//!
//! [`toc::get_toc`] builds a [`toc::TableOfContents`] from heading tokens that
//! were already nested by a heading extractor. The [`markdown`] module is one
//! such extractor, built on comrak.

pub mod config;
pub mod markdown;
pub mod toc;
pub mod utils;

pub use config::{load_config, OutputFormat, TocConfig};
pub use toc::{get_toc, AnchorLink, HeadingToken, TableOfContents};
pub use utils::error::{BoxResult, TocError};
