use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// How a table of contents is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented `title - #id` lines
    Text,
    /// The tree as pretty-printed JSON
    Json,
    /// A nested `<ul>` navigation list
    Html,
}

/// Table of contents configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Minimum heading level picked up from markdown (h1 = 1, h2 = 2, etc.)
    #[serde(default = "defaults::default_min_level")]
    pub min_level: u32,

    /// Maximum heading level picked up from markdown
    #[serde(default = "defaults::default_max_level")]
    pub max_level: u32,

    /// CSS class for the TOC list
    #[serde(default = "defaults::default_list_class")]
    pub list_class: String,

    /// CSS class put on the active entry
    #[serde(default = "defaults::default_active_class")]
    pub active_class: String,

    /// Output format used by the command line
    #[serde(default = "defaults::default_format")]
    pub format: OutputFormat,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_level: defaults::default_min_level(),
            max_level: defaults::default_max_level(),
            list_class: defaults::default_list_class(),
            active_class: defaults::default_active_class(),
            format: defaults::default_format(),
        }
    }
}

impl TocConfig {
    /// Whether a heading level falls inside the configured window
    pub fn includes_level(&self, level: u32) -> bool {
        level >= self.min_level && level <= self.max_level
    }
}
