use crate::config::types::OutputFormat;

/// Default shallowest heading level included by the extractor
pub fn default_min_level() -> u32 {
    1
}

/// Default deepest heading level included by the extractor
pub fn default_max_level() -> u32 {
    6
}

/// Default CSS class for the TOC list
pub fn default_list_class() -> String {
    "toc".to_string()
}

/// Default CSS class for the active entry
pub fn default_active_class() -> String {
    "active".to_string()
}

/// Default output format
pub fn default_format() -> OutputFormat {
    OutputFormat::Text
}
