use std::path::{Path, PathBuf};
use log::debug;

use crate::config::defaults;
use crate::config::types::TocConfig;
use crate::config::validation;
use crate::utils::error::TocError;
use crate::utils::fs;

/// Configuration file names to look for, in order of preference
const CONFIG_FILES: [&str; 4] = ["_toc.yml", "_toc.yaml", "_toc.toml", "_toc.json"];

/// Load TOC configuration from config files
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>
) -> Result<TocConfig, TocError> {
    // Start with default configuration
    let mut config = TocConfig::default();

    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_file(&source_dir).into_iter().collect(),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file present in a directory
fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| fs::is_file(path))
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut TocConfig, config_path: &Path) -> Result<(), TocError> {
    if !fs::is_file(config_path) {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )));
    }

    let content = fs::read_file(config_path)
        .map_err(|e| TocError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    // Parse based on file extension
    let file_config = match fs::extension_of(config_path).as_deref() {
        Some("yml") | Some("yaml") | None => parse_yaml_config(&content, config_path)?,
        Some("toml") => parse_toml_config(&content, config_path)?,
        Some("json") => parse_json_config(&content, config_path)?,
        Some(other) => {
            return Err(TocError::Config(format!(
                "Unsupported configuration file format: {}", other
            )));
        }
    };

    merge_configs(config, &file_config);

    Ok(())
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> Result<TocConfig, TocError> {
    // An empty YAML document means "all defaults"
    if content.trim().is_empty() {
        return Ok(TocConfig::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )))
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> Result<TocConfig, TocError> {
    toml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )))
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> Result<TocConfig, TocError> {
    serde_json::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )))
}

/// Merge two configurations, keeping only non-default values from the source
fn merge_configs(target: &mut TocConfig, source: &TocConfig) {
    if source.min_level != defaults::default_min_level() {
        target.min_level = source.min_level;
    }

    if source.max_level != defaults::default_max_level() {
        target.max_level = source.max_level;
    }

    if source.list_class != defaults::default_list_class() {
        target.list_class = source.list_class.clone();
    }

    if source.active_class != defaults::default_active_class() {
        target.active_class = source.active_class.clone();
    }

    if source.format != defaults::default_format() {
        target.format = source.format;
    }
}
