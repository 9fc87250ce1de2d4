use crate::config::types::TocConfig;
use crate::utils::error::TocError;

/// Validate the configuration
pub fn validate_config(config: &TocConfig) -> Result<(), TocError> {
    validate_levels(config)?;
    validate_classes(config)?;
    Ok(())
}

/// Heading levels must form a window inside 1..=6
fn validate_levels(config: &TocConfig) -> Result<(), TocError> {
    if config.min_level < 1 || config.max_level > 6 {
        return Err(TocError::Config(format!(
            "Heading levels must be between 1 and 6, got {}..{}",
            config.min_level, config.max_level
        )));
    }

    if config.min_level > config.max_level {
        return Err(TocError::Config(format!(
            "min_level ({}) is greater than max_level ({})",
            config.min_level, config.max_level
        )));
    }

    Ok(())
}

fn validate_classes(config: &TocConfig) -> Result<(), TocError> {
    if config.list_class.trim().is_empty() {
        return Err(TocError::Config("list_class must not be empty".to_string()));
    }

    if config.active_class.trim().is_empty() {
        return Err(TocError::Config("active_class must not be empty".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TocConfig::default()).is_ok());
    }

    #[test]
    fn test_level_bounds() {
        let zero = TocConfig { min_level: 0, ..TocConfig::default() };
        assert!(validate_config(&zero).is_err());

        let seven = TocConfig { max_level: 7, ..TocConfig::default() };
        assert!(validate_config(&seven).is_err());

        let inverted = TocConfig { min_level: 3, max_level: 2, ..TocConfig::default() };
        let err = validate_config(&inverted).unwrap_err();
        assert!(err.to_string().contains("greater than max_level"));
    }

    #[test]
    fn test_blank_classes() {
        let config = TocConfig { list_class: "  ".to_string(), ..TocConfig::default() };
        assert!(validate_config(&config).is_err());
    }
}
