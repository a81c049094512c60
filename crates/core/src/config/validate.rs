use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Thread count, when set, is at least 1
/// - Timestamp step is at least 1 second
/// - Extension lists are not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.convert.threads == Some(0) {
        return Err(ConfigError::ValidationError(
            "convert.threads must be at least 1".to_string(),
        ));
    }

    if config.time.step_secs == 0 {
        return Err(ConfigError::ValidationError(
            "time.step_secs must be at least 1".to_string(),
        ));
    }

    if config.convert.extensions.is_empty() {
        return Err(ConfigError::ValidationError(
            "convert.extensions cannot be empty".to_string(),
        ));
    }

    if config.time.extensions.is_empty() {
        return Err(ConfigError::ValidationError(
            "time.extensions cannot be empty".to_string(),
        ));
    }

    if config.tools.timeout_secs == Some(0) {
        return Err(ConfigError::ValidationError(
            "tools.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}
