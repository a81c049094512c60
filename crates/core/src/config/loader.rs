use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment overrides, e.g. `FXPHOTO_CONVERT__THREADS=4`.
pub const ENV_PREFIX: &str = "FXPHOTO_";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }
    load_layered_config(Some(path))
}

/// Load defaults, then the optional TOML file, then environment overrides.
pub fn load_layered_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::TargetFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[convert]
threads = 3
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.convert.threads, Some(3));
    }

    #[test]
    fn test_load_config_from_str_bad_type() {
        let toml = r#"
[time]
step_secs = "one"
"#;
        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/fx-photo.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_layered_config_without_file() {
        let config = load_layered_config(None).unwrap();
        assert_eq!(config.convert.target_format, TargetFormat::Heic);
        assert_eq!(config.time.step_secs, 1);
    }

    #[test]
    fn test_load_config_from_file_keeps_unset_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[time]
step_secs = 10
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.time.step_secs, 10);
        assert_eq!(config.time.extensions.len(), 5);
        assert_eq!(config.convert.extensions, vec!["jpg", "jpeg", "png"]);
    }
}
