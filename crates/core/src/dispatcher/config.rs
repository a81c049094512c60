//! Configuration for the dispatcher module.

use serde::{Deserialize, Serialize};

use super::error::DispatchError;
use crate::config::ConvertConfig;

/// Configuration for a conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Maximum parallel conversions. Unset means one per available CPU.
    #[serde(default)]
    pub concurrency: Option<usize>,

    /// Whether to keep source files after a verified conversion.
    #[serde(default)]
    pub preserve_originals: bool,
}

impl DispatchConfig {
    /// Sets the maximum parallel conversions.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Keeps source files after conversion.
    pub fn with_preserve_originals(mut self, preserve: bool) -> Self {
        self.preserve_originals = preserve;
        self
    }

    /// The effective worker count.
    pub fn resolve_concurrency(&self) -> Result<usize, DispatchError> {
        match self.concurrency {
            Some(0) => Err(DispatchError::InvalidConcurrency(0)),
            Some(n) => Ok(n),
            None => Ok(std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)),
        }
    }
}

impl From<&ConvertConfig> for DispatchConfig {
    fn from(config: &ConvertConfig) -> Self {
        Self {
            concurrency: config.threads,
            preserve_originals: config.preserve_originals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_concurrency_is_cpu_count() {
        let concurrency = DispatchConfig::default().resolve_concurrency().unwrap();
        assert!(concurrency >= 1);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let err = DispatchConfig::default()
            .with_concurrency(0)
            .resolve_concurrency()
            .unwrap_err();
        assert!(matches!(err, DispatchError::InvalidConcurrency(0)));
    }

    #[test]
    fn test_from_convert_config() {
        let convert = ConvertConfig {
            threads: Some(3),
            preserve_originals: true,
            ..Default::default()
        };
        let config = DispatchConfig::from(&convert);
        assert_eq!(config.resolve_concurrency().unwrap(), 3);
        assert!(config.preserve_originals);
    }
}
