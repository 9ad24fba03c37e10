//! UI configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pagination::DEFAULT_WINDOW_SIZE;

/// Page size used by the user directory
pub const DEFAULT_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default = "default_window_size")]
    pub window_size: usize,
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::ZeroPerPage);
        }
        if self.window_size == 0 {
            return Err(ConfigError::ZeroWindowSize);
        }
        Ok(())
    }
}

/// Top-level configuration for the account UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl UiConfig {
    /// Parse and validate a JSON document. Missing keys take their defaults.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: UiConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pagination.validate()
    }

    /// Like [`UiConfig::from_json`], but falls back to defaults on any error
    pub fn from_json_or_default(input: &str) -> Self {
        match Self::from_json(input) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!(error = %err, "using default UI configuration");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.pagination.per_page, 10);
        assert_eq!(config.pagination.window_size, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = UiConfig::from_json(r#"{"pagination": {"per_page": 25}}"#).unwrap();
        assert_eq!(config.pagination.per_page, 25);
        assert_eq!(config.pagination.window_size, 5);

        let config = UiConfig::from_json("{}").unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_zero_values_rejected() {
        let err = UiConfig::from_json(r#"{"pagination": {"per_page": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPerPage));

        let err = UiConfig::from_json(r#"{"pagination": {"window_size": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroWindowSize));
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert!(matches!(UiConfig::from_json("not json"), Err(ConfigError::Json(_))));
        assert_eq!(UiConfig::from_json_or_default("not json"), UiConfig::default());
    }
}
