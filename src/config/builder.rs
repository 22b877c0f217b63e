//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::domain::AlertFamily;
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must exist. Without one the default locations are
    /// searched and defaults are kept if none exists.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default()?,
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI strict flag
    pub fn with_strict(mut self, strict: Option<bool>) -> Self {
        if let Some(s) = strict {
            self.config.general.strict = s;
        }
        self
    }

    /// Override the alert family
    ///
    /// `Some(None)` forces auto-detection over a configured default.
    pub fn with_family(mut self, family: Option<Option<AlertFamily>>) -> Self {
        if let Some(f) = family {
            self.config.general.default_family = f;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert!(!config.general.verbose);
        assert!(!config.general.strict);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_verbose(Some(true))
            .with_strict(Some(true))
            .with_family(Some(Some(AlertFamily::Sts)))
            .build();

        assert!(config.general.verbose);
        assert!(config.general.strict);
        assert_eq!(config.general.default_family, Some(AlertFamily::Sts));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\nstrict = true\ndefault_family = \"dnp\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ConfigBuilder::new()
            .with_file(Some(&path))
            .unwrap()
            .with_strict(None)
            .with_family(Some(None))
            .build();

        assert!(config.general.strict);
        assert_eq!(config.general.default_family, None);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = ConfigBuilder::new().with_file(Some("/nonexistent/alertfmt.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
