//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::classify::{LeverageLadder, LeverageRule, LeverageTier};
use crate::domain::AlertFamily;
use crate::error::ConfigError;
use crate::formatters::{DnpFormatter, DominanceFormatter, FormatterSet, StsFormatter, TrsFormatter};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Suggested leverage settings
    pub leverage: LeverageConfig,
}

impl Config {
    /// Build the family formatters from this configuration
    pub fn formatters(&self) -> Result<FormatterSet, ConfigError> {
        self.leverage.to_formatters()
    }
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Reject alerts with defaulted fields
    pub strict: bool,
    /// Family used when none is given; detected from the payload if unset
    pub default_family: Option<AlertFamily>,
}

/// Leverage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeverageConfig {
    /// Constant suggestion (TRS)
    pub fixed: String,
    /// Suggestion for premium setups (STS)
    pub premium: String,
    /// Suggestion for every other setup (STS)
    pub reduced: String,
    /// Risk ladder tiers (DNP), ascending by `max_risk`
    pub ladder: Vec<LeverageTier>,
    /// Suggestion above the last tier
    pub ladder_fallback: String,
}

impl Default for LeverageConfig {
    fn default() -> Self {
        let ladder = LeverageLadder::default();
        Self {
            fixed: "3x".to_string(),
            premium: "3x".to_string(),
            reduced: "2x (REDUZIDA)".to_string(),
            ladder: ladder.tiers().to_vec(),
            ladder_fallback: ladder.fallback().to_string(),
        }
    }
}

impl LeverageConfig {
    /// Convert the ladder settings to a domain ladder
    pub fn to_ladder(&self) -> Result<LeverageLadder, ConfigError> {
        if let Some(tier) = self.ladder.iter().find(|t| t.label.is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: "leverage.ladder".to_string(),
                message: format!("tier at {}% has an empty label", tier.max_risk),
            });
        }

        LeverageLadder::new(self.ladder.clone(), self.ladder_fallback.clone()).map_err(|e| {
            ConfigError::InvalidValue {
                key: "leverage.ladder".to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Build the family formatters with these leverage rules
    pub fn to_formatters(&self) -> Result<FormatterSet, ConfigError> {
        for (key, value) in [
            ("leverage.fixed", &self.fixed),
            ("leverage.premium", &self.premium),
            ("leverage.reduced", &self.reduced),
            ("leverage.ladder_fallback", &self.ladder_fallback),
        ] {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "label must not be empty".to_string(),
                });
            }
        }

        Ok(FormatterSet {
            trs: TrsFormatter::new(LeverageRule::Fixed(self.fixed.clone())),
            dnp: DnpFormatter::new(LeverageRule::Ladder(self.to_ladder()?)),
            sts: StsFormatter::new(LeverageRule::ByQuality {
                premium: self.premium.clone(),
                reduced: self.reduced.clone(),
            }),
            dominance: DominanceFormatter,
        })
    }
}
