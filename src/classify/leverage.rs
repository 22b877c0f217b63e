//! Risk and leverage derivation
//!
//! Suggested leverage comes from one of three rules: a risk-percentage
//! ladder, a binary rule on setup quality, or a constant.

use crate::domain::value::format_fixed;
use crate::domain::SetupQuality;
use crate::error::DomainError;
use crate::render::NOT_AVAILABLE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk of a trade as a percentage of the entry price
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiskPercent {
    /// Unrounded; two decimals are applied when displayed
    Value(f64),
    /// An operand was missing or the entry price was zero
    Unavailable,
}

impl RiskPercent {
    /// Derive risk as `|reference - stop| / entry * 100`
    ///
    /// Never divides by zero: a zero, missing or non-finite operand yields
    /// `Unavailable`.
    pub fn derive(reference: Option<f64>, stop: Option<f64>, entry: Option<f64>) -> Self {
        let (Some(reference), Some(stop), Some(entry)) = (reference, stop, entry) else {
            return Self::Unavailable;
        };
        if entry == 0.0 {
            return Self::Unavailable;
        }

        let percent = (reference - stop).abs() / entry * 100.0;
        if !percent.is_finite() {
            return Self::Unavailable;
        }
        Self::Value(percent)
    }
}

impl fmt::Display for RiskPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.write_str(&format_fixed(*v, 2)),
            Self::Unavailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// One rung of the leverage ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeverageTier {
    /// Highest risk percentage (inclusive) for this tier
    pub max_risk: f64,
    /// Suggested leverage label
    pub label: String,
}

impl LeverageTier {
    pub fn new(max_risk: f64, label: impl Into<String>) -> Self {
        Self {
            max_risk,
            label: label.into(),
        }
    }
}

/// Risk-percentage ladder
///
/// Tiers are ordered by ascending `max_risk`; risk above the last tier gets
/// the fallback label.
#[derive(Debug, Clone, PartialEq)]
pub struct LeverageLadder {
    tiers: Vec<LeverageTier>,
    fallback: String,
}

impl LeverageLadder {
    /// Create a ladder, validating tier order
    ///
    /// # Errors
    /// Returns `DomainError::InvalidValue` if there are no tiers, a bound is
    /// not finite, or bounds are not strictly ascending.
    pub fn new(tiers: Vec<LeverageTier>, fallback: impl Into<String>) -> Result<Self, DomainError> {
        if tiers.is_empty() {
            return Err(DomainError::InvalidValue(
                "leverage ladder needs at least one tier".to_string(),
            ));
        }
        if tiers.iter().any(|t| !t.max_risk.is_finite()) {
            return Err(DomainError::InvalidValue(
                "leverage ladder bounds must be finite".to_string(),
            ));
        }
        if tiers.windows(2).any(|w| w[0].max_risk >= w[1].max_risk) {
            return Err(DomainError::InvalidValue(
                "leverage ladder bounds must be strictly ascending".to_string(),
            ));
        }

        Ok(Self {
            tiers,
            fallback: fallback.into(),
        })
    }

    /// Label for a risk percentage
    pub fn label_for(&self, risk: f64) -> &str {
        self.tiers
            .iter()
            .find(|t| risk <= t.max_risk)
            .map(|t| t.label.as_str())
            .unwrap_or(&self.fallback)
    }

    pub fn tiers(&self) -> &[LeverageTier] {
        &self.tiers
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// `<= 2%` → 5-10x, `<= 4%` → 3-5x, otherwise 2-3x
    pub fn default_ladder() -> Self {
        Self {
            tiers: vec![
                LeverageTier::new(2.0, "5-10x"),
                LeverageTier::new(4.0, "3-5x"),
            ],
            fallback: "2-3x".to_string(),
        }
    }
}

impl Default for LeverageLadder {
    fn default() -> Self {
        Self::default_ladder()
    }
}

/// Rule for the suggested leverage
#[derive(Debug, Clone, PartialEq)]
pub enum LeverageRule {
    /// Looked up from the risk percentage
    Ladder(LeverageLadder),
    /// Higher multiplier for premium setups, reduced otherwise
    ByQuality { premium: String, reduced: String },
    /// Same suggestion for every alert
    Fixed(String),
}

impl LeverageRule {
    /// Suggest leverage for an alert
    ///
    /// The ladder needs a risk value; without one the suggestion is `N/A`.
    pub fn suggest(&self, risk: Option<f64>, quality: &SetupQuality) -> String {
        match self {
            Self::Ladder(ladder) => risk
                .map(|r| ladder.label_for(r).to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            Self::ByQuality { premium, reduced } => {
                if quality.is_premium() {
                    premium.clone()
                } else {
                    reduced.clone()
                }
            }
            Self::Fixed(label) => label.clone(),
        }
    }

    /// Short description for listings
    pub fn describe(&self) -> String {
        match self {
            Self::Ladder(ladder) => {
                let mut parts: Vec<String> = ladder
                    .tiers()
                    .iter()
                    .map(|t| format!("<={}% {}", t.max_risk, t.label))
                    .collect();
                parts.push(format!("else {}", ladder.fallback()));
                format!("risk ladder ({})", parts.join(", "))
            }
            Self::ByQuality { premium, reduced } => {
                format!("by quality (PREMIUM {}, otherwise {})", premium, reduced)
            }
            Self::Fixed(label) => format!("fixed {}", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_derive() {
        let risk = RiskPercent::derive(Some(100.0), Some(97.5), Some(100.0));
        assert!(matches!(risk, RiskPercent::Value(_)));
        assert_eq!(risk.to_string(), "2.50");
    }

    #[test]
    fn test_risk_derive_rounds_to_two_decimals() {
        let risk = RiskPercent::derive(Some(101.0), Some(98.0), Some(99.0));
        assert_eq!(risk.to_string(), "3.03");
    }

    #[test]
    fn test_risk_derive_rounds_once() {
        // 72.75 / 1000 * 100 sits just below 7.275
        let risk = RiskPercent::derive(Some(1000.0), Some(927.25), Some(1000.0));
        assert_eq!(risk.to_string(), "7.27");
    }

    #[test]
    fn test_risk_derive_short_side() {
        let risk = RiskPercent::derive(Some(50.0), Some(51.0), Some(50.0));
        assert_eq!(risk.to_string(), "2.00");
    }

    #[test]
    fn test_risk_unavailable() {
        assert_eq!(
            RiskPercent::derive(Some(1.0), Some(0.5), Some(0.0)),
            RiskPercent::Unavailable
        );
        assert_eq!(
            RiskPercent::derive(None, Some(0.5), Some(1.0)),
            RiskPercent::Unavailable
        );
        assert_eq!(
            RiskPercent::derive(Some(1.0), None, Some(1.0)),
            RiskPercent::Unavailable
        );
        assert_eq!(RiskPercent::Unavailable.to_string(), "N/A");
    }

    #[test]
    fn test_ladder_boundaries() {
        let ladder = LeverageLadder::default();
        assert_eq!(ladder.label_for(0.5), "5-10x");
        assert_eq!(ladder.label_for(2.0), "5-10x");
        assert_eq!(ladder.label_for(2.01), "3-5x");
        assert_eq!(ladder.label_for(4.0), "3-5x");
        assert_eq!(ladder.label_for(4.01), "2-3x");
        assert_eq!(ladder.label_for(12.0), "2-3x");
    }

    #[test]
    fn test_ladder_validation() {
        assert!(LeverageLadder::new(vec![], "x").is_err());
        assert!(LeverageLadder::new(
            vec![LeverageTier::new(4.0, "a"), LeverageTier::new(2.0, "b")],
            "c"
        )
        .is_err());
        assert!(LeverageLadder::new(vec![LeverageTier::new(f64::NAN, "a")], "c").is_err());
        assert!(LeverageLadder::new(vec![LeverageTier::new(1.0, "a")], "c").is_ok());
    }

    #[test]
    fn test_rule_ladder_without_risk() {
        let rule = LeverageRule::Ladder(LeverageLadder::default());
        assert_eq!(rule.suggest(None, &SetupQuality::Premium), "N/A");
        assert_eq!(rule.suggest(Some(3.0), &SetupQuality::Premium), "3-5x");
    }

    #[test]
    fn test_rule_by_quality() {
        let rule = LeverageRule::ByQuality {
            premium: "3x".to_string(),
            reduced: "2x (REDUZIDA)".to_string(),
        };
        assert_eq!(rule.suggest(None, &SetupQuality::Premium), "3x");
        assert_eq!(rule.suggest(None, &SetupQuality::Cautela), "2x (REDUZIDA)");
        assert_eq!(rule.suggest(Some(1.0), &SetupQuality::Contra), "2x (REDUZIDA)");
    }

    #[test]
    fn test_rule_fixed_ignores_input() {
        let rule = LeverageRule::Fixed("3x".to_string());
        assert_eq!(rule.suggest(Some(50.0), &SetupQuality::Contra), "3x");
        assert_eq!(rule.describe(), "fixed 3x");
    }
}
