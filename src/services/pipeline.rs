//! Alert dispatch pipeline
//!
//! Decodes incoming payloads, picks the family (fixed or detected) and runs
//! the matching formatter. Arrays are processed item by item.

use crate::config::Config;
use crate::domain::AlertFamily;
use crate::error::{AppError, Result};
use crate::formatters::{FormattedAlert, FormatterSet};
use crate::payload;
use serde_json::{Map, Value};

/// Service turning raw webhook payloads into formatted alerts
#[derive(Debug, Clone, Default)]
pub struct AlertPipeline {
    formatters: FormatterSet,
    family: Option<AlertFamily>,
    strict: bool,
}

impl AlertPipeline {
    /// Create a pipeline that detects the family of each alert
    pub fn new(formatters: FormatterSet) -> Self {
        Self {
            formatters,
            family: None,
            strict: false,
        }
    }

    /// Create a pipeline from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.formatters()?)
            .with_family(config.general.default_family)
            .with_strict(config.general.strict))
    }

    /// Fix the family instead of detecting it
    pub fn with_family(mut self, family: Option<AlertFamily>) -> Self {
        self.family = family;
        self
    }

    /// Reject alerts that needed defaults
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Family for a decoded payload
    pub fn resolve_family(&self, fields: &Map<String, Value>) -> AlertFamily {
        match self.family {
            Some(family) => family,
            None => {
                let family = AlertFamily::detect(fields);
                log::debug!("Detected {} alert", family);
                family
            }
        }
    }

    /// Format a single alert
    pub fn process_one(&self, raw: &Value) -> Result<FormattedAlert> {
        let fields = payload::decode(raw);
        let family = self.resolve_family(&fields);
        let alert = self.formatters.format_fields(family, fields);

        if !alert.is_complete() {
            if self.strict {
                return Err(AppError::IncompleteAlert {
                    family: family.to_string(),
                    fields: alert.defaulted_fields,
                });
            }
            log::info!(
                "{} alert used defaults for: {}",
                family,
                alert.defaulted_fields.join(", ")
            );
        }

        Ok(alert)
    }

    /// Format one alert, or every item of an array in order
    pub fn process(&self, raw: &Value) -> Result<Vec<FormattedAlert>> {
        match raw {
            Value::Array(items) => {
                log::debug!("Processing batch of {} alerts", items.len());
                items.iter().map(|item| self.process_one(item)).collect()
            }
            single => Ok(vec![self.process_one(single)?]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::AlertSummary;
    use serde_json::json;

    #[test]
    fn test_detects_family_per_item() {
        let pipeline = AlertPipeline::default();
        let alerts = pipeline
            .process(&json!([
                {"body": {"eventType": "BREAK", "pivotInfo": {"level": 5}}},
                {"symbol": "ETHUSDT", "adx": 25},
                {"status": "TRIGGER", "sl": 1},
                {"symbol": "BTCUSDT", "action": "TRIGGER"}
            ]))
            .unwrap();

        let families: Vec<_> = alerts.iter().map(|a| a.family).collect();
        assert_eq!(
            families,
            vec![
                AlertFamily::Dominance,
                AlertFamily::Dnp,
                AlertFamily::Sts,
                AlertFamily::Trs
            ]
        );
    }

    #[test]
    fn test_fixed_family_overrides_detection() {
        let pipeline = AlertPipeline::default().with_family(Some(AlertFamily::Trs));
        let alert = pipeline.process_one(&json!({"adx": 25})).unwrap();
        assert_eq!(alert.family, AlertFamily::Trs);
    }

    #[test]
    fn test_strict_mode_rejects_defaults() {
        let pipeline = AlertPipeline::default()
            .with_family(Some(AlertFamily::Dominance))
            .with_strict(true);

        let err = pipeline
            .process_one(&json!({"eventType": "TOUCH"}))
            .unwrap_err();
        match err {
            AppError::IncompleteAlert { family, fields } => {
                assert_eq!(family, "dominance");
                assert!(fields.contains(&"pivotInfo.level".to_string()));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_strict_mode_accepts_complete_alert() {
        let pipeline = AlertPipeline::default().with_strict(true);
        let alert = pipeline
            .process_one(&json!({
                "action": "PIVOT",
                "timeframe": "240",
                "eventType": "TOUCH",
                "dominance": 4.5,
                "timestamp": "2024-01-01T00:00:00.000Z",
                "pivotInfo": {"type": "MISSED", "direction": "LOW", "level": 4.4, "pivotLength": 20}
            }))
            .unwrap();
        assert!(alert.is_complete());
        assert!(matches!(alert.summary, AlertSummary::Dominance(_)));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.general.strict = true;
        config.general.default_family = Some(AlertFamily::Sts);
        config.leverage.premium = "4x".to_string();

        let pipeline = AlertPipeline::from_config(&config).unwrap();
        assert!(matches!(
            pipeline.process_one(&json!({"symbol": "BTCUSDT"})),
            Err(AppError::IncompleteAlert { .. })
        ));
        let alert = AlertPipeline::from_config(&config)
            .unwrap()
            .with_strict(false)
            .process_one(&json!({"setupQuality": "PREMIUM"}))
            .unwrap();
        assert_eq!(alert.family, AlertFamily::Sts);
        assert!(alert.message.contains("⚖️ Alavancagem sugerida: 4x\n"));
    }

    #[test]
    fn test_string_body_is_decoded() {
        let raw = json!({"json": {"body": "{\"symbol\":\"SOLUSDT\",\"adx\":30}"}});
        let alert = AlertPipeline::default().process_one(&raw).unwrap();
        assert_eq!(alert.family, AlertFamily::Dnp);
        assert_eq!(alert.alert_data["symbol"], "SOLUSDT");
    }
}
