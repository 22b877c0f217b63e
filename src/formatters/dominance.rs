//! USDT dominance pivot formatter
//!
//! Pivot touches and breaks on the USDT.D chart, read as risk-on/risk-off
//! signals for the crypto market.

use super::{AlertFormatter, AlertSummary, DominanceSummary};
use crate::classify::{scenario, PivotScenario};
use crate::domain::value::{format_fixed, format_number};
use crate::domain::{timeframe_label, AlertFamily, PivotKey};
use crate::payload::FieldReader;
use crate::render::{MessageBuilder, DISCLAIMER};
use chrono::{SecondsFormat, Utc};

/// Normalized dominance alert
#[derive(Debug, Clone, PartialEq)]
pub struct DominanceAlert {
    pub action: String,
    /// Chart timeframe code, e.g. `240`
    pub timeframe_code: String,
    pub event_type: String,
    pub pivot_type: String,
    pub direction: String,
    pub level: f64,
    pub pivot_length: f64,
    pub dominance: f64,
    pub timestamp: String,
    /// `None` when the event or pivot type is not recognized
    pub scenario: Option<PivotKey>,
}

impl DominanceAlert {
    /// Display label of the timeframe
    pub fn timeframe(&self) -> &str {
        timeframe_label(&self.timeframe_code)
    }

    fn texts(&self) -> Option<&'static PivotScenario> {
        self.scenario.map(scenario)
    }
}

/// Formatter for dominance pivot alerts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DominanceFormatter;

/// Current UTC time, ISO-8601 with milliseconds
fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl AlertFormatter for DominanceFormatter {
    type Alert = DominanceAlert;

    fn family(&self) -> AlertFamily {
        AlertFamily::Dominance
    }

    fn read(&self, reader: &mut FieldReader<'_>) -> DominanceAlert {
        let event_type = reader.text("eventType", "TOUCH");
        let pivot_type = reader.text("pivotInfo.type", "REGULAR");
        let direction = reader.text("pivotInfo.direction", "HIGH");
        let scenario = PivotKey::classify(&event_type, &pivot_type, &direction);
        if scenario.is_none() {
            log::warn!(
                "Unrecognized pivot event {}/{}, message parts left empty",
                event_type,
                pivot_type
            );
        }

        let timestamp = match reader.optional_text("timestamp") {
            Some(ts) => ts,
            None => {
                reader.note_default("timestamp");
                now_timestamp()
            }
        };

        DominanceAlert {
            action: reader.text("action", "UNKNOWN"),
            timeframe_code: reader.text("timeframe", "60"),
            level: reader.number("pivotInfo.level", 0.0),
            pivot_length: reader.number("pivotInfo.pivotLength", 50.0),
            dominance: reader.number("dominance", 0.0),
            event_type,
            pivot_type,
            direction,
            timestamp,
            scenario,
        }
    }

    fn render(&self, alert: &DominanceAlert) -> String {
        let (emoji, title, subtitle, body, implication) = match alert.texts() {
            Some(s) => (
                s.emoji,
                s.title,
                s.subtitle,
                s.describe(
                    &format_fixed(alert.level, 4),
                    alert.timeframe(),
                    &format_number(alert.pivot_length),
                ),
                s.implication,
            ),
            None => ("", "", "", String::new(), ""),
        };

        MessageBuilder::new()
            .line(format!("{} {}", emoji, title))
            .divider()
            .line(subtitle)
            .blank()
            .line(body)
            .divider()
            .line(implication)
            .divider()
            .push(DISCLAIMER)
            .build()
    }

    fn summarize(&self, alert: &DominanceAlert) -> AlertSummary {
        AlertSummary::Dominance(DominanceSummary {
            action: alert.action.clone(),
            event_type: alert.event_type.clone(),
            pivot_type: alert.pivot_type.clone(),
            direction: alert.direction.clone(),
            timeframe: alert.timeframe().to_string(),
            level: alert.level,
            pivot_length: alert.pivot_length,
            dominance: alert.dominance,
            emoji: alert.texts().map(|s| s.emoji).unwrap_or_default().to_string(),
            timestamp: alert.timestamp.clone(),
        })
    }
}
