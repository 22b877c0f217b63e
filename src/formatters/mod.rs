//! Alert formatters
//!
//! One formatter per alert family. Each runs the same pipeline: decode the
//! payload, normalize it into a fully defaulted typed record, then render the
//! record into the chat message and a compact summary.

pub mod dnp;
pub mod dominance;
pub mod sts;
pub mod trs;

pub use dnp::{DnpAlert, DnpFormatter};
pub use dominance::{DominanceAlert, DominanceFormatter};
pub use sts::{StsAlert, StsFormatter};
pub use trs::{TrsAlert, TrsFormatter};

use crate::domain::value::serialize_number;
use crate::domain::{AlertAction, AlertFamily, Direction, FishingType, SetupQuality};
use crate::payload::{self, FieldReader, Normalized};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Formatter for one alert family
pub trait AlertFormatter {
    /// Fully defaulted record for this family
    type Alert: fmt::Debug + Clone;

    /// Family handled by this formatter
    fn family(&self) -> AlertFamily;

    /// Read every field with its default
    fn read(&self, reader: &mut FieldReader<'_>) -> Self::Alert;

    /// Render the chat message
    fn render(&self, alert: &Self::Alert) -> String;

    /// Echo of the normalized fields
    fn summarize(&self, alert: &Self::Alert) -> AlertSummary;

    /// Normalize decoded payload fields
    fn normalize(&self, fields: &Map<String, Value>) -> Normalized<Self::Alert> {
        let mut reader = FieldReader::new(fields);
        let alert = self.read(&mut reader);
        reader.finish(alert)
    }

    /// Format already decoded payload fields
    fn format_fields(&self, fields: Map<String, Value>) -> FormattedAlert {
        let normalized = self.normalize(&fields);
        let message = self.render(&normalized.alert);

        log::debug!(
            "Formatted {} alert ({} defaulted fields)",
            self.family(),
            normalized.defaulted.len()
        );

        FormattedAlert {
            family: self.family(),
            summary: self.summarize(&normalized.alert),
            message,
            alert_data: Value::Object(fields),
            defaulted_fields: normalized.defaulted,
        }
    }

    /// Format a raw webhook value
    fn format(&self, raw: &Value) -> FormattedAlert {
        self.format_fields(payload::decode(raw))
    }
}

/// Result of formatting one alert
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAlert {
    pub family: AlertFamily,
    #[serde(flatten)]
    pub summary: AlertSummary,
    /// Message for the chat channel
    pub message: String,
    /// Decoded payload as received
    pub alert_data: Value,
    /// Fields that fell back to defaults
    pub defaulted_fields: Vec<String>,
}

impl FormattedAlert {
    /// Check if no field was defaulted
    pub fn is_complete(&self) -> bool {
        self.defaulted_fields.is_empty()
    }
}

/// Normalized fields echoed next to the message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AlertSummary {
    /// TRS and DNP
    Trade(TradeSummary),
    Sts(StsSummary),
    Dominance(DominanceSummary),
}

impl AlertSummary {
    /// One-line description
    pub fn headline(&self) -> String {
        match self {
            Self::Trade(s) => format!(
                "{} {} {} {} quality={} leverage={}",
                s.action, s.direction, s.symbol, s.timeframe, s.setup_quality, s.leverage
            ),
            Self::Sts(s) => format!(
                "{} {} {} {} quality={} fishing={}",
                s.status, s.direction, s.symbol, s.timeframe, s.setup_quality, s.fishing_type
            ),
            Self::Dominance(s) => format!(
                "{} {} {} level={}% timeframe={}",
                s.event_type, s.pivot_type, s.direction, s.level, s.timeframe
            ),
        }
    }
}

/// Summary of a TRS or DNP alert
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSummary {
    pub symbol: String,
    pub action: AlertAction,
    pub direction: Direction,
    /// Asset class used for channel routing
    #[serde(rename = "moedaTipo")]
    pub asset_class: String,
    pub timeframe: String,
    pub setup_quality: SetupQuality,
    pub leverage: String,
}

/// Summary of an STS alert
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StsSummary {
    pub symbol: String,
    pub direction: Direction,
    pub timeframe: String,
    pub setup_quality: SetupQuality,
    pub fishing_type: FishingType,
    pub status: AlertAction,
}

/// Summary of a dominance pivot alert
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DominanceSummary {
    pub action: String,
    pub event_type: String,
    pub pivot_type: String,
    pub direction: String,
    /// Display label, not the raw code
    pub timeframe: String,
    #[serde(serialize_with = "serialize_number")]
    pub level: f64,
    #[serde(serialize_with = "serialize_number")]
    pub pivot_length: f64,
    #[serde(serialize_with = "serialize_number")]
    pub dominance: f64,
    pub emoji: String,
    pub timestamp: String,
}

/// One formatter per family, sharing leverage settings
#[derive(Debug, Clone, Default)]
pub struct FormatterSet {
    pub trs: TrsFormatter,
    pub dnp: DnpFormatter,
    pub sts: StsFormatter,
    pub dominance: DominanceFormatter,
}

impl FormatterSet {
    /// Format decoded fields with the formatter of a family
    pub fn format_fields(&self, family: AlertFamily, fields: Map<String, Value>) -> FormattedAlert {
        match family {
            AlertFamily::Trs => self.trs.format_fields(fields),
            AlertFamily::Dnp => self.dnp.format_fields(fields),
            AlertFamily::Sts => self.sts.format_fields(fields),
            AlertFamily::Dominance => self.dominance.format_fields(fields),
        }
    }

    /// Format a raw webhook value with the formatter of a family
    pub fn format(&self, family: AlertFamily, raw: &Value) -> FormattedAlert {
        self.format_fields(family, payload::decode(raw))
    }

    /// Describe the leverage rule of a family
    pub fn leverage_rule(&self, family: AlertFamily) -> String {
        match family {
            AlertFamily::Trs => self.trs.leverage().describe(),
            AlertFamily::Dnp => self.dnp.leverage().describe(),
            AlertFamily::Sts => self.sts.leverage().describe(),
            AlertFamily::Dominance => "none".to_string(),
        }
    }
}

/// Format a raw webhook value with default settings
pub fn format_alert(family: AlertFamily, raw: &Value) -> FormattedAlert {
    FormatterSet::default().format(family, raw)
}
