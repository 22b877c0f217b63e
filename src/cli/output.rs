//! Output formatting utilities
//!
//! Provides text, JSON and compact output for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::AlertFamily;
use crate::error::Result;
use crate::formatters::{FormattedAlert, FormatterSet};
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TextDisplay>(data: &T, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            writeln!(handle, "{}", data.to_text())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data)?;
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types with a human-readable rendering
pub trait TextDisplay {
    /// Format as display text
    fn to_text(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_text().replace('\n', " | ")
    }
}

impl TextDisplay for FormattedAlert {
    fn to_text(&self) -> String {
        self.message.clone()
    }

    fn to_compact(&self) -> String {
        let mut line = format!("[{}] {}", self.family, self.summary.headline());
        if !self.defaulted_fields.is_empty() {
            line.push_str(&format!(" defaults={}", self.defaulted_fields.len()));
        }
        line
    }
}

/// Alerts from one input, in input order
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct AlertBatch {
    pub alerts: Vec<FormattedAlert>,
}

impl TextDisplay for AlertBatch {
    fn to_text(&self) -> String {
        self.alerts
            .iter()
            .map(|a| a.to_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn to_compact(&self) -> String {
        self.alerts
            .iter()
            .map(|a| a.to_compact())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Family list entry for display
#[derive(Debug, Clone, Serialize)]
pub struct FamilyEntry {
    pub name: String,
    pub setup: String,
    pub leverage: String,
}

impl TextDisplay for FamilyEntry {
    fn to_text(&self) -> String {
        format!("{:<10} {:<18} leverage: {}", self.name, self.setup, self.leverage)
    }

    fn to_compact(&self) -> String {
        self.name.clone()
    }
}

/// Supported families for display
#[derive(Debug, Clone, Serialize)]
pub struct FamilyList {
    pub families: Vec<FamilyEntry>,
}

impl FamilyList {
    /// Describe every family with the leverage rules in effect
    pub fn new(formatters: &FormatterSet) -> Self {
        Self {
            families: AlertFamily::ALL
                .iter()
                .map(|family| FamilyEntry {
                    name: family.to_string(),
                    setup: family.setup_name().to_string(),
                    leverage: formatters.leverage_rule(*family),
                })
                .collect(),
        }
    }
}

impl TextDisplay for FamilyList {
    fn to_text(&self) -> String {
        self.families
            .iter()
            .map(|f| f.to_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_compact(&self) -> String {
        self.families
            .iter()
            .map(|f| f.to_compact())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::format_alert;
    use serde_json::json;

    #[test]
    fn test_alert_compact_line() {
        let alert = format_alert(
            AlertFamily::Trs,
            &json!({
                "symbol": "BTCUSDT",
                "action": "TRIGGER",
                "direction": "LONG",
                "timeframe": "15",
                "price": 1,
                "setupQuality": "PREMIUM",
                "htfTrend": "ALTA",
                "htfTimeframe": "4H"
            }),
        );
        assert_eq!(
            alert.to_compact(),
            "[trs] TRIGGER LONG BTCUSDT 15 quality=PREMIUM leverage=3x"
        );
    }

    #[test]
    fn test_alert_compact_counts_defaults() {
        let alert = format_alert(AlertFamily::Sts, &json!({}));
        assert!(alert.to_compact().starts_with("[sts] CONFIRMED N/A N/A N/A quality=CAUTELA"));
        assert!(alert.to_compact().contains(" defaults="));
    }

    #[test]
    fn test_batch_text_separates_messages() {
        let batch = AlertBatch {
            alerts: vec![
                format_alert(AlertFamily::Dominance, &json!({})),
                format_alert(AlertFamily::Dominance, &json!({"eventType": "BREAK"})),
            ],
        };
        let text = batch.to_text();
        assert_eq!(text.matches("⚠️ Não é recomendação de investimento").count(), 2);
        assert!(text.contains("investimento\n\n"));
        assert_eq!(batch.to_compact().lines().count(), 2);
    }

    #[test]
    fn test_batch_serializes_as_array() {
        let batch = AlertBatch {
            alerts: vec![format_alert(AlertFamily::Trs, &json!({}))],
        };
        let json = serde_json::to_value(&batch).unwrap();
        assert!(json.is_array());
    }

    #[test]
    fn test_family_list() {
        let list = FamilyList::new(&FormatterSet::default());
        assert_eq!(list.families.len(), 4);
        assert_eq!(list.to_compact(), "trs, dnp, sts, dominance");
        assert!(list.to_text().contains("STS by CryptoMind"));
    }
}
