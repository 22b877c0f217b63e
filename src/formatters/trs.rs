//! TRS alert formatter
//!
//! Trigger/confirmation alerts with a fixed suggested leverage and an
//! optional `+`-joined validator list.

use super::{AlertFormatter, AlertSummary, TradeSummary};
use crate::classify::{describe_validation, quality_block, LeverageRule, QualityStyle, TrendContext};
use crate::domain::{AlertAction, AlertFamily, Direction, SetupQuality};
use crate::payload::FieldReader;
use crate::render::{bold, italic_disclaimer, MessageBuilder, NOT_AVAILABLE};

const STYLE: QualityStyle = QualityStyle::Banner {
    mtf_validation: true,
};

/// Normalized TRS alert
#[derive(Debug, Clone, PartialEq)]
pub struct TrsAlert {
    pub symbol: String,
    pub action: AlertAction,
    pub direction: Direction,
    pub timeframe: String,
    /// Validator list such as `SR+RSI`
    pub validation: Option<String>,
    pub setup_quality: SetupQuality,
    pub htf_trend: String,
    pub htf_timeframe: String,
    /// Trigger price or confirmed entry
    pub price: String,
    pub stop_loss: String,
    pub target1: String,
    pub target2: String,
    pub risk_percent: String,
    pub asset_class: &'static str,
    pub leverage: String,
}

/// Formatter for TRS alerts
#[derive(Debug, Clone, PartialEq)]
pub struct TrsFormatter {
    leverage: LeverageRule,
}

impl TrsFormatter {
    pub fn new(leverage: LeverageRule) -> Self {
        Self { leverage }
    }

    pub fn leverage(&self) -> &LeverageRule {
        &self.leverage
    }
}

impl Default for TrsFormatter {
    fn default() -> Self {
        Self::new(LeverageRule::Fixed("3x".to_string()))
    }
}

/// `BTC` for bitcoin pairs, `ALTS` otherwise
fn asset_class(symbol: &str) -> &'static str {
    if symbol.to_uppercase().contains("BTC") {
        "BTC"
    } else {
        "ALTS"
    }
}

/// Trade levels only exist once the breakout is confirmed
fn trade_level(reader: &mut FieldReader<'_>, action: AlertAction, path: &str) -> String {
    if action.is_trigger() {
        NOT_AVAILABLE.to_string()
    } else {
        reader.text(path, NOT_AVAILABLE)
    }
}

impl AlertFormatter for TrsFormatter {
    type Alert = TrsAlert;

    fn family(&self) -> AlertFamily {
        AlertFamily::Trs
    }

    fn read(&self, reader: &mut FieldReader<'_>) -> TrsAlert {
        let symbol = reader.text("symbol", NOT_AVAILABLE);
        let action = AlertAction::parse(&reader.text("action", AlertAction::Confirmed.as_str()));
        let setup_quality = SetupQuality::parse(&reader.text("setupQuality", "CAUTELA"));

        let stop_loss = trade_level(reader, action, "stopLoss");
        let target1 = trade_level(reader, action, "target1");
        let target2 = trade_level(reader, action, "target2");
        let risk_percent = trade_level(reader, action, "riskPercent");

        let price_field = if action.is_trigger() { "price" } else { "entry" };

        TrsAlert {
            asset_class: asset_class(&symbol),
            leverage: self.leverage.suggest(None, &setup_quality),
            action,
            direction: Direction::parse(&reader.text("direction", NOT_AVAILABLE)),
            timeframe: reader.text("timeframe", NOT_AVAILABLE),
            validation: reader.optional_text("validation"),
            htf_trend: reader.text("htfTrend", "NEUTRA"),
            htf_timeframe: reader.text("htfTimeframe", NOT_AVAILABLE),
            price: reader.text(price_field, NOT_AVAILABLE),
            stop_loss,
            target1,
            target2,
            risk_percent,
            setup_quality,
            symbol,
        }
    }

    fn render(&self, alert: &TrsAlert) -> String {
        let quality = quality_block(
            STYLE,
            &alert.setup_quality,
            TrendContext {
                timeframe: &alert.htf_timeframe,
                trend: &alert.htf_trend,
            },
        );
        let validation = alert.validation.as_deref().and_then(describe_validation);

        let mut msg = MessageBuilder::new();
        msg.line(format!(
            "{} {} {}",
            alert.action.emoji(),
            Direction::emoji_for(alert.direction.mentions_long()),
            bold(&format!("{} {}", alert.direction, alert.symbol))
        ))
        .divider()
        .line(format!("{} {}", alert.action.emoji(), bold(alert.action.banner())))
        .line("📊 Setup: TRS")
        .line(format!("⏱ Timeframe: {}", alert.timeframe))
        .line_opt(validation)
        .divider()
        .section(quality);

        match alert.action {
            AlertAction::Trigger => {
                msg.line(format!("💰 Preço: ${}", alert.price))
                    .line("⚠️ Aguardando confirmação por rompimento")
                    .divider();
            }
            AlertAction::Confirmed => {
                msg.line(format!("🎯 Entrada: ${}", alert.price))
                    .line(format!("🛑 Stop Loss: ${}", alert.stop_loss))
                    .line(format!("✅ TP1: ${}", alert.target1))
                    .line(format!("✅ TP2: ${}", alert.target2))
                    .divider()
                    .line(format!("⚖️ Alavancagem sugerida: {}", alert.leverage))
                    .line(format!("📊 Risco: {}%", alert.risk_percent))
                    .divider();
            }
        }

        msg.push(italic_disclaimer()).build()
    }

    fn summarize(&self, alert: &TrsAlert) -> AlertSummary {
        AlertSummary::Trade(TradeSummary {
            symbol: alert.symbol.clone(),
            action: alert.action,
            direction: alert.direction.clone(),
            asset_class: alert.asset_class.to_string(),
            timeframe: alert.timeframe.clone(),
            setup_quality: alert.setup_quality.clone(),
            leverage: alert.leverage.clone(),
        })
    }
}
