//! STS alert formatter
//!
//! Candle-rejection alerts: the message lists the validations behind the
//! setup (candle shape, rejection zones, confluence, EMA barrier) and a macro
//! trend block for premium and counter-trend setups.

use super::{AlertFormatter, AlertSummary, StsSummary};
use crate::classify::{
    confluence_header, describe_zones, ema_barrier, quality_block, Confluence, LeverageRule,
    QualityStyle, RiskPercent, TrendContext,
};
use crate::domain::value::{format_fixed, parse_number};
use crate::domain::{AlertAction, AlertFamily, Direction, FishingType, SetupQuality};
use crate::payload::FieldReader;
use crate::render::{MessageBuilder, DISCLAIMER, NOT_AVAILABLE};

/// Normalized STS alert
#[derive(Debug, Clone, PartialEq)]
pub struct StsAlert {
    pub status: AlertAction,
    pub symbol: String,
    pub direction: Direction,
    pub timeframe: String,
    pub setup_quality: SetupQuality,
    pub htf_trend: String,
    pub htf_timeframe: String,
    pub fishing_type: FishingType,
    /// Raw confluence tag, echoed in the header
    pub confluence_tag: String,
    pub confluence: Confluence,
    pub rejection_zones: String,
    pub emas_rejected: String,
    pub emas_count: u32,
    pub wick_to_body_ratio: String,
    pub price: Option<f64>,
    pub trigger: Option<f64>,
    pub stop_loss: Option<f64>,
    pub tp1: Option<f64>,
    pub tp2: Option<f64>,
    pub risk_percent: RiskPercent,
    pub leverage: String,
}

/// Formatter for STS alerts
#[derive(Debug, Clone, PartialEq)]
pub struct StsFormatter {
    leverage: LeverageRule,
}

impl StsFormatter {
    pub fn new(leverage: LeverageRule) -> Self {
        Self { leverage }
    }

    pub fn leverage(&self) -> &LeverageRule {
        &self.leverage
    }
}

impl Default for StsFormatter {
    fn default() -> Self {
        Self::new(LeverageRule::ByQuality {
            premium: "3x".to_string(),
            reduced: "2x (REDUZIDA)".to_string(),
        })
    }
}

/// Price with two decimals, `N/A` when unset
fn price(value: Option<f64>) -> String {
    value
        .map(|v| format_fixed(v, 2))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl AlertFormatter for StsFormatter {
    type Alert = StsAlert;

    fn family(&self) -> AlertFamily {
        AlertFamily::Sts
    }

    fn read(&self, reader: &mut FieldReader<'_>) -> StsAlert {
        let status = AlertAction::parse(&reader.text("status", AlertAction::Confirmed.as_str()));
        let setup_quality = SetupQuality::parse(&reader.text("setupQuality", "CAUTELA"));
        let confluence_tag = reader.text("confluence", "Simples");
        let emas_count = reader.number("emasCount", 0.0).max(0.0).floor() as u32;

        let price_field = if status.is_trigger() { "price" } else { "entry" };
        let entry = reader.optional_number(price_field);
        let trigger = reader.lookup("trigger").and_then(parse_number);

        let (stop_loss, tp1, tp2) = match status {
            AlertAction::Trigger => (None, None, None),
            AlertAction::Confirmed => (
                reader.optional_number("sl"),
                reader.optional_number("tp1"),
                reader.optional_number("tp2"),
            ),
        };

        StsAlert {
            symbol: reader.text("symbol", NOT_AVAILABLE),
            direction: Direction::parse(&reader.text("direction", NOT_AVAILABLE)),
            timeframe: reader.text("timeframe", NOT_AVAILABLE),
            htf_trend: reader.text("htfTrend", "NEUTRO"),
            htf_timeframe: reader.text("htfTimeframe", NOT_AVAILABLE),
            fishing_type: FishingType::parse(&reader.text("fishingType", FishingType::None.as_str())),
            rejection_zones: reader.text("rejectionZones", ""),
            emas_rejected: reader.text("emasRejected", ""),
            wick_to_body_ratio: reader.text("wickToBodyRatio", NOT_AVAILABLE),
            confluence: Confluence::parse(&confluence_tag),
            risk_percent: RiskPercent::derive(trigger.or(entry), stop_loss, entry),
            leverage: self.leverage.suggest(None, &setup_quality),
            status,
            setup_quality,
            confluence_tag,
            emas_count,
            price: entry,
            trigger,
            stop_loss,
            tp1,
            tp2,
        }
    }

    fn render(&self, alert: &StsAlert) -> String {
        let macro_block = quality_block(
            QualityStyle::Macro {
                fishing: alert.fishing_type,
            },
            &alert.setup_quality,
            TrendContext {
                timeframe: &alert.htf_timeframe,
                trend: &alert.htf_trend,
            },
        )
        .unwrap_or_default();
        let candle = if alert.direction.is_long() {
            "Martelo"
        } else {
            "Martelo Invertido"
        };
        let contra = alert.setup_quality.is_contra();

        let mut msg = MessageBuilder::new();
        msg.line(format!(
            "{} {} {} {}",
            alert.status.emoji(),
            Direction::emoji_for(alert.direction.is_long()),
            alert.direction,
            alert.symbol
        ))
        .divider()
        .line(format!("{} {}", alert.status.emoji(), alert.status.banner()))
        .line(format!("📊 Setup: {}", AlertFamily::Sts.setup_name()))
        .line(format!("⏱ Timeframe: {}", alert.timeframe))
        .line(confluence_header(&alert.confluence_tag))
        .blank()
        .line(macro_block)
        .blank()
        .divider();

        match alert.status {
            AlertAction::Trigger => {
                msg.line(format!("💰 Preço: ${}", price(alert.price)))
                    .line(format!("🎯 Trigger: ${}", price(alert.trigger)))
                    .divider()
                    .line("📊 VALIDAÇÕES:")
                    .line(format!(
                        "✅ Candle {}: Pavio {}x corpo",
                        candle, alert.wick_to_body_ratio
                    ))
                    .line(format!(
                        "✅ Rejeição: {}",
                        describe_zones(&alert.rejection_zones, &alert.emas_rejected, alert.emas_count)
                    ))
                    .line(alert.confluence.label())
                    .line_opt(ema_barrier(alert.emas_count))
                    .divider()
                    .push("⚠️ Aguardando rompimento do trigger");
                if contra {
                    msg.push("\n⚠️ ATENÇÃO: Opera contra a tendência macro");
                }
            }
            AlertAction::Confirmed => {
                msg.line(format!("🎯 Entrada: ${}", price(alert.price)))
                    .line(format!("🛑 Stop Loss: ${}", price(alert.stop_loss)))
                    .line(format!(
                        "✅ TP1 (1R): ${} (Parcial 50% + SL para entrada)",
                        price(alert.tp1)
                    ))
                    .line(format!("✅ TP2 (2R): ${} (Trailing Stop)", price(alert.tp2)))
                    .divider()
                    .line(format!("⚖️ Alavancagem sugerida: {}", alert.leverage))
                    .line(format!("📊 Risco: {}%", alert.risk_percent))
                    .divider()
                    .line("📋 GESTÃO:")
                    .line("1️⃣ TP1: Realizar 50% + Mover SL para entrada (breakeven)")
                    .line("2️⃣ TP2: Ativar trailing stop nos 50% restantes")
                    .divider();
                if contra {
                    msg.line("⚠️ OPERA CONTRA A TENDÊNCIA MACRO");
                }
                msg.push(DISCLAIMER);
            }
        }

        msg.build()
    }

    fn summarize(&self, alert: &StsAlert) -> AlertSummary {
        AlertSummary::Sts(StsSummary {
            symbol: alert.symbol.clone(),
            direction: alert.direction.clone(),
            timeframe: alert.timeframe.clone(),
            setup_quality: alert.setup_quality.clone(),
            fishing_type: alert.fishing_type,
            status: alert.status,
        })
    }
}
