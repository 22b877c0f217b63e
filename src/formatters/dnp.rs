//! DNP alert formatter
//!
//! Confirmed DNP alerts carry a full trade plan (targets at 1:1 and 1:2,
//! breakeven and trailing stop management) and a leverage suggestion looked
//! up from the risk percentage.

use super::{AlertFormatter, AlertSummary, TradeSummary};
use crate::classify::{quality_block, LeverageLadder, LeverageRule, QualityStyle, TrendContext};
use crate::domain::value::{display_value, parse_float_prefix};
use crate::domain::{AlertAction, AlertFamily, Direction, SetupQuality};
use crate::payload::FieldReader;
use crate::render::{bold, italic, italic_disclaimer, MessageBuilder, NOT_AVAILABLE};

const STYLE: QualityStyle = QualityStyle::Banner {
    mtf_validation: false,
};

/// Normalized DNP alert
#[derive(Debug, Clone, PartialEq)]
pub struct DnpAlert {
    pub symbol: String,
    pub action: AlertAction,
    pub direction: Direction,
    pub timeframe: String,
    pub price: String,
    /// Breakout level, only on trigger alerts
    pub trigger: String,
    pub stop_loss: String,
    pub target1: String,
    pub target2: String,
    /// Risk in quote currency
    pub risk: String,
    pub risk_percent: String,
    pub trailing_distance: String,
    pub adx: String,
    pub remi: String,
    pub setup_quality: SetupQuality,
    pub htf_trend: String,
    pub htf_timeframe: String,
    pub asset_class: &'static str,
    pub leverage: String,
}

/// Formatter for DNP alerts
#[derive(Debug, Clone, PartialEq)]
pub struct DnpFormatter {
    leverage: LeverageRule,
}

impl DnpFormatter {
    pub fn new(leverage: LeverageRule) -> Self {
        Self { leverage }
    }

    pub fn leverage(&self) -> &LeverageRule {
        &self.leverage
    }
}

impl Default for DnpFormatter {
    fn default() -> Self {
        Self::new(LeverageRule::Ladder(LeverageLadder::default()))
    }
}

/// `USDT` for tether-quoted pairs, `BTC` otherwise
fn asset_class(symbol: &str) -> &'static str {
    if symbol.contains("USDT") {
        "USDT"
    } else {
        "BTC"
    }
}

impl AlertFormatter for DnpFormatter {
    type Alert = DnpAlert;

    fn family(&self) -> AlertFamily {
        AlertFamily::Dnp
    }

    fn read(&self, reader: &mut FieldReader<'_>) -> DnpAlert {
        let symbol = reader.text("symbol", NOT_AVAILABLE);
        let action = AlertAction::parse(&reader.text("action", AlertAction::Confirmed.as_str()));
        let setup_quality = SetupQuality::parse(&reader.text("setupQuality", "CAUTELA"));
        let price = reader.text_any(&["price", "entry"], NOT_AVAILABLE);
        let risk_percent = reader.text("riskPercent", NOT_AVAILABLE);

        let risk_value = if risk_percent == NOT_AVAILABLE {
            None
        } else {
            parse_float_prefix(&risk_percent)
        };
        let leverage = self.leverage.suggest(risk_value, &setup_quality);

        let trigger = match action {
            AlertAction::Trigger => reader
                .lookup_any(&["triggerHigh", "triggerLow"])
                .map(display_value)
                .unwrap_or_else(|| price.clone()),
            AlertAction::Confirmed => NOT_AVAILABLE.to_string(),
        };

        let mut confirmed = |path: &str| match action {
            AlertAction::Trigger => NOT_AVAILABLE.to_string(),
            AlertAction::Confirmed => reader.text(path, NOT_AVAILABLE),
        };
        let stop_loss = confirmed("stopLoss");
        let target1 = confirmed("target1");
        let target2 = confirmed("target2");
        let risk = confirmed("risk");
        let trailing_distance = confirmed("trailingDistance");

        DnpAlert {
            asset_class: asset_class(&symbol),
            direction: Direction::parse(&reader.text("direction", "LONG")),
            timeframe: reader.text("timeframe", NOT_AVAILABLE),
            adx: reader.text("adx", NOT_AVAILABLE),
            remi: reader.text("remi", NOT_AVAILABLE),
            htf_trend: reader.text("htfTrend", "NEUTRO"),
            htf_timeframe: reader.text("htfTimeframe", NOT_AVAILABLE),
            symbol,
            action,
            price,
            trigger,
            stop_loss,
            target1,
            target2,
            risk,
            risk_percent,
            trailing_distance,
            setup_quality,
            leverage,
        }
    }

    fn render(&self, alert: &DnpAlert) -> String {
        let quality = quality_block(
            STYLE,
            &alert.setup_quality,
            TrendContext {
                timeframe: &alert.htf_timeframe,
                trend: &alert.htf_trend,
            },
        );
        let indicators = format!("📈 ADX: {} | REMI: {}", alert.adx, alert.remi);

        let mut msg = MessageBuilder::new();
        msg.line(format!(
            "{} {} {}",
            alert.action.emoji(),
            Direction::emoji_for(alert.direction.is_long()),
            bold(&format!("{} {}", alert.direction, alert.symbol))
        ))
        .divider()
        .line(format!("{} {}", alert.action.emoji(), bold(alert.action.banner())))
        .line("📊 Setup: DNP")
        .line(format!("⏱ Timeframe: {}", alert.timeframe))
        .divider()
        .section(quality);

        match alert.action {
            AlertAction::Trigger => {
                msg.line(format!("💰 Preço: ${}", alert.price))
                    .line(format!("🎯 Trigger: ${}", alert.trigger))
                    .divider()
                    .line(&indicators)
                    .divider()
                    .line(format!("⚠️ {}", italic("Aguardando confirmação por rompimento")));
            }
            AlertAction::Confirmed => {
                msg.line(format!("🎯 {}", bold("ENTRADA")))
                    .line(format!("💰 Preço: ${}", alert.price))
                    .line(format!("🛑 Stop Loss: ${}", alert.stop_loss))
                    .line(format!("📊 Risco: {}% (${})", alert.risk_percent, alert.risk))
                    .divider()
                    .line(format!("🎯 {}", bold("ALVOS (Risco:Retorno)")))
                    .line(format!("✅ TP1: ${} (1:1)", alert.target1))
                    .line(format!("✅ TP2: ${} (1:2)", alert.target2))
                    .divider()
                    .line(format!("⚙️ {}", bold("GESTÃO DO TRADE")))
                    .line(format!("📈 {}", bold("Ao atingir TP1:")))
                    .line("   • Realizar 50% da posição")
                    .line("   • Subir stop para entrada (breakeven)")
                    .line("   • Ativar trailing stop")
                    .blank()
                    .line(format!("🔄 {}", bold("Trailing Stop:")))
                    .line(format!("   • Distância: ${}", alert.trailing_distance))
                    .line("   • Seguir preço até TP2")
                    .divider()
                    .line(format!("📊 {}", bold("INDICADORES")))
                    .line(&indicators)
                    .line(format!("⚖️ Alavancagem sugerida: {}", alert.leverage))
                    .divider();
            }
        }

        msg.line(italic_disclaimer()).build()
    }

    fn summarize(&self, alert: &DnpAlert) -> AlertSummary {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DIVIDER;
    use serde_json::{json, Value};

    fn format(raw: Value) -> String {
        DnpFormatter::default().format(&raw).message
    }

    fn normalize(raw: Value) -> DnpAlert {
        let fields = raw.as_object().cloned().unwrap();
        DnpFormatter::default().normalize(&fields).alert
    }

    #[test]
    fn test_trigger_message() {
        let message = format(json!({
            "symbol": "SOLUSDT",
            "action": "TRIGGER",
            "direction": "SHORT",
            "timeframe": "240",
            "price": 150.25,
            "triggerLow": 149.9,
            "adx": 28.4,
            "remi": "-0.35",
            "setupQuality": "CONTRA",
            "htfTrend": "ALTA",
            "htfTimeframe": "1D"
        }));

        let expected = format!(
            "🔔 🔴 <b>SHORT SOLUSDT</b>\n\
             {d}\n\
             🔔 <b>GATILHO ARMADO</b>\n\
             📊 Setup: DNP\n\
             ⏱ Timeframe: 240\n\
             {d}\n\
             🚫 <b>CONTRA-TENDÊNCIA</b> 🚫\n\
             📉 1D em tendência de ALTA\n\
             {d}\n\
             ⛔ ALTO RISCO - Operação contra o fluxo maior\n\
             ⚠️ Não recomendado para iniciantes\n\
             {d}\n\
             💰 Preço: $150.25\n\
             🎯 Trigger: $149.9\n\
             {d}\n\
             📈 ADX: 28.4 | REMI: -0.35\n\
             {d}\n\
             ⚠️ <i>Aguardando confirmação por rompimento</i>\n\
             ⚠️ <i>Não é recomendação de investimento</i>\n",
            d = DIVIDER
        );
        assert_eq!(message, expected);
    }

    #[test]
    fn test_confirmed_message() {
        let message = format(json!({
            "symbol": "BTCUSDT",
            "action": "CONFIRMED",
            "direction": "LONG",
            "timeframe": "60",
            "entry": 42000,
            "stopLoss": 41400,
            "target1": 42600,
            "target2": 43200,
            "risk": 600,
            "riskPercent": "1.43",
            "trailingDistance": 300,
            "adx": 31,
            "remi": 0.8
        }));

        let expected = format!(
            "✅ 🟢 <b>LONG BTCUSDT</b>\n\
             {d}\n\
             ✅ <b>CONFIRMADO POR ROMPIMENTO</b>\n\
             📊 Setup: DNP\n\
             ⏱ Timeframe: 60\n\
             {d}\n\
             ⚠️ <b>CAUTELA RECOMENDADA</b> ⚠️\n\
             📊 N/A sem tendência definida\n\
             {d}\n\
             ⚠️ Fractal superior neutro - Risco elevado\n\
             {d}\n\
             🎯 <b>ENTRADA</b>\n\
             💰 Preço: $42000\n\
             🛑 Stop Loss: $41400\n\
             📊 Risco: 1.43% ($600)\n\
             {d}\n\
             🎯 <b>ALVOS (Risco:Retorno)</b>\n\
             ✅ TP1: $42600 (1:1)\n\
             ✅ TP2: $43200 (1:2)\n\
             {d}\n\
             ⚙️ <b>GESTÃO DO TRADE</b>\n\
             📈 <b>Ao atingir TP1:</b>\n   \
             • Realizar 50% da posição\n   \
             • Subir stop para entrada (breakeven)\n   \
             • Ativar trailing stop\n\
             \n\
             🔄 <b>Trailing Stop:</b>\n   \
             • Distância: $300\n   \
             • Seguir preço até TP2\n\
             {d}\n\
             📊 <b>INDICADORES</b>\n\
             📈 ADX: 31 | REMI: 0.8\n\
             ⚖️ Alavancagem sugerida: 5-10x\n\
             {d}\n\
             ⚠️ <i>Não é recomendação de investimento</i>\n",
            d = DIVIDER
        );
        assert_eq!(message, expected);
    }

    #[test]
    fn test_defaults() {
        let alert = normalize(json!({}));
        assert_eq!(alert.direction, Direction::Long);
        assert_eq!(alert.htf_trend, "NEUTRO");
        assert_eq!(alert.price, "N/A");
        assert_eq!(alert.leverage, "N/A");
        assert_eq!(alert.asset_class, "BTC");
    }

    #[test]
    fn test_price_falls_back_to_entry() {
        assert_eq!(normalize(json!({"entry": 99.5})).price, "99.5");
        assert_eq!(normalize(json!({"price": 1, "entry": 2})).price, "1");
    }

    #[test]
    fn test_trigger_falls_back_to_price() {
        let alert = normalize(json!({"action": "TRIGGER", "price": 10}));
        assert_eq!(alert.trigger, "10");
        let alert = normalize(json!({"action": "TRIGGER", "price": 10, "triggerHigh": 11}));
        assert_eq!(alert.trigger, "11");
    }

    #[test]
    fn test_leverage_ladder() {
        assert_eq!(normalize(json!({"riskPercent": 2})).leverage, "5-10x");
        assert_eq!(normalize(json!({"riskPercent": "3.5"})).leverage, "3-5x");
        assert_eq!(normalize(json!({"riskPercent": 4.01})).leverage, "2-3x");
        assert_eq!(normalize(json!({"riskPercent": "high"})).leverage, "N/A");
    }

    #[test]
    fn test_long_variant_is_not_green() {
        let message = format(json!({"direction": "LONG_REENTRY"}));
        assert!(message.starts_with("✅ 🔴 <b>LONG_REENTRY N/A</b>\n"));
    }

    #[test]
    fn test_asset_class() {
        assert_eq!(asset_class("ETHUSDT"), "USDT");
        assert_eq!(asset_class("ETHBTC"), "BTC");
    }
}
