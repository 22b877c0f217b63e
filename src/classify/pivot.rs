//! Pivot scenario table
//!
//! Each of the eight (event, pivot type, side) combinations has a fixed
//! emoji, title, subtitle, body and implication. Bodies are templates with
//! `{level}`, `{tf}` and `{length}` placeholders.

use crate::domain::{EventType, PivotKey, PivotSide, PivotType};

/// Fixed texts of one pivot scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotScenario {
    pub emoji: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    body: &'static str,
    pub implication: &'static str,
}

impl PivotScenario {
    /// Fill the body template
    pub fn describe(&self, level: &str, timeframe: &str, pivot_length: &str) -> String {
        self.body
            .replace("{level}", level)
            .replace("{tf}", timeframe)
            .replace("{length}", pivot_length)
    }
}

const TOUCH_REGULAR_HIGH: PivotScenario = PivotScenario {
    emoji: "🟡",
    title: "RESISTÊNCIA DETECTADA",
    subtitle: "📊 POSSÍVEL FUNDO NAS CRIPTOS",
    body: "📈 USDT.D tocou resistência ativa\n\
           Nível: {level}% | Timeframe: {tf}\n\
           Pivot confirmado (Length {length})\n\
           🔄 Pode respeitar e cair (USDT)\n\
           💚 Criptos podem fazer fundo e subir",
    implication: "👀 Atenção: Aguardar confirmação de rejeição",
};

const TOUCH_REGULAR_LOW: PivotScenario = PivotScenario {
    emoji: "🟠",
    title: "SUPORTE DETECTADO",
    subtitle: "📊 POSSÍVEL TOPO NAS CRIPTOS",
    body: "📉 USDT.D tocou suporte ativo\n\
           Nível: {level}% | Timeframe: {tf}\n\
           Pivot confirmado (Length {length})\n\
           🔄 Pode respeitar e subir (USDT)\n\
           🔴 Criptos podem fazer topo e cair",
    implication: "⚠️ Cautela: Aguardar confirmação de rejeição",
};

const TOUCH_MISSED_HIGH: PivotScenario = PivotScenario {
    emoji: "🔄⚠️",
    title: "RETESTE CONFIRMADO!",
    subtitle: "🛑 RESISTÊNCIA VALIDADA PÓS-ROMPIMENTO",
    body: "📉 USDT.D retestou nível rompido\n\
           Nível: {level}% | Timeframe: {tf}\n\
           🔓 Ex-suporte agora é resistência\n\
           ✅ Confirmação de inversão de papel\n\
           📊 Topo descendente confirmado\n\
           📉 Continuação de queda no USDT\n\
           🚀 CONTINUAÇÃO DE ALTA NAS CRIPTOS",
    implication: "💡 Oportunidade: Reteste confirma tendência de alta nas criptos",
};

const TOUCH_MISSED_LOW: PivotScenario = PivotScenario {
    emoji: "🔄🔴",
    title: "RETESTE CONFIRMADO!",
    subtitle: "💪 SUPORTE VALIDADO PÓS-ROMPIMENTO",
    body: "📈 USDT.D retestou nível rompido\n\
           Nível: {level}% | Timeframe: {tf}\n\
           🔓 Ex-resistência agora é suporte\n\
           ✅ Confirmação de inversão de papel\n\
           📊 Fundo ascendente confirmado\n\
           📈 Continuação de alta no USDT\n\
           📉 CONTINUAÇÃO DE QUEDA NAS CRIPTOS",
    implication: "⚠️ Cautela: Reteste confirma tendência de queda nas criptos",
};

const BREAK_REGULAR_HIGH: PivotScenario = PivotScenario {
    emoji: "⚠️🔴",
    title: "RESISTÊNCIA ROMPIDA!",
    subtitle: "🚨 ALERTA DE PANIC SELL NAS CRIPTOS!",
    body: "📈 USDT.D rompeu resistência {level}%\n\
           Timeframe: {tf} | Pivot confirmado\n\
           💸 Dinheiro entrando em stablecoins\n\
           📉 Possível correção forte nas criptos",
    implication: "⚠️ Cautela: Risco de queda acentuada",
};

const BREAK_REGULAR_LOW: PivotScenario = PivotScenario {
    emoji: "🔥🚀",
    title: "SUPORTE ROMPIDO!",
    subtitle: "⚡ FRENESI DE ALTA NAS CRIPTOS!",
    body: "📉 USDT.D rompeu suporte {level}%\n\
           Timeframe: {tf} | Pivot confirmado\n\
           💰 Dinheiro saindo de stablecoins\n\
           🚀 Possível rally altista nas criptos",
    implication: "💡 Oportunidade: Momentum de alta confirmado",
};

const BREAK_MISSED_HIGH: PivotScenario = PivotScenario {
    emoji: "🔄⚠️",
    title: "ESTRUTURA ROMPIDA!",
    subtitle: "⚡ QUEBRA DE TOPOS DESCENDENTES",
    body: "📈 USDT.D rompeu resistência {level}%\n\
           Timeframe: {tf} | Nível invertido\n\
           🔓 Ex-suporte agora rompido\n\
           ⚠️ USDT pode estar revertendo para alta\n\
           📉 Possível fim da tendência de queda no USDT",
    implication: "⚠️ Cautela: Possível reversão - Risco para criptos",
};

const BREAK_MISSED_LOW: PivotScenario = PivotScenario {
    emoji: "🔄🚀",
    title: "ESTRUTURA ROMPIDA!",
    subtitle: "⚡ QUEBRA DE FUNDOS ASCENDENTES",
    body: "📉 USDT.D rompeu suporte {level}%\n\
           Timeframe: {tf} | Nível invertido\n\
           🔓 Ex-resistência agora rompida\n\
           💡 USDT pode estar revertendo para baixa\n\
           🚀 Possível fim da tendência de alta no USDT",
    implication: "💡 Oportunidade: Possível reversão - Alta nas criptos",
};

/// Look up the scenario for a classified pivot event
pub fn scenario(key: PivotKey) -> &'static PivotScenario {
    use EventType::*;
    use PivotSide::*;
    use PivotType::*;

    match (key.event, key.pivot, key.side) {
        (Touch, Regular, High) => &TOUCH_REGULAR_HIGH,
        (Touch, Regular, Low) => &TOUCH_REGULAR_LOW,
        (Touch, Missed, High) => &TOUCH_MISSED_HIGH,
        (Touch, Missed, Low) => &TOUCH_MISSED_LOW,
        (Break, Regular, High) => &BREAK_REGULAR_HIGH,
        (Break, Regular, Low) => &BREAK_REGULAR_LOW,
        (Break, Missed, High) => &BREAK_MISSED_HIGH,
        (Break, Missed, Low) => &BREAK_MISSED_LOW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_regular_low() {
        let key = PivotKey::classify("BREAK", "REGULAR", "LOW").unwrap();
        let s = scenario(key);
        assert_eq!(s.emoji, "🔥🚀");
        assert_eq!(s.title, "SUPORTE ROMPIDO!");
        assert_eq!(
            s.describe("12.3456", "H4", "50"),
            "📉 USDT.D rompeu suporte 12.3456%\nTimeframe: H4 | Pivot confirmado\n💰 Dinheiro saindo de stablecoins\n🚀 Possível rally altista nas criptos"
        );
    }

    #[test]
    fn test_touch_regular_high_uses_length() {
        let s = scenario(PivotKey::classify("TOUCH", "REGULAR", "HIGH").unwrap());
        let body = s.describe("5.1000", "D1", "21");
        assert!(body.contains("Nível: 5.1000% | Timeframe: D1\n"));
        assert!(body.contains("Pivot confirmado (Length 21)"));
    }

    #[test]
    fn test_break_missed_pair_is_handled() {
        let high = scenario(PivotKey::classify("BREAK", "MISSED", "HIGH").unwrap());
        let low = scenario(PivotKey::classify("BREAK", "MISSED", "LOW").unwrap());
        assert_eq!(high.title, "ESTRUTURA ROMPIDA!");
        assert_eq!(low.subtitle, "⚡ QUEBRA DE FUNDOS ASCENDENTES");
    }

    #[test]
    fn test_every_combination_has_texts() {
        for key in PivotKey::all() {
            let s = scenario(key);
            assert!(!s.emoji.is_empty(), "{}", key);
            assert!(!s.title.is_empty(), "{}", key);
            assert!(!s.subtitle.is_empty(), "{}", key);
            assert!(!s.implication.is_empty(), "{}", key);
            let body = s.describe("1.0000", "H1", "50");
            assert!(body.contains("1.0000%"), "{}", key);
            assert!(!body.contains('{'), "{}", key);
        }
    }
}
