//! Rejection zones and confluence strength

use serde::{Deserialize, Serialize};
use std::fmt;

const ZONE_SEPARATOR: &str = " + ";

/// Zone a candle was rejected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionZone {
    /// Higher timeframe support/resistance (`SR`)
    SupportResistance,
    /// Fibonacci golden zone (`Fibo`)
    Fibonacci,
    /// Moving average cluster (`EMA`)
    Ema,
}

impl RejectionZone {
    /// Parse a zone tag
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "SR" => Some(Self::SupportResistance),
            "Fibo" => Some(Self::Fibonacci),
            "EMA" => Some(Self::Ema),
            _ => None,
        }
    }
}

/// Set of zones parsed from a comma-separated tag list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneSet {
    pub support_resistance: bool,
    pub fibonacci: bool,
    pub ema: bool,
}

impl ZoneSet {
    /// Parse `"SR,Fibo,EMA"`-style tag lists; unknown tags are ignored
    pub fn parse(tags: &str) -> Self {
        let mut set = Self::default();
        for zone in tags.split(',').filter_map(RejectionZone::parse) {
            match zone {
                RejectionZone::SupportResistance => set.support_resistance = true,
                RejectionZone::Fibonacci => set.fibonacci = true,
                RejectionZone::Ema => set.ema = true,
            }
        }
        set
    }
}

/// Suffix marking how many moving averages rejected price
fn ema_intensity(count: u32) -> Option<&'static str> {
    match count {
        0 => None,
        1 => Some(""),
        2 => Some(" 🟡"),
        _ => Some(" 🔴"),
    }
}

/// Describe the rejection zones, e.g. `Suporte HTF + Golden Zone + EMA 89,144 🟡`
///
/// The EMA clause is left out when no moving average was counted.
pub fn describe_zones(tags: &str, emas_rejected: &str, emas_count: u32) -> String {
    let zones = ZoneSet::parse(tags);
    let mut text = String::new();

    if zones.support_resistance {
        text.push_str("Suporte HTF");
        text.push_str(ZONE_SEPARATOR);
    }
    if zones.fibonacci {
        text.push_str("Golden Zone");
        text.push_str(ZONE_SEPARATOR);
    }
    if zones.ema {
        if let Some(suffix) = ema_intensity(emas_count) {
            text.push_str(&format!("EMA {}{}", emas_rejected, suffix));
        }
    }

    match text.strip_suffix(ZONE_SEPARATOR) {
        Some(trimmed) => trimmed.to_string(),
        None => text,
    }
}

/// Extra lines highlighting a multi-EMA barrier
pub fn ema_barrier(emas_count: u32) -> Option<String> {
    match emas_count {
        0 | 1 => None,
        2 => Some("💪 BARREIRA EMA DUPLA".to_string()),
        _ => Some("💪 BARREIRA EMA TRIPLA\n🚀 Probabilidade MUITO ALTA".to_string()),
    }
}

/// Strength of agreeing validators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confluence {
    #[default]
    Simples,
    Dupla,
    Tripla,
}

impl Confluence {
    /// Parse a confluence tag such as `Dupla ⭐` or `Tripla 🌟🌟`
    pub fn parse(tag: &str) -> Self {
        let word = tag.split_whitespace().next().unwrap_or_default().to_uppercase();
        match word.as_str() {
            "DUPLA" => Self::Dupla,
            "TRIPLA" => Self::Tripla,
            _ => Self::Simples,
        }
    }

    /// Strength from a validator count
    pub fn from_count(count: usize) -> Self {
        match count {
            0 | 1 => Self::Simples,
            2 => Self::Dupla,
            _ => Self::Tripla,
        }
    }

    /// Fixed label line with matching emoji count
    pub fn label(&self) -> &'static str {
        match self {
            Self::Simples => "⭐ Confluência SIMPLES",
            Self::Dupla => "⭐⭐ Confluência DUPLA",
            Self::Tripla => "🌟🌟 Confluência TRIPLA",
        }
    }
}

impl fmt::Display for Confluence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simples => f.write_str("SIMPLES"),
            Self::Dupla => f.write_str("DUPLA"),
            Self::Tripla => f.write_str("TRIPLA"),
        }
    }
}

/// Header line echoing a raw confluence tag, starred if it has no star
pub fn confluence_header(tag: &str) -> String {
    if tag.contains('⭐') {
        tag.to_string()
    } else {
        format!("⭐ {}", tag)
    }
}

/// Describe a `+`-joined validator list (e.g. `SR+RSI+FIB`)
///
/// Returns `None` for an empty list.
pub fn describe_validation(validation: &str) -> Option<String> {
    if validation.is_empty() {
        return None;
    }

    let count = validation.matches('+').count() + 1;
    let text = match Confluence::from_count(count) {
        Confluence::Tripla => format!("🌟🌟 Confluência TRIPLA ({})", validation),
        Confluence::Dupla => format!("⭐ Confluência DUPLA ({})", validation),
        Confluence::Simples => format!("• Validação: {}", validation),
    };
    Some(text)
}
