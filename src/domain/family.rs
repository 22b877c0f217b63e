//! Alert family identification

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Family of trading alerts, one formatter each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertFamily {
    /// TRS breakout setup
    Trs,
    /// DNP setup with ADX/REMI readings
    Dnp,
    /// Stormer trap setup with rejection zones
    Sts,
    /// USDT dominance pivot monitor
    #[serde(alias = "usdt-d", alias = "usdtd")]
    Dominance,
}

impl AlertFamily {
    /// Every supported family
    pub const ALL: [AlertFamily; 4] = [Self::Trs, Self::Dnp, Self::Sts, Self::Dominance];

    /// Short name used on the command line and in output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trs => "trs",
            Self::Dnp => "dnp",
            Self::Sts => "sts",
            Self::Dominance => "dominance",
        }
    }

    /// Setup name as printed in the message
    pub fn setup_name(&self) -> &'static str {
        match self {
            Self::Trs => "TRS",
            Self::Dnp => "DNP",
            Self::Sts => "STS by CryptoMind",
            Self::Dominance => "USDT.D Monitor",
        }
    }

    /// Guess the family from a decoded payload
    ///
    /// An explicit `setup` field wins. Otherwise the family-specific fields
    /// decide, and anything unmatched is a TRS alert.
    pub fn detect(fields: &Map<String, Value>) -> Self {
        if let Some(setup) = fields.get("setup").and_then(Value::as_str) {
            if let Ok(family) = setup.parse() {
                return family;
            }
            let upper = setup.to_uppercase();
            if let Some(family) = Self::ALL
                .iter()
                .find(|f| f != &&Self::Dominance && upper.contains(&f.as_str().to_uppercase()))
            {
                return *family;
            }
        }

        let has_any = |keys: &[&str]| keys.iter().any(|k| fields.contains_key(*k));

        if has_any(&["eventType", "pivotInfo"]) {
            Self::Dominance
        } else if has_any(&["status", "rejectionZones", "fishingType", "emasCount", "sl"]) {
            Self::Sts
        } else if has_any(&["adx", "remi", "trailingDistance", "triggerHigh", "triggerLow"]) {
            Self::Dnp
        } else {
            Self::Trs
        }
    }
}

impl fmt::Display for AlertFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trs" => Ok(Self::Trs),
            "dnp" => Ok(Self::Dnp),
            "sts" => Ok(Self::Sts),
            "dominance" | "usdt-d" | "usdtd" | "usdt.d" => Ok(Self::Dominance),
            _ => Err(DomainError::UnknownFamily(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_from_str() {
        assert_eq!("trs".parse::<AlertFamily>().unwrap(), AlertFamily::Trs);
        assert_eq!("DNP".parse::<AlertFamily>().unwrap(), AlertFamily::Dnp);
        assert_eq!(
            "usdt-d".parse::<AlertFamily>().unwrap(),
            AlertFamily::Dominance
        );
        assert!(matches!(
            "abc".parse::<AlertFamily>(),
            Err(DomainError::UnknownFamily(_))
        ));
    }

    #[test]
    fn test_detect_by_setup_field() {
        assert_eq!(
            AlertFamily::detect(&fields(json!({"setup": "DNP v2"}))),
            AlertFamily::Dnp
        );
        assert_eq!(
            AlertFamily::detect(&fields(json!({"setup": "sts", "adx": 30}))),
            AlertFamily::Sts
        );
    }

    #[test]
    fn test_detect_by_fields() {
        assert_eq!(
            AlertFamily::detect(&fields(json!({"eventType": "TOUCH"}))),
            AlertFamily::Dominance
        );
        assert_eq!(
            AlertFamily::detect(&fields(json!({"status": "TRIGGER", "rejectionZones": "SR"}))),
            AlertFamily::Sts
        );
        assert_eq!(
            AlertFamily::detect(&fields(json!({"action": "TRIGGER", "adx": 25}))),
            AlertFamily::Dnp
        );
        assert_eq!(
            AlertFamily::detect(&fields(json!({"action": "CONFIRMED", "validation": "SR+RSI"}))),
            AlertFamily::Trs
        );
        assert_eq!(AlertFamily::detect(&Map::new()), AlertFamily::Trs);
    }

    #[test]
    fn test_serde_aliases() {
        let family: AlertFamily = serde_json::from_str("\"usdt-d\"").unwrap();
        assert_eq!(family, AlertFamily::Dominance);
        assert_eq!(
            serde_json::to_string(&AlertFamily::Sts).unwrap(),
            "\"sts\""
        );
    }
}
