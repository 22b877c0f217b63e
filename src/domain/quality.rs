//! Setup quality domain types
//!
//! Multi-timeframe trend alignment tags and the fishing sub-tag used by
//! counter-trend setups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Multi-timeframe setup quality
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum SetupQuality {
    /// Higher timeframe trend agrees with the trade
    Premium,
    /// Higher timeframe has no defined trend
    #[default]
    Cautela,
    /// Trade goes against the higher timeframe trend
    Contra,
    /// Not enough higher timeframe history to validate
    SemValidacaoMtf,
    /// Any other tag, kept verbatim
    Unrecognized(String),
}

impl SetupQuality {
    /// Parse a quality tag
    pub fn parse(tag: &str) -> Self {
        match tag {
            "PREMIUM" => Self::Premium,
            "CAUTELA" => Self::Cautela,
            "CONTRA" => Self::Contra,
            "SEM_VALIDACAO_MTF" => Self::SemValidacaoMtf,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Tag as sent by the producer
    pub fn as_str(&self) -> &str {
        match self {
            Self::Premium => "PREMIUM",
            Self::Cautela => "CAUTELA",
            Self::Contra => "CONTRA",
            Self::SemValidacaoMtf => "SEM_VALIDACAO_MTF",
            Self::Unrecognized(tag) => tag,
        }
    }

    #[inline]
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Premium)
    }

    #[inline]
    pub fn is_contra(&self) -> bool {
        matches!(self, Self::Contra)
    }
}

impl fmt::Display for SetupQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SetupQuality {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<SetupQuality> for String {
    fn from(quality: SetupQuality) -> Self {
        quality.as_str().to_string()
    }
}

/// Counter-trend fishing sub-tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum FishingType {
    /// Fishing for a reversal at the bottom
    Bottom,
    /// Fishing for a reversal at the top
    Top,
    /// Plain counter-trend
    #[default]
    None,
}

impl FishingType {
    /// Parse a fishing tag; unknown tags mean no fishing
    pub fn parse(tag: &str) -> Self {
        match tag {
            "BOTTOM" => Self::Bottom,
            "TOP" => Self::Top,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bottom => "BOTTOM",
            Self::Top => "TOP",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for FishingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
