//! Signal domain types
//!
//! Alert action (trigger armed vs. confirmed) and trade direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a trading alert
///
/// Anything other than `TRIGGER` is handled as a confirmation, which is also
/// the default when the field is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertAction {
    /// Trigger level armed, waiting for the breakout
    Trigger,
    /// Breakout confirmed, entry/stop/targets known
    #[default]
    Confirmed,
}

impl AlertAction {
    /// Parse an action tag
    pub fn parse(tag: &str) -> Self {
        if tag == "TRIGGER" {
            Self::Trigger
        } else {
            Self::Confirmed
        }
    }

    /// Check if this is a trigger alert
    #[inline]
    pub fn is_trigger(&self) -> bool {
        matches!(self, Self::Trigger)
    }

    /// Tag as sent by the producer
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trigger => "TRIGGER",
            Self::Confirmed => "CONFIRMED",
        }
    }

    /// Header emoji for this stage
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Trigger => "🔔",
            Self::Confirmed => "✅",
        }
    }

    /// Status banner text for this stage
    pub fn banner(&self) -> &'static str {
        match self {
            Self::Trigger => "GATILHO ARMADO",
            Self::Confirmed => "CONFIRMADO POR ROMPIMENTO",
        }
    }
}

impl fmt::Display for AlertAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trade direction
///
/// Unknown tags are kept verbatim so they can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    Long,
    Short,
    Other(String),
}

impl Direction {
    /// Parse a direction tag
    pub fn parse(tag: &str) -> Self {
        match tag {
            "LONG" => Self::Long,
            "SHORT" => Self::Short,
            other => Self::Other(other.to_string()),
        }
    }

    /// Exactly `LONG`
    #[inline]
    pub fn is_long(&self) -> bool {
        matches!(self, Self::Long)
    }

    /// `LONG` or any tag containing it (e.g. `LONG_REENTRY`)
    pub fn mentions_long(&self) -> bool {
        match self {
            Self::Long => true,
            Self::Short => false,
            Self::Other(tag) => tag.contains("LONG"),
        }
    }

    /// Colored dot for a direction decided by the caller
    pub fn emoji_for(long: bool) -> &'static str {
        if long {
            "🟢"
        } else {
            "🔴"
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => f.write_str("LONG"),
            Self::Short => f.write_str("SHORT"),
            Self::Other(tag) => f.write_str(tag),
        }
    }
}

impl From<String> for Direction {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.to_string()
    }
}
