//! Pivot event domain types
//!
//! A dominance-monitor alert is classified along three axes: what happened
//! (touch or break), which kind of pivot (regular or missed reversal) and
//! which side (high or low).

use serde::{Deserialize, Serialize};
use std::fmt;

/// What price did at the pivot level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventType {
    Touch,
    Break,
}

impl EventType {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "TOUCH" => Some(Self::Touch),
            "BREAK" => Some(Self::Break),
            _ => None,
        }
    }
}

/// Kind of pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PivotType {
    /// Active level
    Regular,
    /// Level whose role inverted after being broken
    Missed,
}

impl PivotType {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "REGULAR" => Some(Self::Regular),
            "MISSED" => Some(Self::Missed),
            _ => None,
        }
    }
}

/// Side of the pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PivotSide {
    /// Pivot high (resistance)
    High,
    /// Pivot low (support)
    Low,
}

impl PivotSide {
    /// Parse a side tag; everything except `HIGH` is a low
    pub fn parse(tag: &str) -> Self {
        if tag == "HIGH" {
            Self::High
        } else {
            Self::Low
        }
    }
}

/// Full classification of a pivot event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PivotKey {
    pub event: EventType,
    pub pivot: PivotType,
    pub side: PivotSide,
}

impl PivotKey {
    pub const fn new(event: EventType, pivot: PivotType, side: PivotSide) -> Self {
        Self { event, pivot, side }
    }

    /// Classify raw tags
    ///
    /// Returns `None` when the event or pivot type is not recognized.
    pub fn classify(event: &str, pivot: &str, direction: &str) -> Option<Self> {
        Some(Self::new(
            EventType::parse(event)?,
            PivotType::parse(pivot)?,
            PivotSide::parse(direction),
        ))
    }

    /// All eight combinations
    pub fn all() -> [PivotKey; 8] {
        use EventType::*;
        use PivotSide::*;
        use PivotType::*;
        [
            Self::new(Touch, Regular, High),
            Self::new(Touch, Regular, Low),
            Self::new(Touch, Missed, High),
            Self::new(Touch, Missed, Low),
            Self::new(Break, Regular, High),
            Self::new(Break, Regular, Low),
            Self::new(Break, Missed, High),
            Self::new(Break, Missed, Low),
        ]
    }
}

impl fmt::Display for PivotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}/{:?}", self.event, self.pivot, self.side)
    }
}

/// Chart timeframe codes and their display labels
const TIMEFRAME_LABELS: [(&str, &str); 5] = [
    ("60", "H1"),
    ("240", "H4"),
    ("D", "D1"),
    ("W", "W1"),
    ("M", "M"),
];

/// Translate a chart timeframe code to its display label
///
/// Unknown codes pass through unchanged.
pub fn timeframe_label(code: &str) -> &str {
    TIMEFRAME_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_tags() {
        let key = PivotKey::classify("BREAK", "REGULAR", "LOW").unwrap();
        assert_eq!(
            key,
            PivotKey::new(EventType::Break, PivotType::Regular, PivotSide::Low)
        );
    }

    #[test]
    fn test_classify_direction_defaults_low() {
        let key = PivotKey::classify("TOUCH", "MISSED", "SIDEWAYS").unwrap();
        assert_eq!(key.side, PivotSide::Low);
    }

    #[test]
    fn test_classify_unknown_tags() {
        assert!(PivotKey::classify("CROSS", "REGULAR", "HIGH").is_none());
        assert!(PivotKey::classify("TOUCH", "HIDDEN", "HIGH").is_none());
    }

    #[test]
    fn test_all_combinations_distinct() {
        let all = PivotKey::all();
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_timeframe_label() {
        assert_eq!(timeframe_label("60"), "H1");
        assert_eq!(timeframe_label("240"), "H4");
        assert_eq!(timeframe_label("D"), "D1");
        assert_eq!(timeframe_label("W"), "W1");
        assert_eq!(timeframe_label("M"), "M");
        assert_eq!(timeframe_label("15"), "15");
    }
}
