//! Domain models for alertfmt
//!
//! Categorical alert fields as closed enums, plus helpers for the loosely
//! typed values found in webhook payloads.

pub mod family;
pub mod pivot;
pub mod quality;
pub mod signal;
pub mod value;

pub use family::AlertFamily;
pub use pivot::{timeframe_label, EventType, PivotKey, PivotSide, PivotType};
pub use quality::{FishingType, SetupQuality};
pub use signal::{AlertAction, Direction};
