//! Alert classification
//!
//! Pure lookups from normalized alert fields to the text blocks and derived
//! values the formatters assemble: quality banners, leverage, rejection zones
//! and pivot scenarios.

pub mod leverage;
pub mod pivot;
pub mod quality;
pub mod zones;

pub use leverage::{LeverageLadder, LeverageRule, LeverageTier, RiskPercent};
pub use pivot::{scenario, PivotScenario};
pub use quality::{quality_block, QualityStyle, TrendContext};
pub use zones::{
    confluence_header, describe_validation, describe_zones, ema_barrier, Confluence,
    RejectionZone, ZoneSet,
};
