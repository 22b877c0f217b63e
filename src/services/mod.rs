//! Service layer
//!
//! Services encapsulate the alert processing flow on top of the formatters.

pub mod pipeline;

pub use pipeline::AlertPipeline;
