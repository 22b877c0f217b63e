//! alertfmt - trading alert formatting library
//!
//! Turns loosely-typed TradingView webhook payloads into emoji-rich chat
//! messages for four alert families (TRS, DNP, STS and the USDT dominance
//! monitor).
//!
//! # Modules
//!
//! - [`classify`]: Quality, leverage, zone and pivot lookups
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models
//! - [`error`]: Error types
//! - [`formatters`]: Per-family normalization and rendering
//! - [`payload`]: Webhook payload decoding and field defaulting
//! - [`render`]: Message building primitives
//! - [`services`]: Alert dispatch pipeline

pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod formatters;
pub mod payload;
pub mod render;
pub mod services;

pub use domain::AlertFamily;
pub use error::{AppError, Result};
pub use formatters::{format_alert, AlertFormatter, FormattedAlert};
pub use services::AlertPipeline;
