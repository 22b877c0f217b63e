//! Unified error types for alertfmt
//!
//! Formatting itself never fails: missing fields are defaulted and unknown
//! tags render empty blocks. The errors below cover everything around the
//! formatters (configuration, input, strict mode, output).
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain value parsing
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Error reading the alert input
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Strict mode: the alert relied on defaults for some fields
    #[error("Incomplete {family} alert, defaulted fields: {}", .fields.join(", "))]
    IncompleteAlert { family: String, fields: Vec<String> },

    /// JSON serialization error (output)
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from domain value parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Alert family name not recognized
    #[error("Unknown alert family: '{0}' (expected trs, dnp, sts or dominance)")]
    UnknownFamily(String),

    /// Invalid value provided
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Errors from reading alert input
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file could not be read
    #[error("Cannot read input file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("Cannot read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// Input contained nothing but whitespace
    #[error("Input is empty")]
    Empty,
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
