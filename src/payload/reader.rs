//! Defaulting field reader
//!
//! Every read takes a fallback, so formatters never see a missing value.
//! Reads that fall back are recorded, which lets callers tell a fully
//! populated alert from one that leaned on defaults.

use crate::domain::value::{display_value, is_present, parse_number};
use serde_json::{Map, Value};

/// A normalized alert record plus the fields that were defaulted
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    pub alert: T,
    pub defaulted: Vec<String>,
}

impl<T> Normalized<T> {
    /// Check if every field came from the payload
    pub fn is_complete(&self) -> bool {
        self.defaulted.is_empty()
    }
}

/// Reads payload fields with fallbacks
///
/// Paths are dot-separated for nested objects (`pivotInfo.level`).
pub struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    defaulted: Vec<String>,
}

impl<'a> FieldReader<'a> {
    /// Create a reader over decoded payload fields
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields,
            defaulted: Vec::new(),
        }
    }

    /// Look up a present value without recording anything
    pub fn lookup(&self, path: &str) -> Option<&'a Value> {
        let mut parts = path.split('.');
        let mut current = self.fields.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        is_present(current).then_some(current)
    }

    /// First present value among several paths, without recording
    pub fn lookup_any(&self, paths: &[&str]) -> Option<&'a Value> {
        paths.iter().find_map(|p| self.lookup(p))
    }

    /// Read a field as display text
    pub fn text(&mut self, path: &str, default: &str) -> String {
        match self.lookup(path) {
            Some(value) => display_value(value),
            None => {
                self.note_default(path);
                default.to_string()
            }
        }
    }

    /// Read the first present field among several as display text
    ///
    /// A fallback is recorded under the paths joined with `/`.
    pub fn text_any(&mut self, paths: &[&str], default: &str) -> String {
        match self.lookup_any(paths) {
            Some(value) => display_value(value),
            None => {
                self.note_default(&paths.join("/"));
                default.to_string()
            }
        }
    }

    /// Read an optional descriptor; absence is normal and not recorded
    pub fn optional_text(&self, path: &str) -> Option<String> {
        self.lookup(path).map(display_value)
    }

    /// Read a field as a number
    ///
    /// Present but unparseable values also fall back.
    pub fn number(&mut self, path: &str, default: f64) -> f64 {
        match self.lookup(path).and_then(parse_number) {
            Some(n) => n,
            None => {
                self.note_default(path);
                default
            }
        }
    }

    /// Read a field as a number, `None` when absent or unparseable
    pub fn optional_number(&mut self, path: &str) -> Option<f64> {
        let number = self.lookup(path).and_then(parse_number);
        if number.is_none() {
            self.note_default(path);
        }
        number
    }

    /// Record that a field was filled with a default
    pub fn note_default(&mut self, path: &str) {
        log::debug!("Field '{}' missing, using default", path);
        self.defaulted.push(path.to_string());
    }

    /// Finish reading and wrap the record
    pub fn finish<T>(self, alert: T) -> Normalized<T> {
        Normalized {
            alert,
            defaulted: self.defaulted,
        }
    }
}
