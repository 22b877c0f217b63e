//! Render command implementation
//!
//! Reads webhook payloads and prints the formatted alerts.

use crate::cli::args::{OutputFormat, RenderArgs};
use crate::cli::output::{print_output, AlertBatch};
use crate::config::Config;
use crate::error::{InputError, Result};
use crate::services::AlertPipeline;
use serde_json::Value;
use std::io::Read;

/// Execute the render command
pub fn run_render(args: &RenderArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let text = read_input(&args.input)?;
    let raw = parse_input(&text)?;

    let pipeline = AlertPipeline::from_config(config)?;
    let mut alerts = pipeline.process(&raw)?;

    if !raw.is_array() && alerts.len() == 1 {
        if let Some(alert) = alerts.pop() {
            return print_output(&alert, format);
        }
    }

    print_output(&AlertBatch { alerts }, format)
}

/// Read the raw input from a file or standard input (`-`)
pub fn read_input(path: &str) -> std::result::Result<String, InputError> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(InputError::Stdin)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|source| InputError::ReadFile {
        path: path.to_string(),
        source,
    })
}

/// Parse input text as JSON; anything else is taken as a raw string body
pub fn parse_input(text: &str) -> std::result::Result<Value, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(e) => {
            log::debug!("Input is not JSON ({}), treating it as a string body", e);
            Ok(Value::String(trimmed.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_input_json() {
        let value = parse_input(" {\"symbol\": \"BTCUSDT\"}\n").unwrap();
        assert_eq!(value["symbol"], "BTCUSDT");
    }

    #[test]
    fn test_parse_input_non_json_is_string() {
        let value = parse_input("not json").unwrap();
        assert_eq!(value, Value::String("not json".to_string()));
    }

    #[test]
    fn test_parse_input_empty() {
        assert!(matches!(parse_input("  \n"), Err(InputError::Empty)));
    }

    #[test]
    fn test_read_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"eventType\": \"BREAK\"}}").unwrap();

        let text = read_input(file.path().to_str().unwrap()).unwrap();
        assert!(text.contains("BREAK"));
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input("/nonexistent/alert.json");
        assert!(matches!(result, Err(InputError::ReadFile { .. })));
    }
}
