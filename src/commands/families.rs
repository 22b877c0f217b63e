//! Families command implementation
//!
//! Lists the supported alert families and their leverage rules.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, FamilyList};
use crate::config::Config;
use crate::error::Result;

/// Execute the families command
pub fn run_families(config: &Config, format: OutputFormat) -> Result<()> {
    let formatters = config.formatters()?;
    print_output(&FamilyList::new(&formatters), format)
}
