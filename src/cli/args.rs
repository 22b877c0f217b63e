//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::domain::AlertFamily;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Trading alert formatter
///
/// Turn TradingView webhook alerts into chat messages.
#[derive(Parser, Debug)]
#[command(name = "alertfmt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ALERTFMT_CONFIG")]
    pub config: Option<String>,

    /// Fail when an alert needed default values
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format one alert or a JSON array of alerts
    Render(RenderArgs),

    /// List supported alert families
    Families,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Alert family, detected from the payload when omitted
    #[arg(short, long, value_enum)]
    pub family: Option<FamilyArg>,

    /// Input file, `-` for standard input
    #[arg(default_value = "-")]
    pub input: String,
}

/// Family argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyArg {
    /// Detect from the payload
    Auto,
    Trs,
    Dnp,
    Sts,
    /// USDT dominance pivot monitor
    #[value(aliases = ["usdt-d", "usdtd"])]
    Dominance,
}

impl FamilyArg {
    /// Concrete family, `None` for auto-detection
    pub fn to_family(self) -> Option<AlertFamily> {
        match self {
            Self::Auto => None,
            Self::Trs => Some(AlertFamily::Trs),
            Self::Dnp => Some(AlertFamily::Dnp),
            Self::Sts => Some(AlertFamily::Sts),
            Self::Dominance => Some(AlertFamily::Dominance),
        }
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Chat message text
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
