//! alertfmt - trading alert formatter
//!
//! A command-line tool that turns TradingView webhook alerts into chat
//! messages.

use alertfmt::cli::args::{generate_completions, Cli, Commands};
use alertfmt::commands::{run_families, run_render};
use alertfmt::config::{Config, ConfigBuilder};
use alertfmt::error::{AppError, ConfigError, InputError};
use clap::Parser;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    let family = match &cli.command {
        Commands::Render(args) => args.family.map(|f| f.to_family()),
        _ => None,
    };

    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_strict(cli.strict.then_some(true))
        .with_family(family)
        .build();

    if config.general.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    Ok(config)
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Render(args) => run_render(args, &load_config(cli)?, cli.format),

        Commands::Families => run_families(&load_config(cli)?, cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(ConfigError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Check the --config path or the ALERTFMT_CONFIG variable.");
        }
        AppError::Config(ConfigError::InvalidValue { .. }) => {
            eprintln!();
            eprintln!("Hint: Ladder tiers need non-empty labels and ascending max_risk.");
        }
        AppError::Input(InputError::Empty) => {
            eprintln!();
            eprintln!("Hint: Pipe an alert into stdin or pass a file path.");
            eprintln!("      Example: alertfmt render alert.json");
        }
        AppError::IncompleteAlert { .. } => {
            eprintln!();
            eprintln!("Hint: Drop --strict to format the alert with default values.");
        }
        _ => {}
    }
}
