//! semver CLI - Command-line front end for libsemver
//!
//! This is the main entry point for the `semver` binary, providing commands
//! for parsing, validating, comparing, bumping and stripping semantic
//! versions. Failures are reported on stderr and classified through the
//! process exit code.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;
mod report;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::LoggingConfig;
use output::OutputWriter;
use std::io::IsTerminal;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Configuration errors are reported once logging is up
    let config = Config::load_with_file(cli.config.as_deref());

    // Initialize logging
    if let Err(e) = init_logging(&cli, config.as_ref().ok()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = config.and_then(|config| run(cli, config));

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            let use_color = std::io::stderr().is_terminal();
            eprintln!("{}", error::format_error(&e, use_color));
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let use_color = cli.use_color(config.output.color);
    control::set_override(use_color);

    let format = cli.output.unwrap_or(config.output.format);
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        format = ?output.format(),
        "Executing command"
    );

    match cli.command {
        Commands::Parse(args) => handlers::handle_parse(args, &mut output),
        Commands::Validate(args) => handlers::handle_validate(args, &mut output),
        Commands::Compare(args) => handlers::handle_compare(args, &mut output),
        Commands::Bump(args) => handlers::handle_bump(args, &config, &mut output),
        Commands::Strip(args) => handlers::handle_strip(args, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: Option<&Config>) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);

    // Explicit -v wins over the config file
    if verbosity == 0 {
        if let Some(config) = config {
            logging_config.merge_with_file(&config.logging);
        }
    }

    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
