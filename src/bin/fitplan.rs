//! Fitplan CLI Binary
//!
//! Command-line front end: collects a fitness profile and prints the generated workout plan.

use clap::Parser;
use fitplan::cli::{
    format_error_line, format_incomplete_warning, map_error, Cli, Outcome, RunContext,
    EXIT_FAILURE, EXIT_INCOMPLETE,
};
use fitplan::config::{user_config_path, ConfigLoader};
use fitplan::logging::{init_logging, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::info;

fn main() {
    let cli = Cli::parse();
    let stderr_color = !cli.no_color && std::io::stderr().is_terminal();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_line(&map_error(&e), stderr_color));
            process::exit(EXIT_FAILURE);
        }
    };

    // Build logging config from CLI args and the loaded config
    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(e) = logging_config.validate() {
        eprintln!("{}", format_error_line(&format!("Logging error: {}", e), stderr_color));
        process::exit(EXIT_FAILURE);
    }

    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(EXIT_FAILURE);
    }

    info!("Fitplan CLI starting");

    let config_file = cli
        .config
        .clone()
        .or_else(|| user_config_path().filter(|p| p.exists()));
    let context = RunContext::new(config, config_file)
        .with_color(!cli.no_color && std::io::stdout().is_terminal());

    match context.execute(&cli.command) {
        Ok(Outcome::Output(output)) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Ok(Outcome::Incomplete { missing }) => {
            info!(missing = ?missing, "Form submitted with missing fields");
            eprintln!("{}", format_incomplete_warning(&missing, stderr_color));
            process::exit(EXIT_INCOMPLETE);
        }
        Err(e) => {
            info!(error = %e, "Command failed");
            eprintln!("{}", format_error_line(&map_error(&e), stderr_color));
            process::exit(EXIT_FAILURE);
        }
    }
}

/// Build logging configuration from CLI args on top of the config file values.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if cli.quiet {
        config.level = "off".to_string();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }
    if cli.no_color {
        config.color = false;
    }

    config
}
