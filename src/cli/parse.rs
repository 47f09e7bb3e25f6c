//! CLI parse: clap types for fitplan. No behavior; definitions only.

use crate::profile::{Gender, MAX_AGE, MAX_WEIGHT_KG, MIN_AGE, MIN_WEIGHT_KG};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// fitplan - personalized workout plans from a short fitness profile
#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Get a personalized workout plan crafted by AI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a workout plan for a fitness profile
    Generate {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the messages that would be sent, without calling the service
    Prompt {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Show provider settings and whether the API key is set
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Profile form fields. Any field left out is prompted for on a terminal.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Gender (M or F)
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Age in years
    #[arg(long, value_parser = clap::value_parser!(u32).range(MIN_AGE as i64..=MAX_AGE as i64))]
    pub age: Option<u32>,

    /// Weight in kilograms
    #[arg(long, value_parser = parse_weight)]
    pub weight: Option<f64>,

    /// Fitness goal, e.g. "weight loss", "muscle gain", "general fitness"
    #[arg(long)]
    pub goal: Option<String>,

    /// Never prompt; missing fields leave the form incomplete
    #[arg(long)]
    pub no_input: bool,
}

fn parse_weight(value: &str) -> Result<f64, String> {
    let weight: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight) {
        return Err(format!(
            "{} is not in {:.1}..={:.1}",
            weight, MIN_WEIGHT_KG, MAX_WEIGHT_KG
        ));
    }
    Ok(weight)
}
