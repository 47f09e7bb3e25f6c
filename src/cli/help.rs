//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "generate", "status").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Prompt { .. } => "prompt",
        Commands::Status { .. } => "status",
        Commands::Config => "config",
    }
}
