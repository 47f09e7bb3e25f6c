//! CLI output: error mapping from domain errors to one line of user-facing text, and exit codes.

use crate::error::{AppError, GenerationError};

/// Exit code for configuration, service and host failures
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for a form submitted with missing fields
pub const EXIT_INCOMPLETE: i32 = 2;

/// Map an error to the single line shown to the user.
///
/// Configuration problems and service failures get distinct framing.
pub fn map_error(e: &AppError) -> String {
    let text = match e {
        AppError::Generation(GenerationError::Configuration(msg)) => {
            format!("Configuration error: {}", msg)
        }
        AppError::Generation(GenerationError::Service(err)) => {
            format!("An unexpected error occurred: {}", err)
        }
        other => other.to_string(),
    };
    single_line(&text)
}

fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
