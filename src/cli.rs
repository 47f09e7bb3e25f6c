//! CLI domain: parse, form, route, help, output, and presentation.
//! The form and the presentation stand in for the user-facing surface; all generation goes
//! through `PlanGenerator`.

mod form;
mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use form::{collect_profile, input_from_args};
pub use help::command_name;
pub use output::{map_error, EXIT_FAILURE, EXIT_INCOMPLETE};
pub use parse::{Cli, Commands, ProfileArgs};
pub use presentation::{
    format_config_toml, format_error_line, format_incomplete_warning, format_plan_json,
    format_plan_text, format_prompt_preview, format_status_json, format_status_text,
    StatusReport, INCOMPLETE_FORM_WARNING, PLAN_READY,
};
pub use route::{Outcome, RunContext};
