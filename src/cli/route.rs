//! CLI route: single route table and run context. Dispatches to the form, the plan generator and
//! presentation.

use crate::cli::form::collect_profile;
use crate::cli::help::command_name;
use crate::cli::parse::{Commands, ProfileArgs};
use crate::cli::presentation::{
    format_config_toml, format_plan_json, format_plan_text, format_prompt_preview,
    format_status_json, format_status_text, profile_summary, StatusReport,
};
use crate::config::{Credential, FitplanConfig};
use crate::error::AppError;
use crate::generator::PlanGenerator;
use crate::profile::FitnessProfile;
use crate::prompt::build_messages;
use crate::provider::provider_label;
use std::future::Future;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Result of a command that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Text for stdout
    Output(String),
    /// The form was submitted with missing fields; nothing was generated
    Incomplete { missing: Vec<&'static str> },
}

/// Runtime context for CLI execution: loaded configuration and the credential resolved at startup.
pub struct RunContext {
    config: FitplanConfig,
    config_file: Option<PathBuf>,
    credential: Option<Credential>,
    interactive: bool,
    color: bool,
}

impl RunContext {
    /// Create the run context, reading the credential named by the config from the environment.
    pub fn new(config: FitplanConfig, config_file: Option<PathBuf>) -> Self {
        let credential = Credential::from_env(&config.provider.api_key_env);
        debug!(
            variable = %config.provider.api_key_env,
            present = credential.is_some(),
            "Resolved API key"
        );
        Self {
            config,
            config_file,
            credential,
            interactive: std::io::stdin().is_terminal(),
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Replace the credential resolved from the environment.
    pub fn with_credential(mut self, credential: Option<Credential>) -> Self {
        self.credential = credential;
        self
    }

    /// Whether missing form fields may be prompted for.
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<Outcome, AppError> {
        let started = Instant::now();
        let name = command_name(command);
        info!(command = name, "Executing command");

        let result = match command {
            Commands::Generate { profile, format } => self.handle_generate(profile, format),
            Commands::Prompt { profile } => self.handle_prompt(profile),
            Commands::Status { format } => self.handle_status(format),
            Commands::Config => format_config_toml(&self.config).map(Outcome::Output),
        };

        info!(
            command = name,
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn collect(&self, args: &ProfileArgs) -> Result<Result<FitnessProfile, Outcome>, AppError> {
        let input = collect_profile(args, self.interactive && !args.no_input)?;
        let missing = input.missing_fields();
        Ok(match input.into_profile() {
            Some(profile) => Ok(profile),
            None => {
                info!(missing = ?missing, "Profile form incomplete");
                Err(Outcome::Incomplete { missing })
            }
        })
    }

    fn handle_generate(&self, args: &ProfileArgs, format: &str) -> Result<Outcome, AppError> {
        check_format(format)?;
        let profile = match self.collect(args)? {
            Ok(profile) => profile,
            Err(outcome) => return Ok(outcome),
        };
        info!(profile = %profile_summary(&profile), "Profile accepted");

        let generator = PlanGenerator::from_config(&self.config, self.credential.clone())?;
        let plan = block_on(generator.generate(&profile))??;

        let output = if format == "json" {
            format_plan_json(&plan, &profile, generator.model_name())?
        } else {
            format_plan_text(&plan, self.color)
        };
        Ok(Outcome::Output(output))
    }

    fn handle_prompt(&self, args: &ProfileArgs) -> Result<Outcome, AppError> {
        let profile = match self.collect(args)? {
            Ok(profile) => profile,
            Err(outcome) => return Ok(outcome),
        };
        Ok(Outcome::Output(format_prompt_preview(&build_messages(
            &profile,
        ))))
    }

    fn handle_status(&self, format: &str) -> Result<Outcome, AppError> {
        check_format(format)?;
        let provider = &self.config.provider;
        let report = StatusReport {
            provider: provider_label(&provider.endpoint).to_string(),
            model: provider.model.clone(),
            endpoint: provider.endpoint.clone(),
            api_key_env: provider.api_key_env.clone(),
            api_key_set: self.credential.is_some(),
            config_file: self.config_file.clone(),
        };
        let output = if format == "json" {
            format_status_json(&report)?
        } else {
            format_status_text(&report)
        };
        Ok(Outcome::Output(output))
    }
}

fn check_format(format: &str) -> Result<(), AppError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(AppError::Input(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}

/// Run one future to completion on a fresh runtime, blocking the caller.
fn block_on<F: Future>(future: F) -> Result<F::Output, AppError> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| AppError::Runtime(format!("Failed to create runtime: {}", e)))?;
    Ok(rt.block_on(future))
}
