//! CLI presentation: plan, warning and error framing, prompt preview, status and config output.

use crate::config::FitplanConfig;
use crate::error::AppError;
use crate::profile::FitnessProfile;
use crate::prompt::format_weight;
use crate::provider::ChatMessage;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

pub const INCOMPLETE_FORM_WARNING: &str = "Please fill in all the details.";
pub const PLAN_READY: &str = "Your workout plan is ready!";

/// Provider settings and credential state shown by `fitplan status`
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub provider: String,
    pub model: String,
    pub endpoint: String,
    pub api_key_env: String,
    pub api_key_set: bool,
    pub config_file: Option<PathBuf>,
}

pub fn format_plan_text(plan: &str, color: bool) -> String {
    let header = if color {
        format!("{}", PLAN_READY.green().bold())
    } else {
        PLAN_READY.to_string()
    };
    format!("{}\n\n### Workout Plan\n\n{}", header, plan)
}

pub fn format_plan_json(
    plan: &str,
    profile: &FitnessProfile,
    model: &str,
) -> Result<String, AppError> {
    let out = json!({
        "model": model,
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "profile": profile,
        "plan": plan,
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn format_incomplete_warning(missing: &[&str], color: bool) -> String {
    let mut line = INCOMPLETE_FORM_WARNING.to_string();
    if !missing.is_empty() {
        line.push_str(&format!(" Missing: {}.", missing.join(", ")));
    }
    if color {
        format!("{}", line.yellow())
    } else {
        line
    }
}

pub fn format_error_line(message: &str, color: bool) -> String {
    if color {
        format!("{}", message.red())
    } else {
        message.to_string()
    }
}

pub fn format_prompt_preview(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|msg| format!("[{}]\n{}", msg.role.as_str(), msg.content.trim_end()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn format_status_text(report: &StatusReport) -> String {
    use comfy_table::Table;

    let api_key = if report.api_key_set {
        format!("set ({})", report.api_key_env)
    } else {
        format!("not set ({})", report.api_key_env)
    };
    let config_file = report
        .config_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["Provider".to_string(), report.provider.clone()]);
    table.add_row(vec!["Model".to_string(), report.model.clone()]);
    table.add_row(vec!["Endpoint".to_string(), report.endpoint.clone()]);
    table.add_row(vec!["API key".to_string(), api_key]);
    table.add_row(vec!["Config file".to_string(), config_file]);

    let mut output = table.to_string();
    if !report.api_key_set {
        output.push_str(&format!(
            "\n\nSet {} to generate workout plans.",
            report.api_key_env
        ));
    }
    output
}

pub fn format_status_json(report: &StatusReport) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Effective configuration as TOML. Holds the credential variable name only, never its value.
pub fn format_config_toml(config: &FitplanConfig) -> Result<String, AppError> {
    Ok(toml::to_string_pretty(config)?)
}

/// One-line summary of a profile for logs and headers
pub fn profile_summary(profile: &FitnessProfile) -> String {
    format!(
        "{}, {} years, {}kg",
        profile.gender(),
        profile.age(),
        format_weight(profile.weight())
    )
}
