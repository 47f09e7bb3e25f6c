//! Prompt rendering: one constant system instruction and one user request built from the profile.
//!
//! Profile fields are substituted verbatim. The goal text is not escaped.

use crate::profile::FitnessProfile;
use crate::provider::ChatMessage;

pub const SYSTEM_PROMPT: &str = "You are a professional fitness trainer. Create a personalized workout plan based on the user's profile.\nInclude specific exercises, sets, reps, and any relevant advice. Keep it practical and achievable.";

/// Render weight the way it is shown to the model: `80.5`, and `80.0` for whole numbers.
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.is_finite() {
        format!("{:.1}", weight)
    } else {
        weight.to_string()
    }
}

/// The user-role request for a profile.
pub fn render_user_prompt(profile: &FitnessProfile) -> String {
    format!(
        "Create a workout plan for:\nGender: {}\nAge: {}\nWeight: {}kg\nGoal: {}\n",
        profile.gender(),
        profile.age(),
        format_weight(profile.weight()),
        profile.goal()
    )
}

/// System message first, user message second.
pub fn build_messages(profile: &FitnessProfile) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(render_user_prompt(profile)),
    ]
}
