//! Plan Generator
//!
//! Turns a `FitnessProfile` into a workout plan with one completion call. The credential is
//! injected at construction; when it is missing, generation fails with a configuration error
//! before anything is sent.

use crate::config::{Credential, FitplanConfig};
use crate::error::GenerationError;
use crate::profile::FitnessProfile;
use crate::prompt::build_messages;
use crate::provider::{ChatCompletionsClient, CompletionClient, CompletionOptions};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Generates workout plans through a `CompletionClient`
pub struct PlanGenerator {
    client: Arc<dyn CompletionClient>,
    credential: Option<Credential>,
    credential_var: String,
    options: CompletionOptions,
}

impl PlanGenerator {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        credential: Option<Credential>,
        credential_var: impl Into<String>,
    ) -> Self {
        Self {
            client,
            credential,
            credential_var: credential_var.into(),
            options: CompletionOptions::default(),
        }
    }

    /// Build the HTTP-backed generator described by `config`.
    pub fn from_config(
        config: &FitplanConfig,
        credential: Option<Credential>,
    ) -> Result<Self, GenerationError> {
        let client = ChatCompletionsClient::new(&config.provider)?;
        Ok(Self::new(
            Arc::new(client),
            credential,
            config.provider.api_key_env.clone(),
        )
        .with_options(CompletionOptions {
            temperature: config.provider.temperature,
            max_tokens: config.provider.max_tokens,
        }))
    }

    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Generate a plan for `profile`.
    ///
    /// Issues exactly one completion call and returns its content unmodified. A missing
    /// credential fails with `GenerationError::Configuration` and no call is made; any failure
    /// of the call itself is a `GenerationError::Service`.
    pub async fn generate(&self, profile: &FitnessProfile) -> Result<String, GenerationError> {
        let credential = self.credential.as_ref().ok_or_else(|| {
            info!(variable = %self.credential_var, "Generation attempted without an API key");
            GenerationError::Configuration(format!(
                "API key is not set. Please configure the environment variable {}.",
                self.credential_var
            ))
        })?;

        let messages = build_messages(profile);
        debug!(user_prompt = %messages[1].content, "Rendered workout plan prompt");
        info!(
            provider = self.client.provider_name(),
            model = self.client.model_name(),
            message_count = messages.len(),
            "Requesting workout plan"
        );

        let started = Instant::now();
        let response = self
            .client
            .complete(credential, messages, self.options.clone())
            .await
            .map_err(|e| {
                info!(error = %e, "Completion request failed");
                GenerationError::Service(e)
            })?;

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            response_chars = response.content.chars().count(),
            total_tokens = response.usage.total_tokens,
            "Workout plan received"
        );

        Ok(response.content)
    }
}
