//! Integration tests for plan generation through the public API

use async_trait::async_trait;
use fitplan::config::{Credential, FitplanConfig, ProviderSettings};
use fitplan::error::{GenerationError, ProviderError};
use fitplan::generator::PlanGenerator;
use fitplan::profile::{FitnessProfile, Gender, ProfileInput};
use fitplan::prompt::{render_user_prompt, SYSTEM_PROMPT};
use fitplan::provider::{
    ChatMessage, CompletionClient, CompletionOptions, CompletionResponse, MessageRole, TokenUsage,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::integration::{closed_endpoint, completion_body, serve_once};

/// Counts calls and keeps the last message list
#[derive(Default)]
struct RecordingClient {
    calls: AtomicUsize,
    last_messages: Mutex<Option<Vec<ChatMessage>>>,
    fail_with: Option<String>,
}

#[async_trait]
impl CompletionClient for RecordingClient {
    async fn complete(
        &self,
        _credential: &Credential,
        messages: Vec<ChatMessage>,
        _options: CompletionOptions,
    ) -> Result<CompletionResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = Some(messages);
        if let Some(ref message) = self.fail_with {
            return Err(ProviderError::RateLimit(message.clone()));
        }
        Ok(CompletionResponse {
            content: "**Monday**: deadlifts 5x5".to_string(),
            model: "recording".to_string(),
            usage: TokenUsage::default(),
            finish_reason: None,
        })
    }

    fn provider_name(&self) -> &str {
        "recording"
    }

    fn model_name(&self) -> &str {
        "recording"
    }
}

fn sample_profile() -> FitnessProfile {
    FitnessProfile::new(Gender::Male, 30, 80.5, "muscle gain")
}

#[tokio::test]
async fn test_generate_returns_content_from_single_call() {
    let client = Arc::new(RecordingClient::default());
    let generator = PlanGenerator::new(
        client.clone(),
        Some(Credential::new("gsk_test")),
        "LANGCHAIN_GROQ_API_KEY",
    );

    let plan = generator.generate(&sample_profile()).await.unwrap();

    assert_eq!(plan, "**Monday**: deadlifts 5x5");
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);

    let messages = client.last_messages.lock().unwrap().clone().unwrap();
    assert_eq!(messages[0].role, MessageRole::System);
    assert_eq!(messages[0].content, SYSTEM_PROMPT);
    assert_eq!(messages[1].role, MessageRole::User);
    assert_eq!(messages[1].content, render_user_prompt(&sample_profile()));
}

#[tokio::test]
async fn test_missing_credential_makes_no_call() {
    let client = Arc::new(RecordingClient::default());
    let generator = PlanGenerator::new(client.clone(), None, "LANGCHAIN_GROQ_API_KEY");

    let err = generator.generate(&sample_profile()).await.unwrap_err();

    match err {
        GenerationError::Configuration(message) => {
            assert_eq!(
                message,
                "API key is not set. Please configure the environment variable LANGCHAIN_GROQ_API_KEY."
            );
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_service_failure_is_single_attempt() {
    let client = Arc::new(RecordingClient {
        fail_with: Some("tokens per minute exceeded".to_string()),
        ..RecordingClient::default()
    });
    let generator = PlanGenerator::new(client.clone(), Some(Credential::new("k")), "KEY");

    let err = generator.generate(&sample_profile()).await.unwrap_err();

    assert!(matches!(
        err,
        GenerationError::Service(ProviderError::RateLimit(_))
    ));
    assert!(err.to_string().contains("tokens per minute exceeded"));
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_incomplete_form_never_builds_profile() {
    let inputs = [
        ProfileInput {
            gender: None,
            age: Some(30),
            weight: Some(80.5),
            goal: Some("muscle gain".to_string()),
        },
        ProfileInput {
            gender: Some(Gender::Female),
            age: None,
            weight: Some(80.5),
            goal: Some("muscle gain".to_string()),
        },
        ProfileInput {
            gender: Some(Gender::Female),
            age: Some(30),
            weight: None,
            goal: Some("muscle gain".to_string()),
        },
        ProfileInput {
            gender: Some(Gender::Female),
            age: Some(30),
            weight: Some(80.5),
            goal: Some(String::new()),
        },
    ];

    for input in inputs {
        assert!(!input.is_complete());
        assert!(input.into_profile().is_none());
    }
}

#[tokio::test]
async fn test_http_generator_end_to_end() {
    let (endpoint, server) = serve_once("200 OK", completion_body("Plan body\n\n- Rows 4x8")).await;
    let config = FitplanConfig {
        provider: ProviderSettings {
            endpoint,
            temperature: Some(0.7),
            ..ProviderSettings::default()
        },
        ..FitplanConfig::default()
    };
    let generator = PlanGenerator::from_config(&config, Some(Credential::new("gsk_e2e"))).unwrap();

    let plan = generator.generate(&sample_profile()).await.unwrap();
    assert_eq!(plan, "Plan body\n\n- Rows 4x8");

    let request = server.await.unwrap();
    let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["model"], "llama-3.1-70b-versatile");
    assert_eq!(json["stream"], false);
    assert_eq!(json["messages"].as_array().unwrap().len(), 2);
    assert!(json["messages"][1]["content"]
        .as_str()
        .unwrap()
        .contains("Goal: muscle gain"));
    assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
}

#[tokio::test]
async fn test_http_generator_connection_failure_is_service_error() {
    let config = FitplanConfig {
        provider: ProviderSettings {
            endpoint: closed_endpoint(),
            ..ProviderSettings::default()
        },
        ..FitplanConfig::default()
    };
    let generator = PlanGenerator::from_config(&config, Some(Credential::new("k"))).unwrap();

    let err = generator.generate(&sample_profile()).await.unwrap_err();

    assert!(err.is_service());
}
