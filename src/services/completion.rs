// src/services/completion.rs
//! Client for the hosted chat completion API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const MAX_OUTPUT_TOKENS: u32 = 300;

/// One system + user exchange sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
}

impl Prompt {
    pub fn for_question(question: &str) -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user: format!("Answer the following question and provide references: {question}"),
            max_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("authentication rejected: {0}")]
    Authentication(String),

    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("{0}")]
    Api(String),

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible `/chat/completions` client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    organization: Option<String>,
    api_base: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self, CompletionError> {
        Self::with_settings(
            config.api_key.clone().unwrap_or_default(),
            config.organization.clone(),
            config.api_base.clone(),
            config.model.clone(),
            config.request_timeout,
        )
    }

    pub fn with_settings(
        api_key: String,
        organization: Option<String>,
        api_base: String,
        model: String,
        timeout: Option<Duration>,
    ) -> Result<Self, CompletionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| CompletionError::Api(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            organization,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens: prompt.max_tokens,
        };

        debug!(model = %self.model, max_tokens = prompt.max_tokens, "Sending completion request");

        let mut request = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body);
        if let Some(org) = &self.organization {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CompletionError::Api(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_else(|e| {
                warn!(%status, error = %e, "Failed to read completion error body");
                String::new()
            });
            return Err(classify_failure(status, &text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or_else(|| CompletionError::MalformedResponse("no message content in choices".to_string()))
    }
}

/// Map a non-2xx vendor response onto the error kinds the handler
/// distinguishes.
pub fn classify_failure(status: StatusCode, body: &str) -> CompletionError {
    let detail = vendor_message(body).unwrap_or_else(|| {
        if body.trim().is_empty() {
            status.to_string()
        } else {
            body.trim().to_string()
        }
    });

    match status {
        StatusCode::UNAUTHORIZED => CompletionError::Authentication(detail),
        StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited(detail),
        _ => CompletionError::Api(detail),
    }
}

// {"error": {"message": "...", "type": "...", ...}}
fn vendor_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
