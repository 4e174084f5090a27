use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::oracle::Answer;

/// Canonical Anthropic Messages API endpoint.
pub const CLAUDE_MESSAGES_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default model consulted by the oracle.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "ANTHROPIC_API_KEY";

const CONNECT_TIMEOUT_SECS: u64 = 30;
// Bounds the Thinking wait: an unanswered request resolves as an ordinary
// failure instead of leaving the machine stuck.
const REQUEST_TIMEOUT_SECS: u64 = 60;

const MAX_ANSWER_TOKENS: u32 = 256;

// Sampling is pinned toward maximum diversity: every seek should get a
// different answer.
const ORACLE_TEMPERATURE: f64 = 1.0;
const ORACLE_TOP_P: f64 = 0.95;
const ORACLE_TOP_K: u32 = 40;

const SYSTEM_INSTRUCTION: &str = "You are an ancient oracle: wise, mysterious, and enigmatic. \
     Speak your answer in one or two short sentences, never more.";

// The question itself is never transmitted; the seeker keeps it unspoken.
const SEEK_DIRECTIVE: &str =
    "A seeker has cast their three digits and silently posed a question. Give your answer.";

/// The one sentence shown to the user for every provider failure.
pub const ORACLE_SILENT_MESSAGE: &str =
    "The oracle is silent at the moment. Please try again later.";

/// A seek that produced no usable answer.
///
/// Every variant surfaces to the user as [`ORACLE_SILENT_MESSAGE`]; the
/// variant detail exists for the logs.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("response contained no answer text")]
    EmptyAnswer,
}

impl ProviderError {
    pub fn user_message(&self) -> &'static str {
        ORACLE_SILENT_MESSAGE
    }
}

/// Immutable request configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    api_key: String,
    model: String,
    api_url: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            api_url: CLAUDE_MESSAGES_API_URL.to_string(),
        }
    }

    /// Point the provider at a different endpoint (tests use a local mock).
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

fn http_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build HTTP client with timeouts: {e}");
                Client::new()
            })
    })
}

/// Ask the oracle for one answer.
///
/// Sends the fixed directive, persona, and sampling parameters; no caller
/// input reaches the wire. Exactly one request per call, no retries.
pub async fn fetch_answer(config: &ApiConfig) -> Result<Answer, ProviderError> {
    let body = json!({
        "model": config.model(),
        "max_tokens": MAX_ANSWER_TOKENS,
        "system": SYSTEM_INSTRUCTION,
        "temperature": ORACLE_TEMPERATURE,
        "top_p": ORACLE_TOP_P,
        "top_k": ORACLE_TOP_K,
        "messages": [{
            "role": "user",
            "content": SEEK_DIRECTIVE,
        }],
    });

    let response = http_client()
        .post(config.api_url())
        .header("x-api-key", config.api_key())
        .header("anthropic-version", ANTHROPIC_VERSION)
        .header("content-type", "application/json")
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => format!("<failed to read error body: {e}>"),
        };
        return Err(ProviderError::Api { status, body });
    }

    let payload: serde_json::Value = response.json().await?;
    let text = payload["content"][0]["text"].as_str().unwrap_or_default();

    Answer::new(text).map_err(|_| ProviderError::EmptyAnswer)
}
