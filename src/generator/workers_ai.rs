use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::generator::credentials::Credentials;
use crate::generator::error::GenerateError;
use crate::generator::prompt::PERSONA;

pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
pub const DEFAULT_MODEL: &str = "@cf/meta/llama-2-7b-chat-int8";

const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body of a Workers AI text-generation request.
#[derive(Debug, Clone, Serialize)]
pub struct RunRequest {
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

impl RunRequest {
    /// Persona system message followed by `prompt` as the user turn.
    pub fn for_prompt(prompt: &str) -> Self {
        Self {
            messages: vec![ChatMessage::system(PERSONA), ChatMessage::user(prompt)],
            stream: false,
        }
    }
}

/// Client for the Workers AI `ai/run` endpoint.
///
/// Credentials are passed per call; the client only carries the endpoint
/// settings and the pooled HTTP client.
#[derive(Debug, Clone)]
pub struct WorkersAiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout_secs: Option<u64>,
}

impl Default for WorkersAiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkersAiClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: Option<u64>) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout_secs(&self) -> Option<u64> {
        self.timeout_secs
    }

    pub fn endpoint(&self, account_id: &str) -> String {
        format!("{}/accounts/{account_id}/ai/run/{}", self.base_url, self.model)
    }

    /// Sends `prompt` to the model and returns the raw generated text.
    ///
    /// Fails with [`GenerateError::CredentialsMissing`] before touching the
    /// network when `credentials` is `None`.
    pub async fn run(
        &self,
        credentials: Option<&Credentials>,
        prompt: &str,
    ) -> Result<String, GenerateError> {
        let credentials = credentials.ok_or(GenerateError::CredentialsMissing)?;
        let url = self.endpoint(credentials.account_id());
        let payload = RunRequest::for_prompt(prompt);

        debug!(%url, model = %self.model, prompt, "calling Workers AI");

        let mut request = self
            .client
            .post(&url)
            .bearer_auth(credentials.api_token())
            .json(&payload);
        if let Some(timeout_secs) = self.timeout_secs {
            request = request.timeout(Duration::from_secs(timeout_secs));
        }

        let response = request.send().await.map_err(log_transport_error)?;
        let status = response.status();
        debug!(status = status.as_u16(), "Workers AI response status");

        if !status.is_success() {
            return Err(api_error(status, response.text().await));
        }

        let body = response.text().await.map_err(log_transport_error)?;
        debug!(payload = %body, "Workers AI response payload");
        extract_response(body)
    }
}

fn log_transport_error(source: reqwest::Error) -> GenerateError {
    let err = GenerateError::from_transport(source);
    error!(error = %err, "Workers AI request failed");
    err
}

// The status is kept even when the error body cannot be read.
fn api_error(status: StatusCode, body: Result<String, reqwest::Error>) -> GenerateError {
    let body = body.unwrap_or_default();
    let message = provider_error_message(&body);
    error!(status = status.as_u16(), %body, "Workers AI returned an error");
    GenerateError::Api { status, message }
}

fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/errors/0/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

fn extract_response(body: String) -> Result<String, GenerateError> {
    let text = serde_json::from_str::<Value>(&body).ok().and_then(|value| {
        value
            .pointer("/result/response")
            .and_then(Value::as_str)
            .map(str::to_string)
    });

    match text {
        Some(text) => Ok(text),
        None => {
            error!(%body, "unexpected Workers AI response structure");
            Err(GenerateError::MalformedResponse { body })
        }
    }
}
