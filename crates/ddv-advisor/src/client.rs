//! Blocking client for an OpenAI-compatible chat completions endpoint.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ddv_model::AdvisorError;

use crate::settings::AdvisorSettings;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct ChatClient {
    http: Client,
    url: String,
    model: String,
    temperature: f32,
    api_key: String,
}

impl ChatClient {
    /// Build a client; the API key is read from `settings.api_key_env`.
    pub fn from_settings(settings: &AdvisorSettings) -> Result<Self, AdvisorError> {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AdvisorError::MissingApiKey(settings.api_key_env.clone()))?;
        Self::with_api_key(settings, api_key)
    }

    pub fn with_api_key(
        settings: &AdvisorSettings,
        api_key: impl Into<String>,
    ) -> Result<Self, AdvisorError> {
        let http = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|error| AdvisorError::Network(error.to_string()))?;
        Ok(Self {
            http,
            url: settings.completions_url(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            api_key: api_key.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one user message and return the first choice's text.
    pub fn complete(&self, prompt: &str) -> Result<String, AdvisorError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        debug!(model = %self.model, "requesting chat completion");
        let response = self
            .http
            .post(&self.url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(USER_AGENT, concat!("ddv/", env!("CARGO_PKG_VERSION")))
            .json(&body)
            .send()
            .map_err(|error| AdvisorError::Network(error.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AdvisorError::Api { status, message });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|error| AdvisorError::InvalidResponse(error.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AdvisorError::InvalidResponse("completion has no content".to_string()))
    }
}
