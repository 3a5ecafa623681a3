// src/services/llm.rs

use async_trait::async_trait;
use serde_json::json;

use crate::config::{GROQ_API_URL, GROQ_MODEL, GROQ_TEMPERATURE};
use crate::error::AppError;
use crate::models::quiz::GeneratedQuiz;

/// A chat-completion model that turns a prompt into raw text.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

/// Groq chat-completions client (OpenAI-compatible API).
///
/// The API key is optional so the service can boot without one; every
/// completion then fails with a configuration error.
pub struct GroqClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl GroqClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ChatModel for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Model("Groq API key missing".to_string()))?;

        let payload = json!({
            "model": GROQ_MODEL,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": GROQ_TEMPERATURE,
        });

        let response = self
            .http
            .post(GROQ_API_URL)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Groq request failed: {:?}", e);
                AppError::Model("Failed to reach Groq API".to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Groq API returned {}: {}", status, body);
            return Err(AppError::Model(format!("Groq API returned {}", status)));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode Groq response: {:?}", e);
            AppError::Model("Failed to decode Groq response".to_string())
        })?;

        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string();

        if content.trim().is_empty() {
            return Err(AppError::Model("Empty response from LLM".to_string()));
        }

        Ok(content)
    }
}

/// Pulls the first JSON object out of a model reply and parses it.
///
/// Models wrap payloads in prose often enough that everything outside the
/// outermost braces is discarded before parsing. Any failure, from missing
/// braces to a payload that does not match [`GeneratedQuiz`], maps to the
/// same invalid-JSON error.
pub fn extract_json(raw: &str) -> Result<GeneratedQuiz, AppError> {
    let start = raw.find('{');
    let end = raw.rfind('}');

    let candidate = match (start, end) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => return Err(AppError::Model("Invalid JSON from LLM".to_string())),
    };

    serde_json::from_str(candidate)
        .map_err(|_| AppError::Model("Invalid JSON from LLM".to_string()))
}
