// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Model served through Groq's OpenAI-compatible endpoint.
pub const GROQ_MODEL: &str = "llama-3.1-8b-instant";

pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

pub const GROQ_TEMPERATURE: f32 = 0.3;

/// Questions requested per article.
pub const QUESTIONS_PER_QUIZ: usize = 5;

/// Article text beyond this many characters is not sent to the model.
pub const CONTENT_CHAR_LIMIT: usize = 4000;

/// Timeout for fetching a Wikipedia page.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub groq_api_key: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        // Not fatal at startup; generation requests report the missing key.
        let groq_api_key = env::var("GROQ_API_KEY").ok();

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            groq_api_key,
            rust_log,
        }
    }
}
