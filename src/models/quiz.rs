// src/models/quiz.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

use crate::services::wiki::is_valid_wikipedia_url;

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Quiz {
    pub id: i64,

    /// Article URL, unique. Acts as the cache key for generation.
    pub url: String,

    pub title: String,

    /// First non-empty body paragraph of the article.
    pub summary: String,

    /// Section headings in document order.
    /// Stored as a JSON array in the database.
    /// `sqlx::types::Json` handles automatic serialization/deserialization.
    pub sections: Json<Vec<String>>,

    /// Generated questions exactly as the model produced them.
    pub quiz_data: Json<Vec<QuizQuestion>>,

    pub related_topics: Json<Vec<String>>,

    /// Most recently submitted score.
    pub last_score: i64,

    /// Highest score ever submitted. Never decreases.
    pub high_score: i64,

    pub created_at: DateTime<Utc>,
}

/// A single multiple-choice question produced by the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    pub question: String,

    /// Answer options. The prompt asks for four; the count is not enforced.
    pub options: Vec<String>,

    /// Expected to match one of `options`. The model is trusted here.
    pub answer: String,

    /// "easy" | "medium" | "hard" by convention.
    pub difficulty: String,

    pub explanation: String,
}

/// The payload the model is asked to produce.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedQuiz {
    pub quiz: Vec<QuizQuestion>,
    pub related_topics: Vec<String>,
}

/// Everything needed to persist a freshly generated quiz.
#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub url: String,
    pub title: String,
    pub summary: String,
    pub sections: Vec<String>,
    pub quiz: Vec<QuizQuestion>,
    pub related_topics: Vec<String>,
}

/// Query parameters for POST /generate-quiz.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateQuizParams {
    #[validate(length(min = 1, max = 500), custom(function = validate_wikipedia_url))]
    pub url: String,
}

/// Validates that a string is a Wikipedia article URL.
fn validate_wikipedia_url(url: &str) -> Result<(), validator::ValidationError> {
    if !is_valid_wikipedia_url(url) {
        return Err(validator::ValidationError::new("invalid_wikipedia_url"));
    }
    Ok(())
}

/// Response for POST /generate-quiz, both on cache hit and fresh generation.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub sections: Vec<String>,
    pub quiz: Vec<QuizQuestion>,
    pub related_topics: Vec<String>,
}

impl From<Quiz> for QuizResponse {
    fn from(q: Quiz) -> Self {
        Self {
            id: q.id,
            url: q.url,
            title: q.title,
            summary: q.summary,
            sections: q.sections.0,
            quiz: q.quiz_data.0,
            related_topics: q.related_topics.0,
        }
    }
}

/// One row of GET /quizzes.
#[derive(Debug, Serialize, FromRow)]
pub struct QuizSummary {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub last_score: i64,
    pub high_score: i64,
}

/// Response for GET /quizzes/{id}: the full record including scores.
#[derive(Debug, Serialize)]
pub struct QuizDetail {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub sections: Vec<String>,
    pub quiz: Vec<QuizQuestion>,
    pub related_topics: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_score: i64,
    pub high_score: i64,
}

impl From<Quiz> for QuizDetail {
    fn from(q: Quiz) -> Self {
        Self {
            id: q.id,
            url: q.url,
            title: q.title,
            summary: q.summary,
            sections: q.sections.0,
            quiz: q.quiz_data.0,
            related_topics: q.related_topics.0,
            created_at: q.created_at,
            last_score: q.last_score,
            high_score: q.high_score,
        }
    }
}

/// Body of POST /quizzes/{id}/score.
#[derive(Debug, Deserialize)]
pub struct ScoreUpdate {
    pub score: i64,
}
