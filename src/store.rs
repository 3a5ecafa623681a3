// src/store.rs

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use crate::error::AppError;
use crate::models::quiz::{NewQuiz, Quiz, QuizSummary};

/// Persistence seam for quizzes. `find_by_url` is the cache probe of the
/// generation flow; `insert` must stay race-safe on the unique url column.
#[async_trait]
pub trait QuizStore: Send + Sync {
    async fn find_by_url(&self, url: &str) -> Result<Option<Quiz>, AppError>;

    /// Inserts a new quiz. If a concurrent request stored the same url
    /// first, the already persisted row is returned instead of an error.
    async fn insert(&self, new_quiz: NewQuiz) -> Result<Quiz, AppError>;

    async fn list(&self) -> Result<Vec<QuizSummary>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Quiz>, AppError>;

    /// Records a submitted score: `last_score` is overwritten, `high_score`
    /// only ever raised. Returns `None` when the id is unknown.
    async fn update_score(&self, id: i64, score: i64) -> Result<Option<Quiz>, AppError>;
}

/// Postgres-backed store over the shared connection pool.
#[derive(Clone)]
pub struct PgQuizStore {
    pool: PgPool,
}

impl PgQuizStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizStore for PgQuizStore {
    async fn find_by_url(&self, url: &str) -> Result<Option<Quiz>, AppError> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, url, title, summary, sections, quiz_data, related_topics,
                   last_score, high_score, created_at
            FROM quizzes
            WHERE url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quiz)
    }

    async fn insert(&self, new_quiz: NewQuiz) -> Result<Quiz, AppError> {
        let inserted = sqlx::query_as::<_, Quiz>(
            r#"
            INSERT INTO quizzes (url, title, summary, sections, quiz_data, related_topics)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (url) DO NOTHING
            RETURNING id, url, title, summary, sections, quiz_data, related_topics,
                      last_score, high_score, created_at
            "#,
        )
        .bind(&new_quiz.url)
        .bind(&new_quiz.title)
        .bind(&new_quiz.summary)
        .bind(Json(&new_quiz.sections))
        .bind(Json(&new_quiz.quiz))
        .bind(Json(&new_quiz.related_topics))
        .fetch_optional(&self.pool)
        .await?;

        match inserted {
            Some(quiz) => Ok(quiz),
            // Lost the race to a concurrent request for the same url.
            None => self.find_by_url(&new_quiz.url).await?.ok_or_else(|| {
                AppError::InternalServerError(format!(
                    "Quiz for {} missing after insert conflict",
                    new_quiz.url
                ))
            }),
        }
    }

    async fn list(&self) -> Result<Vec<QuizSummary>, AppError> {
        let quizzes = sqlx::query_as::<_, QuizSummary>(
            r#"
            SELECT id, title, url, created_at, last_score, high_score
            FROM quizzes
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    async fn get(&self, id: i64) -> Result<Option<Quiz>, AppError> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT id, url, title, summary, sections, quiz_data, related_topics,
                   last_score, high_score, created_at
            FROM quizzes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quiz)
    }

    async fn update_score(&self, id: i64, score: i64) -> Result<Option<Quiz>, AppError> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            UPDATE quizzes
            SET last_score = $2,
                high_score = GREATEST(high_score, $2)
            WHERE id = $1
            RETURNING id, url, title, summary, sections, quiz_data, related_topics,
                      last_score, high_score, created_at
            "#,
        )
        .bind(id)
        .bind(score)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quiz)
    }
}
