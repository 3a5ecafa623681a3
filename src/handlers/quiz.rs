// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::quiz::{GenerateQuizParams, NewQuiz, QuizDetail, QuizResponse, ScoreUpdate},
    services::{
        llm::{self, ChatModel},
        prompt::build_quiz_prompt,
        wiki::ArticleExtractor,
    },
    store::QuizStore,
};

/// Generates (or returns the cached) quiz for a Wikipedia article.
///
/// * Validates the `url` query parameter before touching the network.
/// * A cache hit on `quizzes.url` returns the stored record untouched.
/// * A cache miss scrapes the article, prompts the model, parses its JSON
///   and persists the result. Nothing is written when any step fails.
pub async fn generate_quiz(
    State(store): State<Arc<dyn QuizStore>>,
    State(extractor): State<Arc<dyn ArticleExtractor>>,
    State(model): State<Arc<dyn ChatModel>>,
    Query(params): Query<GenerateQuizParams>,
) -> Result<impl IntoResponse, AppError> {
    params
        .validate()
        .map_err(|_| AppError::BadRequest("Invalid Wikipedia URL".to_string()))?;

    if let Some(existing) = store.find_by_url(&params.url).await? {
        tracing::info!("Cache hit for {}", params.url);
        return Ok(Json(QuizResponse::from(existing)));
    }

    let article = extractor.extract(&params.url).await?;
    let prompt = build_quiz_prompt(&article);

    let reply = model.complete(&prompt).await?;
    let generated = llm::extract_json(&reply)?;

    let quiz = store
        .insert(NewQuiz {
            url: params.url,
            title: article.title,
            summary: article.summary,
            sections: article.sections,
            quiz: generated.quiz,
            related_topics: generated.related_topics,
        })
        .await?;

    tracing::info!("Stored quiz {} for {}", quiz.id, quiz.url);
    Ok(Json(QuizResponse::from(quiz)))
}

/// Lists stored quizzes, newest first, with scores but without questions.
pub async fn list_quizzes(
    State(store): State<Arc<dyn QuizStore>>,
) -> Result<impl IntoResponse, AppError> {
    let quizzes = store.list().await?;

    Ok(Json(quizzes))
}

/// Retrieves a single quiz including questions, scores and creation time.
pub async fn get_quiz(
    State(store): State<Arc<dyn QuizStore>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store
        .get(id)
        .await?
        .ok_or(AppError::NotFound("Quiz not found".to_string()))?;

    Ok(Json(QuizDetail::from(quiz)))
}

/// Records a submitted score.
///
/// `last_score` always takes the submitted value; `high_score` never
/// decreases.
pub async fn update_score(
    State(store): State<Arc<dyn QuizStore>>,
    Path(id): Path<i64>,
    Json(body): Json<ScoreUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = store
        .update_score(id, body.score)
        .await?
        .ok_or(AppError::NotFound("Quiz not found".to_string()))?;

    Ok(Json(serde_json::json!({
        "message": "Score updated",
        "last_score": quiz.last_score,
        "high_score": quiz.high_score,
    })))
}
