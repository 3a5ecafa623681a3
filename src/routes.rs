// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{health, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Wires the health route and the quiz endpoints.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store, extractor, model).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:5173".parse().unwrap(),
        "http://127.0.0.1:5173".parse().unwrap(),
        "https://ai-wiki-quiz-generator-nine.vercel.app".parse().unwrap(),
    ];

    // Credentialed CORS forbids wildcard values, so any method and any
    // header are granted by mirroring the preflight request instead.
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/", get(health::root))
        .route("/generate-quiz", post(quiz::generate_quiz))
        .route("/quizzes", get(quiz::list_quizzes))
        .route("/quizzes/{id}", get(quiz::get_quiz))
        .route("/quizzes/{id}/score", post(quiz::update_score))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
