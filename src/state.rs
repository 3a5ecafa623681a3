use crate::services::llm::ChatModel;
use crate::services::wiki::ArticleExtractor;
use crate::store::QuizStore;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuizStore>,
    pub extractor: Arc<dyn ArticleExtractor>,
    pub model: Arc<dyn ChatModel>,
}

impl FromRef<AppState> for Arc<dyn QuizStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ArticleExtractor> {
    fn from_ref(state: &AppState) -> Self {
        state.extractor.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ChatModel> {
    fn from_ref(state: &AppState) -> Self {
        state.model.clone()
    }
}
