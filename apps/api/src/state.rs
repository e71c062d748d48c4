use std::sync::Arc;

use crate::scoring::scorer::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Heuristic or LLM-backed, chosen by `SCORER_BACKEND` at startup.
    pub scorer: Arc<dyn ResumeScorer>,
}
