pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers as render;
use crate::scoring::handlers as scoring;
use crate::state::AppState;
use crate::writing::handlers as writing;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI endpoints
        .route("/api/ai/ats-analysis", post(scoring::handle_ats_analysis))
        .route("/api/ai/match-job", post(scoring::handle_match_job))
        .route(
            "/api/ai/optimize-keywords",
            post(scoring::handle_optimize_keywords),
        )
        .route(
            "/api/ai/industry-optimization",
            post(scoring::handle_industry_optimization),
        )
        .route(
            "/api/ai/generate-content",
            post(writing::handle_generate_content),
        )
        .route(
            "/api/ai/feedback-analysis",
            post(writing::handle_feedback_analysis),
        )
        // Resume utilities
        .route(
            "/api/resume/completeness",
            post(writing::handle_completeness),
        )
        .route("/api/export/html", post(render::handle_export_html))
        .with_state(state)
}
