//! Axum route handlers for the AI scoring endpoints.
//!
//! Handlers validate required fields, normalise the resume payload, and hand off to the
//! configured `ResumeScorer`. Every body field is optional at the serde level so that a
//! missing field is reported as a 400 with a readable message.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::scoring::ats::AtsAnalysis;
use crate::scoring::industry_opt::IndustryOptimization;
use crate::scoring::job_match::{JobMatchAnalysis, ResumeInput};
use crate::scoring::keyword_opt::KeywordOptimization;
use crate::scoring::scorer::{AtsRequest, IndustryRequest, JobMatchRequest, KeywordRequest};
use crate::scoring::text::resolve_career_keywords;
use crate::state::AppState;

const DEFAULT_TEMPLATE: &str = "modern";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysisBody {
    pub resume_data: Option<Value>,
    pub template: Option<String>,
    pub career_keywords: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchBody {
    pub resume_data: Option<Value>,
    pub resume_content: Option<String>,
    pub job_description: Option<String>,
    pub career_keywords: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordBody {
    pub content: Option<String>,
    pub industry: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryBody {
    pub resume_data: Option<Value>,
    pub target_industry: Option<String>,
    pub target_role: Option<String>,
    pub career_keywords: Option<Value>,
}

/// Treats JSON `null` like an absent field.
fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !v.is_null())
}

/// Trimmed, non-blank string.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai/ats-analysis
pub async fn handle_ats_analysis(
    State(state): State<AppState>,
    payload: Result<Json<AtsAnalysisBody>, JsonRejection>,
) -> Result<Json<AtsAnalysis>, AppError> {
    let Json(body) = payload?;
    let raw = present(body.resume_data)
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;

    let resume = ResumeRecord::from_value(&raw);
    let request = AtsRequest {
        career_keywords: resolve_career_keywords(body.career_keywords.as_ref(), &resume),
        template: non_blank(body.template).unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
        resume,
    };

    let analysis = state.scorer.analyze_ats(&request).await?;
    Ok(Json(analysis))
}

/// POST /api/ai/match-job
///
/// Accepts structured `resumeData` or the flattened `resumeContent` the browser sends.
pub async fn handle_match_job(
    State(state): State<AppState>,
    payload: Result<Json<JobMatchBody>, JsonRejection>,
) -> Result<Json<JobMatchAnalysis>, AppError> {
    let Json(body) = payload?;
    let missing =
        || AppError::Validation("Resume content and job description are required".to_string());

    let job_description = non_blank(body.job_description).ok_or_else(missing)?;

    let (resume, career_keywords) = match (present(body.resume_data), non_blank(body.resume_content)) {
        (Some(raw), _) => {
            let record = ResumeRecord::from_value(&raw);
            let keywords = resolve_career_keywords(body.career_keywords.as_ref(), &record);
            (ResumeInput::Structured(record), keywords)
        }
        (None, Some(text)) => {
            let keywords =
                resolve_career_keywords(body.career_keywords.as_ref(), &ResumeRecord::default());
            (ResumeInput::PlainText(text), keywords)
        }
        (None, None) => return Err(missing()),
    };

    let request = JobMatchRequest {
        resume,
        job_description,
        career_keywords,
    };
    let analysis = state.scorer.match_job(&request).await?;
    Ok(Json(analysis))
}

/// POST /api/ai/optimize-keywords
pub async fn handle_optimize_keywords(
    State(state): State<AppState>,
    payload: Result<Json<KeywordBody>, JsonRejection>,
) -> Result<Json<KeywordOptimization>, AppError> {
    let Json(body) = payload?;
    let (Some(content), Some(industry)) = (non_blank(body.content), non_blank(body.industry)) else {
        return Err(AppError::Validation(
            "Content and industry are required".to_string(),
        ));
    };

    let request = KeywordRequest {
        content,
        industry,
        job_description: non_blank(body.job_description),
    };
    let result = state.scorer.optimize_keywords(&request).await?;
    Ok(Json(result))
}

/// POST /api/ai/industry-optimization
pub async fn handle_industry_optimization(
    State(state): State<AppState>,
    payload: Result<Json<IndustryBody>, JsonRejection>,
) -> Result<Json<IndustryOptimization>, AppError> {
    let Json(body) = payload?;
    let (Some(raw), Some(industry), Some(role)) = (
        present(body.resume_data),
        non_blank(body.target_industry),
        non_blank(body.target_role),
    ) else {
        return Err(AppError::Validation(
            "Resume data, target industry, and target role are required".to_string(),
        ));
    };

    let resume = ResumeRecord::from_value(&raw);
    let request = IndustryRequest {
        career_keywords: resolve_career_keywords(body.career_keywords.as_ref(), &resume),
        resume,
        industry,
        role,
    };
    let result = state.scorer.optimize_industry(&request).await?;
    Ok(Json(result))
}
