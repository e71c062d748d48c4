//! Axum route handlers for content generation, edit feedback, and completion metrics.

use axum::{extract::rejection::JsonRejection, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::industry::profile_for;
use crate::models::resume::ResumeRecord;
use crate::writing::completeness::{compute_completeness, CompletenessReport};
use crate::writing::content::{generate_content, ContentSection, GeneratedContent};
use crate::writing::feedback::{analyze_edit, EditFeedback};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentBody {
    pub section: Option<String>,
    pub user_input: Option<String>,
    pub job_title: Option<String>,
    pub industry: Option<String>,
    /// Accepted for client compatibility; templates do not use it.
    #[allow(dead_code)]
    pub context: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackBody {
    pub original_content: Option<String>,
    pub edited_content: Option<String>,
    pub edit_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessBody {
    pub resume_data: Option<Value>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// POST /api/ai/generate-content
pub async fn handle_generate_content(
    payload: Result<Json<GenerateContentBody>, JsonRejection>,
) -> Result<Json<GeneratedContent>, AppError> {
    let Json(body) = payload?;
    let section: ContentSection = non_blank(body.section.as_deref())
        .ok_or_else(|| AppError::Validation("Section is required".to_string()))?
        .parse()?;

    let profile = profile_for(body.industry.as_deref().unwrap_or(""));
    debug!(?section, industry = profile.key, "generating content");

    Ok(Json(generate_content(
        section,
        profile,
        non_blank(body.job_title.as_deref()),
        body.user_input.as_deref(),
    )))
}

/// POST /api/ai/feedback-analysis
pub async fn handle_feedback_analysis(
    payload: Result<Json<FeedbackBody>, JsonRejection>,
) -> Result<Json<EditFeedback>, AppError> {
    let Json(body) = payload?;
    let edited = body
        .edited_content
        .ok_or_else(|| AppError::Validation("Edited content is required".to_string()))?;

    Ok(Json(analyze_edit(
        body.original_content.as_deref().unwrap_or(""),
        &edited,
        body.edit_type.as_deref().unwrap_or("general"),
    )))
}

/// POST /api/resume/completeness
pub async fn handle_completeness(
    payload: Result<Json<CompletenessBody>, JsonRejection>,
) -> Result<Json<CompletenessReport>, AppError> {
    let Json(body) = payload?;
    let raw = body
        .resume_data
        .filter(|v| !v.is_null())
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;

    Ok(Json(compute_completeness(&ResumeRecord::from_value(&raw))))
}
