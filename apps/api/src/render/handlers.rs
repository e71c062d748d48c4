//! Axum route handler for document export.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::render::html::{download_filename, render_resume_html, CustomColors, Palette};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBody {
    pub resume_data: Option<Value>,
    pub template: Option<String>,
    pub custom_colors: Option<CustomColors>,
}

/// POST /api/export/html
///
/// Returns the rendered page as an attachment named after the resume owner.
pub async fn handle_export_html(
    payload: Result<Json<ExportBody>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = payload?;
    let raw = body
        .resume_data
        .filter(|v| !v.is_null())
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;

    let resume = ResumeRecord::from_value(&raw);
    let template = body.template.as_deref().unwrap_or("modern");
    let palette = Palette::resolve(template, body.custom_colors.as_ref());
    let html = render_resume_html(&resume, &palette);

    let disposition = format!("attachment; filename=\"{}\"", download_filename(&resume));
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid Content-Disposition: {e}")))?;

    debug!(template, bytes = html.len(), "rendered HTML export");

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        html,
    )
        .into_response())
}
