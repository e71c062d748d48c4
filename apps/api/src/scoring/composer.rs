//! Aggregate score composition.
//!
//! Two distinct formulas share the scorer primitives:
//! - `compose_ats_score`: generic ATS compatibility. Start at 100, subtract each section's
//!   shortfall at 20% weight, a flat penalty per missing section, and formatting penalties.
//! - `compose_match_score`: fit against one job posting. Weighted blend of requirement match,
//!   career-goal alignment and a content-quality heuristic.

use serde::{Deserialize, Serialize};

use crate::scoring::sections::SectionFindings;

/// Weight of each required section's shortfall (four sections → at most 80 points).
pub const SECTION_WEIGHT: f64 = 0.2;
/// Flat deduction for each required section that is absent, on top of its shortfall.
pub const MISSING_SECTION_PENALTY: f64 = 20.0;
pub const CREATIVE_TEMPLATE_PENALTY: f64 = 10.0;
pub const SPARSE_CONTENT_PENALTY: f64 = 15.0;
pub const DEFAULT_MIN_CONTENT_LENGTH: usize = 500;

/// Templates known to trip up automated resume parsers.
const PARSER_UNFRIENDLY_TEMPLATES: &[&str] = &["creative"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattingAssessment {
    pub issues: Vec<String>,
    pub penalty: f64,
}

/// Flat formatting penalties: parser-unfriendly template and too-sparse content.
pub fn assess_formatting(
    template: &str,
    content_length: usize,
    min_content_length: usize,
) -> FormattingAssessment {
    let mut assessment = FormattingAssessment::default();

    let template = template.trim().to_ascii_lowercase();
    if PARSER_UNFRIENDLY_TEMPLATES.contains(&template.as_str()) {
        assessment
            .issues
            .push("Creative templates may have ATS parsing issues".to_string());
        assessment.penalty += CREATIVE_TEMPLATE_PENALTY;
    }

    if content_length < min_content_length {
        assessment
            .issues
            .push("Resume content appears too brief".to_string());
        assessment.penalty += SPARSE_CONTENT_PENALTY;
    }

    assessment
}

/// Generic ATS score in 0..=100.
pub fn compose_ats_score(findings: &SectionFindings, formatting: &FormattingAssessment) -> u32 {
    let mut score = 100.0_f64;

    for report in &findings.reports {
        let shortfall = (100.0 - f64::from(report.score.min(100))).max(0.0);
        score -= shortfall * SECTION_WEIGHT;
    }
    score -= findings.missing_sections.len() as f64 * MISSING_SECTION_PENALTY;
    score -= formatting.penalty;

    to_percentage(score)
}

/// Weights for the job-specific blend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub requirements: f64,
    pub career_alignment: f64,
    pub content_quality: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            requirements: 0.6,
            career_alignment: 0.25,
            content_quality: 0.15,
        }
    }
}

/// Job match score in 0..=100. All inputs are ratios in 0.0..=1.0.
///
/// Without career keywords (`career_alignment == None`) that term is dropped and the
/// remaining weights are renormalised, so omitting optional input never costs points.
pub fn compose_match_score(
    requirement_match: f64,
    career_alignment: Option<f64>,
    content_quality: f64,
    weights: &MatchWeights,
) -> u32 {
    let requirement_match = requirement_match.clamp(0.0, 1.0);
    let content_quality = content_quality.clamp(0.0, 1.0);

    let mut weighted = weights.requirements * requirement_match
        + weights.content_quality * content_quality;
    let mut total_weight = weights.requirements + weights.content_quality;

    if let Some(alignment) = career_alignment {
        weighted += weights.career_alignment * alignment.clamp(0.0, 1.0);
        total_weight += weights.career_alignment;
    }

    if total_weight <= 0.0 {
        return 0;
    }
    to_percentage(weighted / total_weight * 100.0)
}

/// Rounds to the nearest integer and clamps to 0..=100.
fn to_percentage(raw: f64) -> u32 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u32
}
