//! Recommendation generator: maps detected deficiencies to suggestion strings.
//!
//! Single pass, fixed priority: missing sections first, then keyword gaps, then content
//! quality, then general advice to fill the list. Deduplicated, capped at six.

use crate::scoring::sections::Section;
use crate::scoring::signals::ContentSignals;

pub const MAX_RECOMMENDATIONS: usize = 6;
/// Keyword alignment below this ratio is flagged.
pub const LOW_ALIGNMENT_THRESHOLD: f64 = 0.5;

pub const ADD_SECTIONS_PREFIX: &str = "Add all required resume sections";
pub const QUANTIFY_RECOMMENDATION: &str =
    "Quantify achievements with specific numbers and metrics";
pub const ACTION_VERB_RECOMMENDATION: &str =
    "Start experience descriptions with strong action verbs such as led, developed or improved";

const GENERAL_RECOMMENDATIONS: &[&str] = &[
    "Use standard section headings (Experience, Education, Skills)",
    "Save resume in PDF format for best ATS compatibility",
    "Use simple, clean formatting without complex layouts",
    "Include relevant keywords naturally in your content",
];

/// Everything the generator looks at. Ratios are `None` when no reference keywords were given.
#[derive(Debug, Clone, Default)]
pub struct Deficiencies<'a> {
    pub missing_sections: &'a [Section],
    pub signals: ContentSignals,
    pub job_alignment: Option<f64>,
    pub missing_job_keywords: &'a [String],
    pub career_alignment: Option<f64>,
    pub missing_career_keywords: &'a [String],
}

pub fn generate_recommendations(deficiencies: &Deficiencies<'_>) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !deficiencies.missing_sections.is_empty() {
        let names: Vec<&str> = deficiencies
            .missing_sections
            .iter()
            .map(Section::as_str)
            .collect();
        recommendations.push(format!("{ADD_SECTIONS_PREFIX}: {}", names.join(", ")));
    }

    if is_low(deficiencies.job_alignment) && !deficiencies.missing_job_keywords.is_empty() {
        recommendations.push(format!(
            "Work these job description keywords into your resume: {}",
            top(deficiencies.missing_job_keywords, 3)
        ));
    }

    if is_low(deficiencies.career_alignment) && !deficiencies.missing_career_keywords.is_empty() {
        recommendations.push(format!(
            "Align your resume with your career goals by highlighting: {}",
            top(deficiencies.missing_career_keywords, 3)
        ));
    }

    let signals = deficiencies.signals;
    if signals.has_experience && !signals.quantified {
        recommendations.push(QUANTIFY_RECOMMENDATION.to_string());
    }
    if signals.has_experience && !signals.action_verbs {
        recommendations.push(ACTION_VERB_RECOMMENDATION.to_string());
    }

    recommendations.extend(GENERAL_RECOMMENDATIONS.iter().map(|r| r.to_string()));

    let mut unique: Vec<String> = Vec::with_capacity(MAX_RECOMMENDATIONS);
    for recommendation in recommendations {
        if unique.len() == MAX_RECOMMENDATIONS {
            break;
        }
        if !unique.contains(&recommendation) {
            unique.push(recommendation);
        }
    }
    unique
}

fn is_low(ratio: Option<f64>) -> bool {
    ratio.is_some_and(|r| r < LOW_ALIGNMENT_THRESHOLD)
}

fn top(keywords: &[String], n: usize) -> String {
    keywords
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
