//! Text extraction: flattens a resume into one searchable blob and tokenizes career keywords.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::models::resume::ResumeRecord;

/// Concatenates every textual field in a fixed order, space-separated:
/// summary, each role's title + company + description, each skill name,
/// each education's degree + institution + field.
///
/// Absent fields contribute empty strings. Casing is preserved; callers lowercase as needed.
pub fn extract_text(resume: &ResumeRecord) -> String {
    let mut parts: Vec<&str> = vec![resume.summary()];

    for exp in &resume.experience {
        parts.extend([
            exp.job_title.as_str(),
            exp.company.as_str(),
            exp.description.as_str(),
        ]);
    }

    if let Some(skills) = &resume.skills {
        parts.extend(skills.iter().map(String::as_str));
    }

    for edu in &resume.education {
        parts.extend([
            edu.degree.as_str(),
            edu.institution.as_str(),
            edu.field.as_str(),
        ]);
    }

    parts.join(" ")
}

/// Splits free text on non-alphanumeric boundaries into a lowercase keyword set.
pub fn tokenize_keywords(raw: &str) -> BTreeSet<String> {
    raw.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Resolves the career keyword set for a request.
///
/// A request-level `careerKeywords` (string or list of strings) wins; otherwise the
/// resume's own `personalInfo.careerKeywords` is used.
pub fn resolve_career_keywords(
    request_keywords: Option<&Value>,
    resume: &ResumeRecord,
) -> BTreeSet<String> {
    let from_request = match request_keywords {
        Some(Value::String(s)) => tokenize_keywords(s),
        Some(Value::Array(items)) => {
            let joined: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            tokenize_keywords(&joined.join(","))
        }
        _ => BTreeSet::new(),
    };

    if !from_request.is_empty() {
        return from_request;
    }

    resume
        .personal_info
        .as_ref()
        .map(|p| tokenize_keywords(&p.career_keywords))
        .unwrap_or_default()
}

/// Per-request scoring context. Built once, dropped with the response.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    /// Lowercased output of `extract_text`.
    pub text: String,
    pub career_keywords: BTreeSet<String>,
}

impl ScoringContext {
    pub fn new(resume: &ResumeRecord, career_keywords: BTreeSet<String>) -> Self {
        Self {
            text: extract_text(resume).to_lowercase(),
            career_keywords,
        }
    }

    /// Career keywords that occur (as substrings) in the resume text, and those that don't.
    pub fn career_keyword_split(&self) -> (Vec<String>, Vec<String>) {
        self.career_keywords
            .iter()
            .cloned()
            .partition(|kw| self.text.contains(kw.as_str()))
    }
}
