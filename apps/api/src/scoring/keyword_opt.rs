//! Keyword optimization against an industry profile and, optionally, a job description.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::industry::IndustryProfile;
use crate::scoring::keywords::{extract_keywords, match_ratio, split_by_presence};

const MAX_MISSING_KEYWORDS: usize = 8;
const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordOptimization {
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    /// 1..=10, unlike the 0..=100 ATS score.
    pub ats_score: u32,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

pub fn optimize_keywords(
    content: &str,
    profile: &IndustryProfile,
    job_description: Option<&str>,
) -> KeywordOptimization {
    // Industry keywords keep their priority order; job keywords follow alphabetically.
    let mut ordered: Vec<String> = profile.keywords.iter().map(|k| k.to_string()).collect();
    if let Some(jd) = job_description {
        for keyword in extract_keywords(jd) {
            if !ordered.contains(&keyword) {
                ordered.push(keyword);
            }
        }
    }
    let reference: BTreeSet<String> = ordered.iter().cloned().collect();

    let haystack = content.to_lowercase();
    let (found, _) = split_by_presence(&reference, &haystack);
    let missing: Vec<String> = ordered
        .into_iter()
        .filter(|k| !found.contains(k))
        .take(MAX_MISSING_KEYWORDS)
        .collect();

    let ratio = match_ratio(&found, &reference);
    let ats_score = (1.0 + 9.0 * ratio).round().clamp(1.0, 10.0) as u32;

    let mut suggestions = Vec::new();
    if !missing.is_empty() {
        suggestions.push(format!(
            "Work these {} keywords into your experience and skills: {}",
            profile.label.to_lowercase(),
            missing.iter().take(4).cloned().collect::<Vec<_>>().join(", ")
        ));
    }
    if job_description.is_some() {
        suggestions.push("Mirror the exact phrasing used in the job description".to_string());
    }
    suggestions.push("Use standard section headings so ATS parsers can find your keywords".to_string());
    suggestions.push("Place the most important keywords in your summary and recent roles".to_string());
    suggestions.push("Spell out acronyms once alongside the short form".to_string());
    suggestions.truncate(MAX_SUGGESTIONS);

    KeywordOptimization {
        missing_keywords: missing,
        ats_score,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::industry::profile_for;

    #[test]
    fn test_empty_content_scores_one() {
        let result = optimize_keywords("", profile_for("technology"), None);
        assert_eq!(result.ats_score, 1);
        assert_eq!(result.missing_keywords.len(), MAX_MISSING_KEYWORDS);
        assert_eq!(result.missing_keywords[0], "agile");
        assert!((3..=MAX_SUGGESTIONS).contains(&result.suggestions.len()));
    }

    #[test]
    fn test_full_coverage_scores_ten() {
        let profile = profile_for("technology");
        let content = profile.keywords.join(" ");
        let result = optimize_keywords(&content, profile, None);
        assert_eq!(result.ats_score, 10);
        assert!(result.missing_keywords.is_empty());
        assert!(result.suggestions.len() >= 3);
    }

    #[test]
    fn test_job_description_keywords_are_appended() {
        let profile = profile_for("technology");
        let content = profile.keywords.join(" ");
        let result = optimize_keywords(&content, profile, Some("Must know Kafka"));
        assert_eq!(result.missing_keywords, vec!["kafka"]);
        assert!(result.ats_score < 10);
        assert!(result
            .suggestions
            .contains(&"Mirror the exact phrasing used in the job description".to_string()));
    }

    #[test]
    fn test_score_within_range() {
        let result = optimize_keywords("agile cloud api", profile_for("finance"), Some("sql"));
        assert!((1..=10).contains(&result.ats_score));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(optimize_keywords("", profile_for("tech"), None)).unwrap();
        assert!(json.get("missingKeywords").is_some());
        assert!(json.get("atsScore").is_some());
    }
}
