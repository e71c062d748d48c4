//! Generic ATS compatibility analysis (heuristic path).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::ResumeRecord;
use crate::scoring::composer::{assess_formatting, compose_ats_score};
use crate::scoring::keywords::{extract_keywords, match_ratio};
use crate::scoring::recommendations::{generate_recommendations, Deficiencies};
use crate::scoring::sections::{score_sections, Section, SectionReport};
use crate::scoring::signals::ContentSignals;
use crate::scoring::text::ScoringContext;

const KEYWORD_SUGGESTIONS: &[&str] = &[
    "Include industry-specific keywords throughout your resume",
    "Use keywords from job descriptions you're targeting",
    "Balance keyword usage to avoid over-optimization",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    /// Content density estimate, 0..=100.
    pub density: u32,
    /// Career keywords found in the resume; detected keywords when none were supplied.
    #[serde(default)]
    pub matched: Vec<String>,
    /// Career keywords absent from the resume.
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    pub ats_score: u32,
    pub section_analysis: Vec<SectionReport>,
    #[serde(default)]
    pub formatting_issues: Vec<String>,
    #[serde(default)]
    pub missing_sections: Vec<Section>,
    pub keyword_analysis: KeywordAnalysis,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub critical_issues: Vec<String>,
}

/// `min(100, content_length / 50)`, rounded.
pub fn keyword_density(content_length: usize) -> u32 {
    (content_length as f64 / 50.0).min(100.0).round() as u32
}

/// Runs the full heuristic ATS pipeline. Total and deterministic.
pub fn analyze_ats(
    resume: &ResumeRecord,
    template: &str,
    career_keywords: &BTreeSet<String>,
    min_content_length: usize,
) -> AtsAnalysis {
    let context = ScoringContext::new(resume, career_keywords.clone());
    let findings = score_sections(resume, &context.career_keywords);
    let formatting = assess_formatting(template, resume.content_length, min_content_length);
    let ats_score = compose_ats_score(&findings, &formatting);

    let (found, missing) = context.career_keyword_split();
    let career_alignment = (!career_keywords.is_empty()).then(|| {
        let found_set: BTreeSet<String> = found.iter().cloned().collect();
        match_ratio(&found_set, career_keywords)
    });

    let matched = if career_keywords.is_empty() {
        extract_keywords(&context.text).into_iter().collect()
    } else {
        found
    };

    let mut keyword_suggestions: Vec<String> = Vec::new();
    if !missing.is_empty() {
        let sample: Vec<&str> = missing.iter().take(5).map(String::as_str).collect();
        keyword_suggestions.push(format!(
            "Add your target keywords where relevant: {}",
            sample.join(", ")
        ));
    }
    keyword_suggestions.extend(KEYWORD_SUGGESTIONS.iter().map(|s| s.to_string()));

    let recommendations = generate_recommendations(&Deficiencies {
        missing_sections: &findings.missing_sections,
        signals: ContentSignals::from_resume(resume),
        job_alignment: None,
        missing_job_keywords: &[],
        career_alignment,
        missing_career_keywords: &missing,
    });

    debug!(
        ats_score,
        missing_sections = findings.missing_sections.len(),
        "ATS analysis complete"
    );

    AtsAnalysis {
        ats_score,
        section_analysis: findings.reports,
        formatting_issues: formatting.issues,
        missing_sections: findings.missing_sections,
        keyword_analysis: KeywordAnalysis {
            density: keyword_density(resume.content_length),
            matched,
            missing,
            suggestions: keyword_suggestions,
        },
        recommendations,
        critical_issues: findings.critical_issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::recommendations::{QUANTIFY_RECOMMENDATION, MAX_RECOMMENDATIONS};
    use crate::scoring::sections::DETAIL_SUGGESTION;
    use serde_json::{json, Value};

    fn kws(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn complete_payload() -> Value {
        json!({
            "personalInfo": {
                "fullName": "Jordan Example",
                "email": "jordan@example.com",
                "phone": "+1 555 010 9999",
                "location": "Austin, TX",
                "summary": "Backend engineer focused on reliable distributed systems and developer tooling."
            },
            "experience": [{
                "jobTitle": "Senior Software Engineer",
                "company": "Example Corp",
                "startDate": "2019-01",
                "endDate": "2024-01",
                "description": "Led a team of 6 engineers and reduced p99 latency by 40% across 12 services using Python.",
                "achievements": ["Cut infrastructure spend by $200k"]
            }],
            "education": [{
                "institution": "State University",
                "degree": "BSc",
                "field": "Computer Science",
                "startDate": "2012",
                "endDate": "2016"
            }],
            "skills": {
                "technical": ["Python", "SQL", "Docker", "Kubernetes", "AWS", "Go"],
                "soft": ["Mentoring"]
            }
        })
    }

    #[test]
    fn test_complete_resume_scores_100() {
        let resume = ResumeRecord::from_value(&complete_payload());
        assert!(resume.content_length >= 500, "{}", resume.content_length);
        let analysis = analyze_ats(&resume, "modern", &BTreeSet::new(), 500);
        assert_eq!(analysis.ats_score, 100);
        assert!(analysis.missing_sections.is_empty());
        assert!(analysis.formatting_issues.is_empty());
        assert!(!analysis.recommendations.iter().any(|r| r == QUANTIFY_RECOMMENDATION));
    }

    #[test]
    fn test_empty_experience_scenario() {
        let mut payload = complete_payload();
        payload["experience"] = json!([]);
        payload["personalInfo"]["summary"] = json!("");
        let resume = ResumeRecord::from_value(&payload);

        let analysis = analyze_ats(&resume, "modern", &BTreeSet::new(), 500);
        assert_eq!(analysis.missing_sections, vec![Section::Experience]);
        assert_eq!(
            analysis.critical_issues,
            vec!["Missing required section: experience".to_string()]
        );
        assert!(analysis.recommendations[0].starts_with("Add all required resume sections"));

        // Reference: same resume with a perfect experience entry.
        let full = analyze_ats(
            &ResumeRecord::from_value(&complete_payload()),
            "modern",
            &BTreeSet::new(),
            500,
        );
        assert!(analysis.ats_score <= full.ats_score - 20);
    }

    #[test]
    fn test_short_description_without_digit_triggers_metrics_advice() {
        let mut payload = complete_payload();
        payload["experience"][0]["description"] = json!("a".repeat(49));
        let analysis = analyze_ats(&ResumeRecord::from_value(&payload), "modern", &BTreeSet::new(), 500);
        let exp = &analysis.section_analysis[1];
        assert_eq!(exp.section, Section::Experience);
        assert!(exp.issues.iter().any(|i| i.contains("Description too short")));
        assert!(exp.suggestions.contains(&DETAIL_SUGGESTION.to_string()));
        assert!(analysis.recommendations.iter().any(|r| r == QUANTIFY_RECOMMENDATION));
    }

    #[test]
    fn test_fifty_char_description_with_digit_is_clean() {
        let mut payload = complete_payload();
        let description = format!("Led {} 7", "x".repeat(44));
        assert_eq!(description.chars().count(), 50);
        payload["experience"][0]["description"] = json!(description);
        let analysis = analyze_ats(&ResumeRecord::from_value(&payload), "modern", &BTreeSet::new(), 500);
        let exp = &analysis.section_analysis[1];
        assert!(exp.issues.is_empty());
        assert!(!analysis.recommendations.iter().any(|r| r == QUANTIFY_RECOMMENDATION));
    }

    #[test]
    fn test_creative_template_costs_exactly_10() {
        let resume = ResumeRecord::from_value(&complete_payload());
        let modern = analyze_ats(&resume, "modern", &BTreeSet::new(), 500);
        let creative = analyze_ats(&resume, "creative", &BTreeSet::new(), 500);
        assert_eq!(modern.ats_score - creative.ats_score, 10);
        assert_eq!(creative.formatting_issues.len(), 1);
    }

    #[test]
    fn test_career_keywords_partial_match() {
        let resume = ResumeRecord::from_value(&complete_payload());
        let analysis = analyze_ats(&resume, "modern", &kws(&["python", "react"]), 500);
        assert_eq!(analysis.keyword_analysis.matched, vec!["python".to_string()]);
        assert_eq!(analysis.keyword_analysis.missing, vec!["react".to_string()]);
        assert!(analysis.keyword_analysis.suggestions[0].contains("react"));
    }

    #[test]
    fn test_detected_keywords_reported_without_career_keywords() {
        let resume = ResumeRecord::from_value(&complete_payload());
        let analysis = analyze_ats(&resume, "modern", &BTreeSet::new(), 500);
        assert!(analysis.keyword_analysis.matched.contains(&"kubernetes".to_string()));
        assert!(analysis.keyword_analysis.missing.is_empty());
    }

    #[test]
    fn test_adversarial_inputs_stay_in_range() {
        let huge_experience: Vec<Value> = (0..500)
            .map(|_| json!({ "jobTitle": [[["deep"]]], "description": { "nested": true } }))
            .collect();
        let payloads = vec![
            json!({}),
            json!(null),
            json!([1, 2, 3]),
            json!({ "experience": huge_experience, "skills": "lots" }),
            json!({ "personalInfo": { "email": 42, "phone": ["5", "5"] } }),
        ];
        for payload in payloads {
            let resume = ResumeRecord::from_value(&payload);
            let analysis = analyze_ats(&resume, "creative", &kws(&["rust"]), 500);
            assert!(analysis.ats_score <= 100);
            assert!(analysis.recommendations.len() <= MAX_RECOMMENDATIONS);
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let resume = ResumeRecord::from_value(&complete_payload());
        let keywords = kws(&["python", "react", "kafka"]);
        let first = analyze_ats(&resume, "classic", &keywords, 500);
        let second = analyze_ats(&resume, "classic", &keywords, 500);
        assert_eq!(first, second);
    }

    #[test]
    fn test_keyword_density_capped_at_100() {
        assert_eq!(keyword_density(0), 0);
        assert_eq!(keyword_density(1000), 20);
        assert_eq!(keyword_density(1_000_000), 100);
    }

    #[test]
    fn test_serializes_client_field_names() {
        let resume = ResumeRecord::from_value(&json!({}));
        let value = serde_json::to_value(analyze_ats(&resume, "modern", &BTreeSet::new(), 500)).unwrap();
        for key in [
            "atsScore",
            "sectionAnalysis",
            "formattingIssues",
            "missingSections",
            "keywordAnalysis",
            "recommendations",
            "criticalIssues",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["missingSections"][0], "personalInfo");
    }
}
