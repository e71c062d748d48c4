//! Job-description match analysis (heuristic path).
//!
//! Reference keywords come from the posting: entries of `COMMON_SKILLS` it mentions plus
//! everything `extract_keywords` finds. The score blends requirement coverage (60%),
//! career-goal alignment (25%) and a content-quality heuristic (15%).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::ResumeRecord;
use crate::scoring::composer::{compose_match_score, MatchWeights};
use crate::scoring::keywords::{extract_keywords, find_listed, match_ratio, split_by_presence, COMMON_SKILLS};
use crate::scoring::recommendations::{generate_recommendations, Deficiencies};
use crate::scoring::sections::{score_sections, SectionReport};
use crate::scoring::signals::ContentSignals;
use crate::scoring::text::extract_text;

const MAX_MATCHING_SKILLS: usize = 8;
const MAX_MISSING_REQUIREMENTS: usize = 6;
const MAX_KEYWORDS_TO_ADD: usize = 5;
const MAX_SUGGESTIONS: usize = 5;
/// Requirement coverage assumed when the posting yields no recognisable keywords.
const NEUTRAL_REQUIREMENT_MATCH: f64 = 0.5;

/// What the caller supplied as "the resume".
#[derive(Debug, Clone)]
pub enum ResumeInput {
    Structured(ResumeRecord),
    /// Pre-flattened text, as the browser's job matcher sends it.
    PlainText(String),
}

impl ResumeInput {
    pub fn text(&self) -> String {
        match self {
            ResumeInput::Structured(resume) => extract_text(resume),
            ResumeInput::PlainText(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchAnalysis {
    pub match_percentage: u32,
    #[serde(default)]
    pub matching_skills: Vec<String>,
    #[serde(default)]
    pub missing_requirements: Vec<String>,
    #[serde(default)]
    pub keywords_to_add: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Per-section scores; empty for plain-text input.
    #[serde(default)]
    pub section_analysis: Vec<SectionReport>,
}

/// Keywords the posting asks for.
pub fn job_keywords(job_description: &str) -> BTreeSet<String> {
    let mut keywords = find_listed(&job_description.to_lowercase(), COMMON_SKILLS);
    keywords.extend(extract_keywords(job_description));
    keywords
}

/// Share of quality signals satisfied. Plain text can only show metrics and action verbs.
fn content_quality(signals: &ContentSignals, structured: Option<bool>) -> f64 {
    let mut checks = vec![signals.quantified, signals.action_verbs];
    if let Some(complete) = structured {
        checks.push(signals.has_summary);
        checks.push(complete);
    }
    checks.iter().filter(|&&ok| ok).count() as f64 / checks.len() as f64
}

pub fn analyze_job_match(
    input: &ResumeInput,
    job_description: &str,
    career_keywords: &BTreeSet<String>,
) -> JobMatchAnalysis {
    let resume_text = input.text().to_lowercase();
    let required = job_keywords(job_description);
    let (matched, missing) = split_by_presence(&required, &resume_text);

    let requirement_match = if required.is_empty() {
        NEUTRAL_REQUIREMENT_MATCH
    } else {
        match_ratio(&matched, &required)
    };

    let (found_career, missing_career) = split_by_presence(career_keywords, &resume_text);
    let career_alignment =
        (!career_keywords.is_empty()).then(|| match_ratio(&found_career, career_keywords));

    let (signals, findings) = match input {
        ResumeInput::Structured(resume) => (
            ContentSignals::from_resume(resume),
            Some(score_sections(resume, career_keywords)),
        ),
        ResumeInput::PlainText(text) => (ContentSignals::from_text(text), None),
    };
    let complete = findings.as_ref().map(|f| f.missing_sections.is_empty());

    let match_percentage = compose_match_score(
        requirement_match,
        career_alignment,
        content_quality(&signals, complete),
        &MatchWeights::default(),
    );

    let missing: Vec<String> = missing.into_iter().collect();
    let missing_career: Vec<String> = missing_career.into_iter().collect();
    let missing_sections = findings
        .as_ref()
        .map(|f| f.missing_sections.clone())
        .unwrap_or_default();

    let mut suggestions = generate_recommendations(&Deficiencies {
        missing_sections: &missing_sections,
        signals,
        job_alignment: (!required.is_empty()).then_some(requirement_match),
        missing_job_keywords: &missing,
        career_alignment,
        missing_career_keywords: &missing_career,
    });
    suggestions.truncate(MAX_SUGGESTIONS);

    debug!(match_percentage, required = required.len(), "job match analysis complete");

    JobMatchAnalysis {
        match_percentage,
        matching_skills: matched.into_iter().take(MAX_MATCHING_SKILLS).collect(),
        missing_requirements: missing.iter().take(MAX_MISSING_REQUIREMENTS).cloned().collect(),
        keywords_to_add: missing.iter().take(MAX_KEYWORDS_TO_ADD).cloned().collect(),
        suggestions,
        section_analysis: findings.map(|f| f.reports).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, PersonalInfo, Skills};

    fn kws(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn structured(description: &str) -> ResumeInput {
        ResumeInput::Structured(ResumeRecord {
            personal_info: Some(PersonalInfo {
                email: "a@b.co".to_string(),
                phone: "5550001111".to_string(),
                summary: "Engineer".to_string(),
                ..Default::default()
            }),
            experience: vec![Experience {
                job_title: "Engineer".to_string(),
                company: "Acme".to_string(),
                description: description.to_string(),
                ..Default::default()
            }],
            education: vec![Default::default()],
            skills: Some(Skills {
                technical: vec!["SQL".into(), "Git".into(), "Docker".into(), "Linux".into(), "Bash".into()],
                ..Default::default()
            }),
            content_length: 0,
        })
    }

    #[test]
    fn test_job_keywords_union_of_list_and_patterns() {
        let kws = job_keywords("We need Python, Kubernetes and strong communication. 3+ years experience.");
        assert!(kws.contains("python"));
        assert!(kws.contains("kubernetes"));
        assert!(kws.contains("communication"));
        assert!(kws.contains("3+ years experience"));
    }

    #[test]
    fn test_full_coverage_perfect_resume_scores_100() {
        let input = structured("Led 4 engineers building Python services on Kubernetes");
        let analysis = analyze_job_match(&input, "Python and Kubernetes", &BTreeSet::new());
        assert_eq!(analysis.match_percentage, 100);
        assert_eq!(analysis.matching_skills, vec!["kubernetes", "python"]);
        assert!(analysis.missing_requirements.is_empty());
        assert_eq!(analysis.section_analysis.len(), 4);
    }

    #[test]
    fn test_career_keywords_one_of_two() {
        let input = structured("Led 4 engineers building Python services on Kubernetes");
        // requirement 1.0, career 0.5, quality 1.0 → 0.6 + 0.125 + 0.15 = 0.875
        let analysis = analyze_job_match(&input, "Python and Kubernetes", &kws(&["python", "react"]));
        assert_eq!(analysis.match_percentage, 88);
    }

    #[test]
    fn test_missing_requirements_and_suggestion() {
        let input = structured("Led 4 engineers building Python services");
        let analysis = analyze_job_match(&input, "Python, Kafka and Terraform", &BTreeSet::new());
        assert_eq!(analysis.missing_requirements, vec!["kafka", "terraform"]);
        assert_eq!(analysis.keywords_to_add, vec!["kafka", "terraform"]);
        assert_eq!(
            analysis.suggestions[0],
            "Work these job description keywords into your resume: kafka, terraform"
        );
        assert!(analysis.suggestions.len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn test_no_recognisable_requirements_is_neutral() {
        let input = ResumeInput::PlainText("wrote things".to_string());
        let analysis = analyze_job_match(&input, "Be nice", &BTreeSet::new());
        // (0.6*0.5 + 0.15*0.0) / 0.75 = 0.4
        assert_eq!(analysis.match_percentage, 40);
        assert!(analysis.section_analysis.is_empty());
    }

    #[test]
    fn test_plain_text_input() {
        let input = ResumeInput::PlainText("Developed React apps, improved load time by 30%".to_string());
        let analysis = analyze_job_match(&input, "React developer", &BTreeSet::new());
        assert_eq!(analysis.matching_skills, vec!["react"]);
        assert_eq!(analysis.match_percentage, 100);
    }

    #[test]
    fn test_caps_are_respected() {
        let jd = "javascript react node.js python sql git agile scrum leadership management \
                  communication teamwork kafka terraform docker";
        let analysis = analyze_job_match(&ResumeInput::PlainText(String::new()), jd, &BTreeSet::new());
        assert!(analysis.matching_skills.is_empty());
        assert_eq!(analysis.missing_requirements.len(), MAX_MISSING_REQUIREMENTS);
        assert_eq!(analysis.keywords_to_add.len(), MAX_KEYWORDS_TO_ADD);
        assert_eq!(analysis.match_percentage, 0);
    }
}
