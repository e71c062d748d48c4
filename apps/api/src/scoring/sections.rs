//! Section scorer: a stateless rule table over the four required resume sections.
//!
//! Each section starts at 100 and loses points per failed check; the result is clamped
//! to 0..=100. A missing section scores 0, lands in `missing_sections` and raises exactly
//! one critical issue. Education is only checked for presence.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::resume::{Experience, PersonalInfo, ResumeRecord, Skills};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    PersonalInfo,
    Experience,
    Education,
    Skills,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::PersonalInfo => "personalInfo",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const REQUIRED_SECTIONS: [Section; 4] = [
    Section::PersonalInfo,
    Section::Experience,
    Section::Education,
    Section::Skills,
];

const INVALID_EMAIL_PENALTY: i32 = 20;
const INVALID_PHONE_PENALTY: i32 = 15;
const MIN_PHONE_LENGTH: usize = 10;
const SHORT_FIELD_PENALTY: i32 = 10;
const MIN_FIELD_LENGTH: usize = 2;
const SHORT_DESCRIPTION_PENALTY: i32 = 15;
pub const MIN_DESCRIPTION_LENGTH: usize = 50;
const CAREER_KEYWORD_ABSENT_PENALTY: i32 = 5;
const FEW_SKILLS_PENALTY: i32 = 10;
const MIN_SKILL_COUNT: usize = 5;
const SKILL_ALIGNMENT_PENALTY: i32 = 10;
const MIN_SKILL_KEYWORD_COVERAGE: f64 = 0.3;

pub const DETAIL_SUGGESTION: &str = "Add detailed job descriptions with quantifiable achievements";

/// Score and findings for one section, in the shape the client renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReport {
    pub section: Section,
    pub score: u32,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Output of one pass over all required sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionFindings {
    pub reports: Vec<SectionReport>,
    pub missing_sections: Vec<Section>,
    pub critical_issues: Vec<String>,
}

/// Running tally for one section. Suggestions are deduplicated, issues are not.
struct Tally {
    score: i32,
    issues: Vec<String>,
    suggestions: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            score: 100,
            issues: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    fn deduct(&mut self, points: i32, issue: impl Into<String>) {
        self.score -= points;
        self.issues.push(issue.into());
    }

    fn suggest(&mut self, suggestion: impl Into<String>) {
        let suggestion = suggestion.into();
        if !self.suggestions.contains(&suggestion) {
            self.suggestions.push(suggestion);
        }
    }

    fn finish(self, section: Section) -> SectionReport {
        SectionReport {
            section,
            score: self.score.clamp(0, 100) as u32,
            issues: self.issues,
            suggestions: self.suggestions,
        }
    }
}

/// Scores every required section of `resume`.
///
/// `career_keywords` may be empty, in which case the keyword-alignment checks are skipped.
pub fn score_sections(resume: &ResumeRecord, career_keywords: &BTreeSet<String>) -> SectionFindings {
    let mut findings = SectionFindings::default();

    for section in REQUIRED_SECTIONS {
        let report = match section {
            Section::PersonalInfo => resume.personal_info.as_ref().map(score_personal_info),
            Section::Experience => Some(&resume.experience)
                .filter(|entries| !entries.is_empty())
                .map(|entries| score_experience(entries, career_keywords)),
            Section::Education => {
                Some(&resume.education)
                    .filter(|entries| !entries.is_empty())
                    .map(|_| Tally::new().finish(Section::Education))
            }
            Section::Skills => resume
                .skills
                .as_ref()
                .filter(|_| !resume.skills_missing())
                .map(|skills| score_skills(skills, career_keywords)),
        };

        let report = report.unwrap_or_else(|| {
            findings.missing_sections.push(section);
            findings
                .critical_issues
                .push(format!("Missing required section: {section}"));
            SectionReport {
                section,
                score: 0,
                issues: Vec::new(),
                suggestions: Vec::new(),
            }
        });

        // Section-level critical issues (e.g. bad email) follow the missing-section one.
        if section == Section::PersonalInfo
            && report.issues.iter().any(|i| i == INVALID_EMAIL_ISSUE)
        {
            findings
                .critical_issues
                .push("Valid email address is required".to_string());
        }

        findings.reports.push(report);
    }

    findings
}

const INVALID_EMAIL_ISSUE: &str = "Missing or invalid email address";

fn score_personal_info(info: &PersonalInfo) -> SectionReport {
    let mut tally = Tally::new();

    if !info.email.contains('@') {
        tally.deduct(INVALID_EMAIL_PENALTY, INVALID_EMAIL_ISSUE);
    }
    if info.phone.chars().count() < MIN_PHONE_LENGTH {
        tally.deduct(INVALID_PHONE_PENALTY, "Missing or invalid phone number");
    }

    tally.finish(Section::PersonalInfo)
}

fn score_experience(entries: &[Experience], career_keywords: &BTreeSet<String>) -> SectionReport {
    let mut tally = Tally::new();

    for (index, exp) in entries.iter().enumerate() {
        let n = index + 1;

        if exp.job_title.chars().count() < MIN_FIELD_LENGTH {
            tally.deduct(
                SHORT_FIELD_PENALTY,
                format!("Experience {n}: Missing or too short job title"),
            );
        }
        if exp.company.chars().count() < MIN_FIELD_LENGTH {
            tally.deduct(
                SHORT_FIELD_PENALTY,
                format!("Experience {n}: Missing or too short company name"),
            );
        }
        if exp.description.chars().count() < MIN_DESCRIPTION_LENGTH {
            tally.deduct(
                SHORT_DESCRIPTION_PENALTY,
                format!("Experience {n}: Description too short or missing"),
            );
            tally.suggest(DETAIL_SUGGESTION);
        }

        if !career_keywords.is_empty() {
            let description = exp.description.to_lowercase();
            let mentions_any = career_keywords
                .iter()
                .any(|kw| description.contains(kw.as_str()));
            if !mentions_any {
                tally.score -= CAREER_KEYWORD_ABSENT_PENALTY;
                let sample: Vec<&str> = career_keywords.iter().take(3).map(String::as_str).collect();
                tally.suggest(format!(
                    "Experience {n}: Mention your target keywords ({}) where they genuinely apply",
                    sample.join(", ")
                ));
            }
        }
    }

    tally.finish(Section::Experience)
}

fn score_skills(skills: &Skills, career_keywords: &BTreeSet<String>) -> SectionReport {
    let mut tally = Tally::new();

    if skills.total() < MIN_SKILL_COUNT {
        tally.deduct(FEW_SKILLS_PENALTY, "Too few skills listed");
        tally.suggest("Add more relevant technical and soft skills");
    }

    if !career_keywords.is_empty() {
        let names: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
        let (represented, absent): (Vec<&String>, Vec<&String>) = career_keywords
            .iter()
            .partition(|kw| names.iter().any(|name| name.contains(kw.as_str())));
        let coverage = represented.len() as f64 / career_keywords.len() as f64;

        if coverage < MIN_SKILL_KEYWORD_COVERAGE {
            tally.score -= SKILL_ALIGNMENT_PENALTY;
            let sample: Vec<&str> = absent.iter().take(5).map(|s| s.as_str()).collect();
            tally.suggest(format!(
                "List skills that reflect your career goals: {}",
                sample.join(", ")
            ));
        }
    }

    tally.finish(Section::Skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Education;

    fn keywords(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn experience(title: &str, company: &str, description: &str) -> Experience {
        Experience {
            job_title: title.to_string(),
            company: company.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn skills(n: usize) -> Skills {
        Skills {
            technical: (0..n).map(|i| format!("skill{i}")).collect(),
            ..Default::default()
        }
    }

    fn complete_resume() -> ResumeRecord {
        ResumeRecord {
            personal_info: Some(PersonalInfo {
                full_name: "Grace Hopper".to_string(),
                email: "grace@navy.mil".to_string(),
                phone: "555-123-4567".to_string(),
                ..Default::default()
            }),
            experience: vec![experience(
                "Rear Admiral",
                "US Navy",
                "Developed the first compiler and led 12 engineers through the COBOL standard.",
            )],
            education: vec![Education {
                institution: "Yale".to_string(),
                degree: "PhD".to_string(),
                ..Default::default()
            }],
            skills: Some(skills(6)),
            content_length: 0,
        }
    }

    fn report(findings: &SectionFindings, section: Section) -> &SectionReport {
        findings
            .reports
            .iter()
            .find(|r| r.section == section)
            .unwrap()
    }

    #[test]
    fn test_complete_resume_scores_full_marks() {
        let findings = score_sections(&complete_resume(), &BTreeSet::new());
        assert!(findings.missing_sections.is_empty());
        assert!(findings.critical_issues.is_empty());
        assert!(findings.reports.iter().all(|r| r.score == 100));
        assert_eq!(findings.reports.len(), 4);
    }

    #[test]
    fn test_every_missing_section_reported_once() {
        let findings = score_sections(&ResumeRecord::default(), &BTreeSet::new());
        assert_eq!(findings.missing_sections, REQUIRED_SECTIONS.to_vec());
        assert_eq!(findings.critical_issues.len(), 4);
        for section in REQUIRED_SECTIONS {
            let matching = findings
                .critical_issues
                .iter()
                .filter(|i| i.ends_with(section.as_str()))
                .count();
            assert_eq!(matching, 1, "{section}");
            assert_eq!(report(&findings, section).score, 0);
        }
    }

    #[test]
    fn test_invalid_email_is_critical() {
        let mut resume = complete_resume();
        resume.personal_info.as_mut().unwrap().email = "grace.navy.mil".to_string();
        let findings = score_sections(&resume, &BTreeSet::new());
        assert_eq!(report(&findings, Section::PersonalInfo).score, 80);
        assert_eq!(
            findings.critical_issues,
            vec!["Valid email address is required".to_string()]
        );
    }

    #[test]
    fn test_short_phone_deducts_15() {
        let mut resume = complete_resume();
        resume.personal_info.as_mut().unwrap().phone = "555-1234".to_string();
        let findings = score_sections(&resume, &BTreeSet::new());
        assert_eq!(report(&findings, Section::PersonalInfo).score, 85);
        assert!(findings.critical_issues.is_empty());
    }

    #[test]
    fn test_empty_personal_info_is_present_but_penalised() {
        let mut resume = complete_resume();
        resume.personal_info = Some(PersonalInfo::default());
        let findings = score_sections(&resume, &BTreeSet::new());
        assert!(!findings.missing_sections.contains(&Section::PersonalInfo));
        assert_eq!(report(&findings, Section::PersonalInfo).score, 65);
    }

    #[test]
    fn test_description_of_49_chars_is_too_short() {
        let description = "a".repeat(49);
        let mut resume = complete_resume();
        resume.experience = vec![experience("Engineer", "Acme", &description)];
        let findings = score_sections(&resume, &BTreeSet::new());
        let exp = report(&findings, Section::Experience);
        assert_eq!(exp.score, 85);
        assert!(exp.issues[0].contains("Description too short"));
        assert_eq!(exp.suggestions, vec![DETAIL_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_description_of_50_chars_passes() {
        let description = format!("{}1", "a".repeat(49));
        let mut resume = complete_resume();
        resume.experience = vec![experience("Engineer", "Acme", &description)];
        let findings = score_sections(&resume, &BTreeSet::new());
        let exp = report(&findings, Section::Experience);
        assert_eq!(exp.score, 100);
        assert!(exp.issues.is_empty());
    }

    #[test]
    fn test_short_title_and_company_each_deduct_10() {
        let mut resume = complete_resume();
        resume.experience = vec![experience("X", "", &"d".repeat(60))];
        let findings = score_sections(&resume, &BTreeSet::new());
        assert_eq!(report(&findings, Section::Experience).score, 80);
    }

    #[test]
    fn test_experience_score_never_negative() {
        let mut resume = complete_resume();
        resume.experience = (0..10).map(|_| experience("", "", "")).collect();
        let findings = score_sections(&resume, &keywords(&["rust"]));
        let exp = report(&findings, Section::Experience);
        assert_eq!(exp.score, 0);
        assert_eq!(exp.issues.len(), 30);
        // Suggestion text is per-entry for keywords, shared for detail.
        assert_eq!(
            exp.suggestions
                .iter()
                .filter(|s| s.as_str() == DETAIL_SUGGESTION)
                .count(),
            1
        );
    }

    #[test]
    fn test_missing_career_keywords_in_description_deducts_5() {
        let mut resume = complete_resume();
        resume.experience = vec![experience("Engineer", "Acme", &"Wrote Java services ".repeat(3))];
        let findings = score_sections(&resume, &keywords(&["python", "react"]));
        let exp = report(&findings, Section::Experience);
        assert_eq!(exp.score, 95);
        assert!(exp.issues.is_empty());
        assert!(exp.suggestions[0].contains("python"));
    }

    #[test]
    fn test_one_career_keyword_in_description_is_enough() {
        let mut resume = complete_resume();
        resume.experience = vec![experience(
            "Engineer",
            "Acme",
            "Built data pipelines in Python for the analytics team at scale",
        )];
        let findings = score_sections(&resume, &keywords(&["python", "react"]));
        assert_eq!(report(&findings, Section::Experience).score, 100);
    }

    #[test]
    fn test_few_skills_deducts_10() {
        let mut resume = complete_resume();
        resume.skills = Some(skills(4));
        let findings = score_sections(&resume, &BTreeSet::new());
        let sk = report(&findings, Section::Skills);
        assert_eq!(sk.score, 90);
        assert_eq!(sk.issues, vec!["Too few skills listed".to_string()]);
    }

    #[test]
    fn test_skill_keyword_coverage_below_30_percent() {
        let mut resume = complete_resume();
        resume.skills = Some(Skills {
            technical: vec!["Python 3".into(), "Go".into(), "SQL".into(), "Bash".into(), "C".into()],
            ..Default::default()
        });
        // 1 of 4 represented = 25%
        let findings = score_sections(&resume, &keywords(&["python", "react", "kafka", "spark"]));
        let sk = report(&findings, Section::Skills);
        assert_eq!(sk.score, 90);
        assert!(sk.suggestions[0].contains("kafka"));
        assert!(!sk.suggestions[0].contains("python"));

        // 2 of 4 represented = 50%
        let findings = score_sections(&resume, &keywords(&["python", "sql", "kafka", "spark"]));
        assert_eq!(report(&findings, Section::Skills).score, 100);
    }

    #[test]
    fn test_empty_skills_are_missing() {
        let mut resume = complete_resume();
        resume.skills = Some(Skills::default());
        assert!(resume.skills_missing());
        let findings = score_sections(&resume, &BTreeSet::new());
        assert_eq!(findings.missing_sections, vec![Section::Skills]);
    }

    #[test]
    fn test_education_has_no_field_checks() {
        let mut resume = complete_resume();
        resume.education = vec![Education::default()];
        let findings = score_sections(&resume, &BTreeSet::new());
        assert_eq!(report(&findings, Section::Education).score, 100);
    }

    #[test]
    fn test_section_serializes_camel_case() {
        let json = serde_json::to_string(&Section::PersonalInfo).unwrap();
        assert_eq!(json, "\"personalInfo\"");
    }
}
