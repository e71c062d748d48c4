//! Industry-targeted optimization built from the static industry profiles.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::industry::{IndustryProfile, Priority};
use crate::models::resume::ResumeRecord;
use crate::scoring::signals::{has_action_verb, has_quantified_evidence};
use crate::scoring::text::extract_text;

const MAX_INDUSTRY_KEYWORDS: usize = 8;
const MAX_SKILL_GAPS: usize = 5;
const MAX_REFRAMES: usize = 3;
const OUTCOME_PLACEHOLDER: &str = "[quantified outcome, e.g. 20% faster]";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub importance: Priority,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceReframe {
    pub section: String,
    pub current: String,
    pub suggested: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub provider: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryOptimization {
    #[serde(default)]
    pub industry_keywords: Vec<String>,
    #[serde(default)]
    pub skills_gaps: Vec<SkillGap>,
    #[serde(default)]
    pub experience_reframing: Vec<ExperienceReframe>,
    #[serde(default)]
    pub industry_trends: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub networking_suggestions: Vec<String>,
    #[serde(default)]
    pub portfolio_recommendations: Vec<String>,
    #[serde(default)]
    pub interview_tips: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn reframe(index: usize, description: &str, role: &str) -> Option<ExperienceReframe> {
    let metrics = has_quantified_evidence(description);
    let verbs = has_action_verb(description);
    if metrics && verbs {
        return None;
    }
    let current = description.trim();
    let (suggested, reason) = match (metrics, verbs) {
        (false, false) => (
            format!("Delivered: {current}, resulting in {OUTCOME_PLACEHOLDER}"),
            "Lacks both an action verb and quantified impact",
        ),
        (false, true) => (
            format!("{current}, resulting in {OUTCOME_PLACEHOLDER}"),
            "Add a metric so the impact is concrete",
        ),
        _ => (format!("Delivered: {current}"), "Open with an action verb"),
    };
    Some(ExperienceReframe {
        section: format!("Experience {}", index + 1),
        current: current.to_string(),
        suggested,
        reason: format!("{reason}; frame it for a {role} role"),
    })
}

pub fn optimize_industry(
    resume: &ResumeRecord,
    profile: &IndustryProfile,
    role: &str,
    career_keywords: &BTreeSet<String>,
) -> IndustryOptimization {
    let text = extract_text(resume).to_lowercase();

    let mut industry_keywords: Vec<String> = profile
        .keywords
        .iter()
        .filter(|k| !text.contains(**k))
        .map(|k| k.to_string())
        .collect();
    for keyword in career_keywords {
        if !text.contains(keyword.as_str()) && !industry_keywords.contains(keyword) {
            industry_keywords.push(keyword.clone());
        }
    }
    industry_keywords.truncate(MAX_INDUSTRY_KEYWORDS);

    let skills_gaps = profile
        .core_skills
        .iter()
        .filter(|(skill, _)| !text.contains(*skill))
        .take(MAX_SKILL_GAPS)
        .map(|(skill, importance)| SkillGap {
            skill: skill.to_string(),
            importance: *importance,
            suggestion: format!(
                "Show {skill} through a project, course, or on-the-job example"
            ),
        })
        .collect();

    let experience_reframing = resume
        .experience
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.description.trim().is_empty())
        .filter_map(|(i, e)| reframe(i, &e.description, role))
        .take(MAX_REFRAMES)
        .collect();

    IndustryOptimization {
        industry_keywords,
        skills_gaps,
        experience_reframing,
        industry_trends: owned(profile.trends),
        certifications: profile
            .certifications
            .iter()
            .map(|c| Certification {
                name: c.name.to_string(),
                provider: c.provider.to_string(),
                priority: c.priority,
            })
            .collect(),
        networking_suggestions: owned(profile.networking),
        portfolio_recommendations: owned(profile.portfolio),
        interview_tips: profile
            .interview_tips
            .iter()
            .map(|t| t.replace("{role}", role))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::industry::profile_for;
    use crate::models::resume::Experience;

    fn with_descriptions(descriptions: &[&str]) -> ResumeRecord {
        ResumeRecord {
            experience: descriptions
                .iter()
                .map(|d| Experience {
                    description: d.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_resume_lists_profile_gaps() {
        let profile = profile_for("technology");
        let result = optimize_industry(&ResumeRecord::default(), profile, "Backend Engineer", &BTreeSet::new());
        assert_eq!(result.industry_keywords.len(), MAX_INDUSTRY_KEYWORDS);
        assert_eq!(result.industry_keywords[0], "agile");
        assert_eq!(result.skills_gaps.len(), MAX_SKILL_GAPS);
        assert_eq!(result.skills_gaps[0].skill, "cloud");
        assert_eq!(result.skills_gaps[0].importance, Priority::High);
        assert!(result.experience_reframing.is_empty());
        assert!(result.interview_tips.iter().any(|t| t.contains("Backend Engineer")));
        assert!(result.interview_tips.iter().all(|t| !t.contains("{role}")));
    }

    #[test]
    fn test_present_keywords_are_not_suggested() {
        let resume = with_descriptions(&["Agile team, cloud and api work"]);
        let result = optimize_industry(&resume, profile_for("technology"), "Engineer", &BTreeSet::new());
        assert!(!result.industry_keywords.contains(&"agile".to_string()));
        assert!(!result.industry_keywords.contains(&"cloud".to_string()));
        assert!(result.skills_gaps.iter().all(|g| g.skill != "cloud"));
    }

    #[test]
    fn test_reframing_targets_weak_entries_only() {
        let resume = with_descriptions(&[
            "Led migration that reduced costs by 30%",
            "Worked on reports",
            "Managed the helpdesk queue",
        ]);
        let result = optimize_industry(&resume, profile_for("finance"), "Analyst", &BTreeSet::new());
        assert_eq!(result.experience_reframing.len(), 2);
        assert_eq!(result.experience_reframing[0].section, "Experience 2");
        assert_eq!(result.experience_reframing[0].current, "Worked on reports");
        assert_eq!(result.experience_reframing[1].section, "Experience 3");
    }

    #[test]
    fn test_reframing_capped() {
        let resume = with_descriptions(&["a", "b", "c", "d", "e"]);
        let result = optimize_industry(&resume, profile_for("education"), "Teacher", &BTreeSet::new());
        assert_eq!(result.experience_reframing.len(), MAX_REFRAMES);
    }

    #[test]
    fn test_missing_career_keywords_are_appended() {
        let profile = profile_for("technology");
        let mut text = profile.keywords.join(" ");
        text.push_str(" rust");
        let resume = with_descriptions(&[&text]);
        let career: BTreeSet<String> = ["rust", "kafka"].iter().map(|s| s.to_string()).collect();
        let result = optimize_industry(&resume, profile, "Engineer", &career);
        assert_eq!(result.industry_keywords, vec!["kafka"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = optimize_industry(&ResumeRecord::default(), profile_for("marketing"), "Manager", &BTreeSet::new());
        let json = serde_json::to_value(result).unwrap();
        for key in [
            "industryKeywords",
            "skillsGaps",
            "experienceReframing",
            "industryTrends",
            "certifications",
            "networkingSuggestions",
            "portfolioRecommendations",
            "interviewTips",
        ] {
            assert!(json.get(key).is_some(), "{key}");
        }
        assert_eq!(json["skillsGaps"][0]["importance"], "high");
    }
}
