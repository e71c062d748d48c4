use serde::{Deserialize, Serialize};

use crate::models::resume::{Education, Experience, PersonalInfo, ResumeRecord, Skills};

/// Education is optional, so an empty list still earns partial credit.
const EMPTY_EDUCATION_SCORE: u32 = 50;

const PERSONAL_TIP_BELOW: u32 = 100;
const EXPERIENCE_TIP_BELOW: u32 = 80;
const SKILLS_TIP_BELOW: u32 = 75;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCompletion {
    pub personal_info: u32,
    pub experience: u32,
    pub education: u32,
    pub skills: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessReport {
    pub sections: SectionCompletion,
    /// Rounded mean of the four section percentages.
    pub overall_score: u32,
    pub tips: Vec<String>,
}

fn percentage(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (done as f64 / total as f64 * 100.0).round() as u32
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn personal_completion(info: Option<&PersonalInfo>) -> u32 {
    let Some(info) = info else { return 0 };
    let fields = [
        &info.full_name,
        &info.email,
        &info.phone,
        &info.location,
        &info.summary,
    ];
    percentage(fields.iter().filter(|f| filled(f)).count(), fields.len())
}

fn experience_completion(entries: &[Experience]) -> u32 {
    if entries.is_empty() {
        return 0;
    }
    let done: usize = entries
        .iter()
        .map(|e| {
            [
                filled(&e.job_title),
                filled(&e.company),
                filled(&e.description),
                !e.achievements.is_empty(),
            ]
            .iter()
            .filter(|&&ok| ok)
            .count()
        })
        .sum();
    percentage(done, entries.len() * 4)
}

fn education_completion(entries: &[Education]) -> u32 {
    if entries.is_empty() {
        return EMPTY_EDUCATION_SCORE;
    }
    let done: usize = entries
        .iter()
        .map(|e| {
            [
                filled(&e.degree),
                filled(&e.field),
                filled(&e.institution),
                filled(&e.start_date) && filled(&e.end_date),
            ]
            .iter()
            .filter(|&&ok| ok)
            .count()
        })
        .sum();
    percentage(done, entries.len() * 4)
}

fn skills_completion(skills: Option<&Skills>) -> u32 {
    let Some(skills) = skills else { return 0 };
    let categories = [
        &skills.technical,
        &skills.soft,
        &skills.languages,
        &skills.certifications,
    ];
    percentage(categories.iter().filter(|c| !c.is_empty()).count(), categories.len())
}

pub fn compute_completeness(resume: &ResumeRecord) -> CompletenessReport {
    let sections = SectionCompletion {
        personal_info: personal_completion(resume.personal_info.as_ref()),
        experience: experience_completion(&resume.experience),
        education: education_completion(&resume.education),
        skills: skills_completion(resume.skills.as_ref()),
    };
    let sum = sections.personal_info + sections.experience + sections.education + sections.skills;
    let overall_score = (sum as f64 / 4.0).round() as u32;

    let mut tips = Vec::new();
    if overall_score >= 100 {
        tips.push("Your resume is well-optimized!".to_string());
    } else {
        if sections.personal_info < PERSONAL_TIP_BELOW {
            tips.push("Complete your professional summary".to_string());
        }
        if sections.experience < EXPERIENCE_TIP_BELOW {
            tips.push("Add more detailed job descriptions".to_string());
        }
        if sections.skills < SKILLS_TIP_BELOW {
            tips.push("Include more skill categories".to_string());
        }
    }

    CompletenessReport {
        sections,
        overall_score,
        tips,
    }
}
