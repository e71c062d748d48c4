//! Deterministic section content from the industry templates.

use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::AppError;
use crate::industry::IndustryProfile;

const DEFAULT_JOB_TITLE: &str = "Professional";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSection {
    Summary,
    Experience,
    Skills,
}

impl FromStr for ContentSection {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(ContentSection::Summary),
            "experience" => Ok(ContentSection::Experience),
            "skills" => Ok(ContentSection::Skills),
            other => Err(AppError::Validation(format!("Invalid section: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedContent {
    pub content: String,
}

/// Case-insensitive de-duplication that keeps the first spelling seen.
fn merge_skills<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}

pub fn generate_content(
    section: ContentSection,
    profile: &IndustryProfile,
    job_title: Option<&str>,
    user_input: Option<&str>,
) -> GeneratedContent {
    let content = match section {
        ContentSection::Summary => profile
            .summary_template
            .replace("{jobTitle}", job_title.unwrap_or(DEFAULT_JOB_TITLE)),
        ContentSection::Experience => profile
            .experience_bullets
            .iter()
            .map(|b| format!("• {b}"))
            .collect::<Vec<_>>()
            .join("\n"),
        ContentSection::Skills => {
            let user_skills = user_input.unwrap_or("").split(',');
            merge_skills(user_skills.chain(profile.skills.iter().copied())).join(", ")
        }
    };
    GeneratedContent { content }
}
