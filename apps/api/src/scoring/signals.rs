//! Content-quality evidence: quantified achievements and action verbs.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::ResumeRecord;

/// Verbs that signal a results-oriented description.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "managed",
    "led",
    "developed",
    "implemented",
    "created",
    "improved",
    "increased",
    "reduced",
];

static ACTION_VERB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b({})\b", ACTION_VERBS.join("|")))
        .expect("action verb pattern must compile")
});

/// True when the text contains any number.
pub fn has_quantified_evidence(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

pub fn has_action_verb(text: &str) -> bool {
    ACTION_VERB_RE.is_match(text)
}

/// Evidence gathered once per resume and shared by the recommendation and match stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentSignals {
    pub has_experience: bool,
    /// Some experience description contains a number.
    pub quantified: bool,
    /// Some experience description uses an action verb.
    pub action_verbs: bool,
    pub has_summary: bool,
}

impl ContentSignals {
    pub fn from_resume(resume: &ResumeRecord) -> Self {
        let descriptions = || resume.experience.iter().map(|e| e.description.as_str());
        Self {
            has_experience: !resume.experience.is_empty(),
            quantified: descriptions().any(has_quantified_evidence),
            action_verbs: descriptions().any(has_action_verb),
            has_summary: !resume.summary().trim().is_empty(),
        }
    }

    /// Signals for a plain-text resume, where there is no structure to inspect.
    pub fn from_text(text: &str) -> Self {
        Self {
            has_experience: !text.trim().is_empty(),
            quantified: has_quantified_evidence(text),
            action_verbs: has_action_verb(text),
            has_summary: false,
        }
    }
}
