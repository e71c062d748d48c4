//! Keyword/pattern matcher.
//!
//! Two kinds of matching live here:
//! - `extract_keywords` runs a fixed battery of category regexes over free text
//!   (job descriptions, resume blobs) and returns every hit.
//! - Reference keyword checks (`split_by_presence`, `find_listed`) are plain substring tests,
//!   so "react" is found inside "reactive". That looseness is intentional and matches
//!   how scores have always been computed.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Skills the job matcher always looks for in a posting.
pub const COMMON_SKILLS: &[&str] = &[
    "javascript",
    "react",
    "node.js",
    "python",
    "sql",
    "git",
    "agile",
    "scrum",
    "leadership",
    "management",
    "communication",
    "teamwork",
    "problem solving",
    "analytical",
    "creative",
    "detail oriented",
    "customer service",
    "sales",
    "marketing",
    "finance",
    "healthcare",
    "education",
    "project management",
];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("keyword pattern must compile")
}

/// Category patterns. Each match is lowercased and whitespace-collapsed before insertion.
static CATEGORY_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "tools",
            compile(
                r"(?i)\b(javascript|typescript|python|java|rust|golang|ruby|php|swift|kotlin|scala|sql|react|angular|vue|node\.js|django|flask|spring boot|docker|kubernetes|aws|azure|gcp|git|linux|terraform|graphql|postgresql|mysql|mongodb|redis|kafka|excel|tableau|salesforce|figma)\b",
            ),
        ),
        // Tokens ending in punctuation can't use a trailing word boundary.
        ("tools", compile(r"(?i)\b(c\+\+|c#)")),
        (
            "methodology",
            compile(
                r"(?i)\b(agile|scrum|kanban|devops|ci/cd|tdd|lean|six sigma|waterfall|microservices|test automation)\b",
            ),
        ),
        (
            "soft_skills",
            compile(
                r"(?i)\b(leadership|communication|teamwork|problem[- ]solving|collaboration|mentoring|analytical|stakeholder management|time management|critical thinking|adaptability|negotiation)\b",
            ),
        ),
        (
            "domain",
            compile(
                r"(?i)\b(machine learning|data analysis|data science|cloud computing|cybersecurity|security|fintech|e-commerce|marketing|finance|sales|customer service|project management|product management|compliance|risk management|seo|patient care|curriculum development)\b",
            ),
        ),
        (
            "experience",
            compile(r"(?i)\b\d+\+?\s*(?:years?|yrs?)(?:\s+of)?\s+experience\b"),
        ),
        (
            "credentials",
            compile(
                r"(?i)\b(bachelor'?s|master'?s|ph\.?d|mba|associate'?s degree|pmp|cpa|cfa|cissp|aws certified|certified scrum master)\b",
            ),
        ),
    ]
});

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

/// Runs every category pattern over `text` and returns the deduplicated, lowercased union.
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for (_category, pattern) in CATEGORY_PATTERNS.iter() {
        for hit in pattern.find_iter(text) {
            let lowered = hit.as_str().to_lowercase();
            let normalized = WHITESPACE.replace_all(&lowered, " ");
            found.insert(normalized.into_owned());
        }
    }
    found
}

/// |candidate ∩ reference| / |reference|, or 0.0 when `reference` is empty.
///
/// Callers that treat "no reference supplied" as neutral must check for that themselves.
pub fn match_ratio(candidate: &BTreeSet<String>, reference: &BTreeSet<String>) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }
    let shared = reference.intersection(candidate).count();
    shared as f64 / reference.len() as f64
}

/// Partitions `keywords` into those occurring in `haystack` (substring match) and the rest.
/// `haystack` is expected to be lowercase already.
pub fn split_by_presence<'a, I>(keywords: I, haystack: &str) -> (BTreeSet<String>, BTreeSet<String>)
where
    I: IntoIterator<Item = &'a String>,
{
    keywords
        .into_iter()
        .cloned()
        .partition(|kw| haystack.contains(kw.as_str()))
}

/// Entries of a fixed list that occur in the lowercase `haystack`.
pub fn find_listed(haystack: &str, list: &[&str]) -> BTreeSet<String> {
    list.iter()
        .filter(|kw| haystack.contains(&kw.to_lowercase()))
        .map(|kw| kw.to_lowercase())
        .collect()
}
