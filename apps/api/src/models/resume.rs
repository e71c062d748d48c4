//! Resume record: the typed, normalised view of the loosely-shaped `resumeData` payload.
//!
//! The browser client sends whatever its forms hold: fields may be missing, `null`, numbers
//! where strings are expected, or whole sections of the wrong shape. `ResumeRecord::from_value`
//! absorbs all of that here so the scorer can assume well-formed input. Malformed sections
//! degrade to "absent" instead of failing the request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
    /// Comma-separated (or free-form) career focus terms.
    pub career_keywords: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
}

impl Skills {
    /// All skill names in display order: technical, soft, languages, certifications.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.technical
            .iter()
            .chain(&self.soft)
            .chain(&self.languages)
            .chain(&self.certifications)
    }

    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len() + self.languages.len() + self.certifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// One normalised resume. Built fresh per request, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    /// `None` when the payload has no personal-info object at all.
    pub personal_info: Option<PersonalInfo>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    /// `None` when the payload has no usable skills structure.
    pub skills: Option<Skills>,
    /// Length of the compact JSON serialisation of the raw payload.
    #[serde(skip)]
    pub content_length: usize,
}

impl ResumeRecord {
    /// Normalises an arbitrary JSON value. Total: never fails, whatever the input.
    pub fn from_value(value: &Value) -> Self {
        let content_length = serde_json::to_string(value).map(|s| s.len()).unwrap_or(0);

        let Some(root) = value.as_object() else {
            return ResumeRecord {
                content_length,
                ..Default::default()
            };
        };

        ResumeRecord {
            personal_info: root
                .get("personalInfo")
                .and_then(Value::as_object)
                .map(personal_info_from),
            experience: objects_in(root.get("experience"))
                .map(experience_from)
                .collect(),
            education: objects_in(root.get("education"))
                .map(education_from)
                .collect(),
            skills: root.get("skills").and_then(skills_from),
            content_length,
        }
    }

    pub fn summary(&self) -> &str {
        self.personal_info
            .as_ref()
            .map(|p| p.summary.as_str())
            .unwrap_or("")
    }

    pub fn full_name(&self) -> &str {
        self.personal_info
            .as_ref()
            .map(|p| p.full_name.as_str())
            .unwrap_or("")
    }

    pub fn skills_missing(&self) -> bool {
        self.skills.as_ref().map_or(true, Skills::is_empty)
    }
}

fn personal_info_from(obj: &Map<String, Value>) -> PersonalInfo {
    PersonalInfo {
        full_name: text_field(obj, "fullName"),
        email: text_field(obj, "email"),
        phone: text_field(obj, "phone"),
        location: text_field(obj, "location"),
        linkedin: text_field(obj, "linkedin"),
        website: text_field(obj, "website"),
        summary: text_field(obj, "summary"),
        career_keywords: text_field(obj, "careerKeywords"),
    }
}

fn experience_from(obj: &Map<String, Value>) -> Experience {
    let job_title = match text_field(obj, "jobTitle") {
        title if title.is_empty() => text_field(obj, "position"),
        title => title,
    };

    Experience {
        job_title,
        company: text_field(obj, "company"),
        start_date: text_field(obj, "startDate"),
        end_date: text_field(obj, "endDate"),
        current: obj.get("current").and_then(Value::as_bool).unwrap_or(false),
        description: text_field(obj, "description"),
        achievements: string_list(obj.get("achievements")),
    }
}

fn education_from(obj: &Map<String, Value>) -> Education {
    let institution = match text_field(obj, "institution") {
        name if name.is_empty() => text_field(obj, "school"),
        name => name,
    };
    let gpa = Some(text_field(obj, "gpa")).filter(|g| !g.trim().is_empty());

    Education {
        institution,
        degree: text_field(obj, "degree"),
        field: text_field(obj, "field"),
        start_date: text_field(obj, "startDate"),
        end_date: text_field(obj, "endDate"),
        gpa,
    }
}

/// Accepts the four-category object or a bare list of names (treated as technical).
fn skills_from(value: &Value) -> Option<Skills> {
    match value {
        Value::Object(obj) => Some(Skills {
            technical: string_list(obj.get("technical")),
            soft: string_list(obj.get("soft")),
            languages: string_list(obj.get("languages")),
            certifications: string_list(obj.get("certifications")),
        }),
        Value::Array(_) => Some(Skills {
            technical: string_list(Some(value)),
            ..Default::default()
        }),
        _ => None,
    }
}

fn objects_in(value: Option<&Value>) -> impl Iterator<Item = &Map<String, Value>> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

/// Reads a scalar as text. Numbers are stringified, string lists joined, anything else is empty.
fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_payload_normalises() {
        let value = json!({
            "personalInfo": {
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "5551234567",
                "careerKeywords": "rust, backend"
            },
            "experience": [{
                "position": "Engineer",
                "company": "Analytical Engines",
                "description": "Wrote the first program",
                "current": true,
                "achievements": ["Shipped 1 algorithm", "", 42]
            }],
            "education": [{ "school": "Home", "degree": "None", "gpa": 4.0 }],
            "skills": { "technical": ["Rust", "  "], "soft": ["Writing"] }
        });

        let resume = ResumeRecord::from_value(&value);
        let info = resume.personal_info.as_ref().unwrap();
        assert_eq!(info.full_name, "Ada Lovelace");
        assert_eq!(info.career_keywords, "rust, backend");
        assert_eq!(resume.experience[0].job_title, "Engineer");
        assert!(resume.experience[0].current);
        assert_eq!(
            resume.experience[0].achievements,
            vec!["Shipped 1 algorithm".to_string(), "42".to_string()]
        );
        assert_eq!(resume.education[0].institution, "Home");
        assert_eq!(resume.education[0].gpa.as_deref(), Some("4.0"));
        assert_eq!(resume.skills.as_ref().unwrap().total(), 2);
        assert_eq!(resume.content_length, value.to_string().len());
    }

    #[test]
    fn test_job_title_preferred_over_position() {
        let value = json!({ "experience": [{ "jobTitle": "Lead", "position": "Dev" }] });
        let resume = ResumeRecord::from_value(&value);
        assert_eq!(resume.experience[0].job_title, "Lead");
    }

    #[test]
    fn test_non_object_payload_is_empty_record() {
        let resume = ResumeRecord::from_value(&json!("just a string"));
        assert!(resume.personal_info.is_none());
        assert!(resume.experience.is_empty());
        assert!(resume.skills_missing());
        assert_eq!(resume.content_length, "\"just a string\"".len());
    }

    #[test]
    fn test_malformed_sections_degrade_to_absent() {
        let value = json!({
            "personalInfo": "nope",
            "experience": { "jobTitle": "not an array" },
            "education": [1, "two", null],
            "skills": 7
        });
        let resume = ResumeRecord::from_value(&value);
        assert!(resume.personal_info.is_none());
        assert!(resume.experience.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.skills.is_none());
    }

    #[test]
    fn test_skills_as_bare_list_are_technical() {
        let resume = ResumeRecord::from_value(&json!({ "skills": ["Go", "SQL", 3] }));
        let skills = resume.skills.unwrap();
        assert_eq!(skills.technical, vec!["Go", "SQL", "3"]);
        assert!(skills.soft.is_empty());
    }

    #[test]
    fn test_empty_skills_object_counts_as_missing() {
        let resume = ResumeRecord::from_value(&json!({ "skills": { "technical": [] } }));
        assert!(resume.skills.is_some());
        assert!(resume.skills_missing());
    }

    #[test]
    fn test_array_scalar_fields_are_empty() {
        let value = json!({
            "personalInfo": { "email": ["a@b.co"], "phone": ["555", "5551234"], "fullName": "Ada" }
        });
        let resume = ResumeRecord::from_value(&value);
        let info = resume.personal_info.as_ref().unwrap();
        assert_eq!(info.email, "");
        assert_eq!(info.phone, "");
        assert_eq!(info.full_name, "Ada");
    }

    #[test]
    fn test_empty_personal_info_object_is_present() {
        let resume = ResumeRecord::from_value(&json!({ "personalInfo": {} }));
        assert_eq!(resume.personal_info, Some(PersonalInfo::default()));
    }
}
