// LLM prompt templates for the scoring endpoints.
// Reuses cross-cutting fragments from llm_client::prompts.
// Placeholders are `{name}` and are filled in one pass by `fill_template`.

/// ATS analysis. Replace `{resume_json}`, `{template}`, `{career_keywords}`.
pub const ATS_PROMPT_TEMPLATE: &str = r#"Analyze this resume for ATS (applicant tracking system) compatibility.

Resume data (JSON):
{resume_json}

Template: {template}
Target career keywords: {career_keywords}

Return a JSON object with this EXACT schema (no extra fields):
{
  "atsScore": 0,
  "sectionAnalysis": [
    {"section": "personalInfo", "score": 0, "issues": [], "suggestions": []}
  ],
  "formattingIssues": [],
  "missingSections": [],
  "keywordAnalysis": {"density": 0, "matched": [], "missing": [], "suggestions": []},
  "recommendations": [],
  "criticalIssues": []
}

Rules:
- atsScore and every section score are integers from 0 to 100.
- "section" is one of: personalInfo, experience, education, skills.
- At most 6 recommendations, most impactful first.
- criticalIssues only lists problems that would make an ATS reject the resume."#;

/// Job match. Replace `{resume_text}`, `{job_description}`, `{career_keywords}`.
pub const JOB_MATCH_PROMPT_TEMPLATE: &str = r#"Compare this resume against the job description.

Resume:
{resume_text}

Job description:
{job_description}

Target career keywords: {career_keywords}

Return a JSON object with this EXACT schema (no extra fields):
{
  "matchPercentage": 0,
  "matchingSkills": [],
  "missingRequirements": [],
  "keywordsToAdd": [],
  "suggestions": []
}

Rules:
- matchPercentage is an integer from 0 to 100.
- At most 8 matchingSkills, 6 missingRequirements, 5 keywordsToAdd, 5 suggestions."#;

/// Keyword optimization. Replace `{content}`, `{industry}`, `{job_description}`.
pub const KEYWORD_PROMPT_TEMPLATE: &str = r#"Review this resume content for keyword optimization in the {industry} industry.

Content:
{content}

Job description (may be empty):
{job_description}

Return a JSON object with this EXACT schema (no extra fields):
{
  "missingKeywords": [],
  "atsScore": 1,
  "suggestions": []
}

Rules:
- atsScore is an integer from 1 to 10.
- At most 8 missingKeywords and 5 suggestions."#;

/// Industry optimization. Replace `{resume_json}`, `{industry}`, `{role}`, `{career_keywords}`.
pub const INDUSTRY_PROMPT_TEMPLATE: &str = r#"Optimize this resume for a {role} role in the {industry} industry.

Resume data (JSON):
{resume_json}

Target career keywords: {career_keywords}

Return a JSON object with this EXACT schema (no extra fields):
{
  "industryKeywords": [],
  "skillsGaps": [{"skill": "", "importance": "high", "suggestion": ""}],
  "experienceReframing": [{"section": "", "current": "", "suggested": "", "reason": ""}],
  "industryTrends": [],
  "certifications": [{"name": "", "provider": "", "priority": "medium"}],
  "networkingSuggestions": [],
  "portfolioRecommendations": [],
  "interviewTips": []
}

Rules:
- importance and priority are one of: high, medium, low.
- At most 8 industryKeywords, 5 skillsGaps, 3 experienceReframing entries."#;

/// Renders a keyword list for a prompt, or "none" when empty.
pub fn keyword_list<'a, I>(keywords: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let joined = keywords
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so user text that happens to contain
/// `{template}` or `{role}` reaches the model verbatim. Braces that do not name a
/// known placeholder (the JSON schemas) are copied through.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let hit = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match hit {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        let filled = fill_template(
            "Resume: {resume} / Template: {template}",
            &[("resume", "uses {template} literally"), ("template", "modern")],
        );
        assert_eq!(filled, "Resume: uses {template} literally / Template: modern");
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let filled = fill_template("{\n  \"atsScore\": 0\n} {x}", &[("x", "1")]);
        assert_eq!(filled, "{\n  \"atsScore\": 0\n} 1");
    }

    #[test]
    fn test_keyword_list_empty_is_none() {
        assert_eq!(keyword_list(&Vec::<String>::new()), "none");
    }
}
