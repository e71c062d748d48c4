//! Edit feedback: compares a generated draft with the user's edited version and infers
//! editing preferences for future generations.

use serde::{Deserialize, Serialize};

use crate::scoring::signals::{has_action_verb, has_quantified_evidence};

/// Character delta beyond which an edit counts as an expansion or a condensation.
const SIGNIFICANT_LENGTH_CHANGE: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditQuality {
    Excellent,
    Good,
    Neutral,
    Poor,
}

impl EditQuality {
    fn as_str(self) -> &'static str {
        match self {
            EditQuality::Excellent => "excellent",
            EditQuality::Good => "good",
            EditQuality::Neutral => "neutral",
            EditQuality::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditFeedback {
    pub change_analysis: String,
    pub user_preferences: Vec<String>,
    pub edit_quality: EditQuality,
    pub future_recommendations: Vec<String>,
    pub learning_points: Vec<String>,
}

struct Preferences(Vec<String>);

impl Preferences {
    fn add(&mut self, tags: &[&str]) {
        for tag in tags {
            if !self.0.iter().any(|t| t == tag) {
                self.0.push(tag.to_string());
            }
        }
    }
}

pub fn analyze_edit(original: &str, edited: &str, edit_type: &str) -> EditFeedback {
    let length_change = edited.chars().count() as i64 - original.chars().count() as i64;
    let mut preferences = Preferences(Vec::new());

    let (change_analysis, mut quality) = if length_change > SIGNIFICANT_LENGTH_CHANGE {
        preferences.add(&["prefers detailed descriptions", "values comprehensive information"]);
        (
            "User expanded content significantly, likely adding more detail or examples",
            EditQuality::Good,
        )
    } else if length_change < -SIGNIFICANT_LENGTH_CHANGE {
        preferences.add(&["prefers concise content", "values clarity over detail"]);
        (
            "User condensed content, focusing on brevity and key points",
            EditQuality::Good,
        )
    } else {
        preferences.add(&["attention to detail", "values precision in language"]);
        (
            "User made minor refinements, likely improving word choice or structure",
            EditQuality::Excellent,
        )
    };

    match edit_type {
        "summary" => preferences.add(&["focuses on personal branding", "values professional positioning"]),
        "experience" => preferences.add(&["emphasizes achievements", "values quantifiable results"]),
        "skills" => preferences.add(&["technical accuracy", "industry-specific terminology"]),
        _ => {}
    }

    let has_numbers = has_quantified_evidence(edited);
    let has_verbs = has_action_verb(edited);

    if has_numbers && !has_quantified_evidence(original) {
        quality = EditQuality::Excellent;
        preferences.add(&["quantifies achievements", "data-driven approach"]);
    }
    if has_verbs && !has_action_verb(original) {
        quality = EditQuality::Excellent;
        preferences.add(&["uses strong action verbs", "results-oriented language"]);
    }

    let future_recommendations = vec![
        if quality == EditQuality::Excellent {
            "Continue with similar editing approach"
        } else {
            "Consider adding more specific details"
        },
        if length_change > 0 {
            "Balance detail with readability"
        } else {
            "Ensure key information isn't lost in brevity"
        },
        if has_numbers {
            "Maintain quantifiable metrics"
        } else {
            "Consider adding measurable achievements"
        },
        if has_verbs {
            "Keep using strong action verbs"
        } else {
            "Use more dynamic language to describe accomplishments"
        },
    ]
    .into_iter()
    .map(String::from)
    .collect();

    let style = match length_change {
        n if n > 0 => "expansive",
        n if n < 0 => "concise",
        _ => "refinement-focused",
    };
    let improvement_areas = format!(
        "{}{}",
        if has_numbers { "" } else { "quantification, " },
        if has_verbs {
            "maintain current approach"
        } else {
            "action-oriented language"
        }
    );

    EditFeedback {
        change_analysis: change_analysis.to_string(),
        user_preferences: preferences.0,
        edit_quality: quality,
        future_recommendations,
        learning_points: vec![
            format!("User editing style: {style}"),
            format!("Quality preference: {}", quality.as_str()),
            format!("Content focus: {edit_type} optimization"),
            format!("Improvement areas: {improvement_areas}"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_refinement_is_excellent() {
        let feedback = analyze_edit("Built tools", "Built internal tools", "summary");
        assert_eq!(feedback.edit_quality, EditQuality::Excellent);
        assert!(feedback.change_analysis.contains("minor refinements"));
        assert!(feedback
            .user_preferences
            .contains(&"focuses on personal branding".to_string()));
        assert_eq!(feedback.future_recommendations.len(), 4);
        assert_eq!(feedback.learning_points.len(), 4);
        assert_eq!(feedback.learning_points[0], "User editing style: expansive");
    }

    #[test]
    fn test_expansion_is_good() {
        let edited = "Worked on the billing platform with a large group of engineers across several offices";
        let feedback = analyze_edit("Worked on billing", edited, "other");
        assert_eq!(feedback.edit_quality, EditQuality::Good);
        assert!(feedback.change_analysis.contains("expanded"));
        assert_eq!(feedback.future_recommendations[0], "Consider adding more specific details");
        assert_eq!(
            feedback.learning_points[3],
            "Improvement areas: quantification, action-oriented language"
        );
    }

    #[test]
    fn test_condensation_is_good() {
        let original = "Worked on the billing platform with a large group of engineers across several offices";
        let feedback = analyze_edit(original, "Billing platform", "experience");
        assert_eq!(feedback.edit_quality, EditQuality::Good);
        assert!(feedback.user_preferences.contains(&"prefers concise content".to_string()));
        assert!(feedback.user_preferences.contains(&"emphasizes achievements".to_string()));
        assert_eq!(feedback.learning_points[0], "User editing style: concise");
    }

    #[test]
    fn test_new_metrics_and_verbs_upgrade_quality() {
        let original = "Worked on the billing platform with a large group of engineers across several offices";
        let feedback = analyze_edit(original, "Led billing team; cut costs 20%", "experience");
        assert_eq!(feedback.edit_quality, EditQuality::Excellent);
        assert!(feedback.user_preferences.contains(&"quantifies achievements".to_string()));
        assert!(feedback.user_preferences.contains(&"uses strong action verbs".to_string()));
        assert_eq!(feedback.learning_points[3], "Improvement areas: maintain current approach");
    }

    #[test]
    fn test_preferences_are_unique() {
        let feedback = analyze_edit("a", "a", "skills");
        let mut sorted = feedback.user_preferences.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), feedback.user_preferences.len());
        assert_eq!(feedback.learning_points[0], "User editing style: refinement-focused");
    }

    #[test]
    fn test_quality_serializes_lowercase() {
        let json = serde_json::to_value(analyze_edit("", "x", "summary")).unwrap();
        assert_eq!(json["editQuality"], "excellent");
        assert!(json.get("userPreferences").is_some());
    }
}
