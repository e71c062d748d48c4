//! Standalone HTML document renderer.
//!
//! Produces a single self-contained page (inline CSS, no scripts) from a normalised resume.
//! Every piece of user text goes through `escape_html`; custom colours must be hex literals
//! before they reach the stylesheet.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::models::resume::ResumeRecord;

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("hex colour pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

const MODERN: ColorScheme = ColorScheme {
    primary: "#2563eb",
    secondary: "#64748b",
    accent: "#0ea5e9",
};

/// Template name → colours. Unknown templates render as modern.
pub fn scheme_for(template: &str) -> ColorScheme {
    match template.trim().to_ascii_lowercase().as_str() {
        "classic" => ColorScheme {
            primary: "#1f2937",
            secondary: "#6b7280",
            accent: "#374151",
        },
        "creative" => ColorScheme {
            primary: "#7c3aed",
            secondary: "#a78bfa",
            accent: "#c084fc",
        },
        "minimal" => ColorScheme {
            primary: "#000000",
            secondary: "#666666",
            accent: "#999999",
        },
        _ => MODERN,
    }
}

/// Client-supplied colour overrides. Anything that is not a hex colour is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Palette {
    pub fn resolve(template: &str, custom: Option<&CustomColors>) -> Self {
        let scheme = scheme_for(template);
        let custom = custom.cloned().unwrap_or_default();
        Self {
            primary: pick(custom.primary.as_ref(), scheme.primary),
            secondary: pick(custom.secondary.as_ref(), scheme.secondary),
            accent: pick(custom.accent.as_ref(), scheme.accent),
        }
    }
}

fn pick(custom: Option<&String>, fallback: &'static str) -> String {
    match custom.map(|c| c.trim()) {
        Some(color) if HEX_COLOR_RE.is_match(color) => color.to_string(),
        _ => fallback.to_string(),
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Only http(s) links become anchors; anything else would let a payload inject a scheme.
fn safe_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(escape_html(trimmed))
    } else {
        None
    }
}

/// Attachment file name: the person's name restricted to a header-safe character set.
pub fn download_filename(resume: &ResumeRecord) -> String {
    let cleaned: String = resume
        .full_name()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "resume.html".to_string()
    } else {
        format!("{cleaned}.html")
    }
}

fn stylesheet(p: &Palette) -> String {
    format!(
        r#"* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{ font-family: 'Arial', 'Helvetica', sans-serif; line-height: 1.6; color: #333; background: #f8fafc; padding: 2rem 1rem; }}
.resume-container {{ max-width: 800px; margin: 0 auto; background: white; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); border-radius: 8px; overflow: hidden; }}
.header {{ background: linear-gradient(135deg, {primary}, {accent}); color: white; padding: 2rem; text-align: center; }}
.name {{ font-size: 2.5rem; font-weight: bold; margin-bottom: 0.5rem; }}
.contact-info {{ display: flex; justify-content: center; gap: 1.5rem; flex-wrap: wrap; }}
.contact-info a {{ color: white; text-decoration: none; }}
.section {{ padding: 2rem; border-bottom: 1px solid #e2e8f0; }}
.section:last-child {{ border-bottom: none; }}
.section-title {{ font-size: 1.5rem; font-weight: bold; color: {primary}; margin-bottom: 1.5rem; border-bottom: 3px solid {accent}; padding-bottom: 0.5rem; }}
.summary, .description {{ color: #4a5568; line-height: 1.7; }}
.experience-item, .education-item {{ margin-bottom: 2rem; padding: 1.5rem; background: #f8fafc; border-radius: 8px; border-left: 4px solid {accent}; }}
.item-header {{ display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; margin-bottom: 1rem; }}
.position, .degree {{ font-size: 1.2rem; font-weight: bold; color: {primary}; }}
.company, .institution, .date {{ color: {secondary}; }}
.date {{ white-space: nowrap; }}
.achievements {{ margin-left: 1.5rem; color: #4a5568; }}
.skills-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 1.5rem; }}
.skill-category-title {{ font-weight: bold; color: {primary}; margin-bottom: 1rem; }}
.skill-tags {{ display: flex; flex-wrap: wrap; gap: 0.5rem; }}
.skill-tag {{ background: {primary}; color: white; padding: 0.25rem 0.75rem; border-radius: 20px; font-size: 0.85rem; }}
@media (max-width: 768px) {{ .item-header {{ flex-direction: column; }} .skills-grid {{ grid-template-columns: 1fr; }} }}
@media print {{ body {{ background: white; padding: 0; }} .resume-container {{ box-shadow: none; }} .header, .skill-tag {{ background: {primary} !important; print-color-adjust: exact; }} .section {{ page-break-inside: avoid; }} }}"#,
        primary = p.primary,
        secondary = p.secondary,
        accent = p.accent,
    )
}

fn date_range(start: &str, end: &str, current: bool) -> String {
    let end = if current { "Present" } else { end };
    match (start.trim().is_empty(), end.trim().is_empty()) {
        (true, true) => String::new(),
        (false, true) => escape_html(start),
        (true, false) => escape_html(end),
        (false, false) => format!("{} - {}", escape_html(start), escape_html(end)),
    }
}

pub fn render_resume_html(resume: &ResumeRecord, palette: &Palette) -> String {
    let name = escape_html(resume.full_name());
    let title_name = if name.is_empty() { "Resume".to_string() } else { format!("{name} - Resume") };

    let mut body = String::new();
    body.push_str("<header class=\"header\">\n");
    let _ = writeln!(body, "<h1 class=\"name\">{name}</h1>");
    body.push_str("<div class=\"contact-info\">");
    if let Some(info) = &resume.personal_info {
        if !info.email.trim().is_empty() {
            let email = escape_html(info.email.trim());
            let _ = write!(body, "<a href=\"mailto:{email}\">{email}</a>");
        }
        for plain in [&info.phone, &info.location] {
            if !plain.trim().is_empty() {
                let _ = write!(body, "<span>{}</span>", escape_html(plain.trim()));
            }
        }
        for (url, label) in [(&info.linkedin, "LinkedIn"), (&info.website, "Portfolio")] {
            if let Some(href) = safe_url(url) {
                let _ = write!(body, "<a href=\"{href}\" target=\"_blank\" rel=\"noopener\">{label}</a>");
            }
        }
    }
    body.push_str("</div>\n</header>\n");

    let summary = resume.summary().trim();
    if !summary.is_empty() {
        let _ = writeln!(
            body,
            "<section class=\"section\"><h2 class=\"section-title\">Professional Summary</h2><p class=\"summary\">{}</p></section>",
            escape_html(summary)
        );
    }

    if !resume.experience.is_empty() {
        body.push_str("<section class=\"section\"><h2 class=\"section-title\">Professional Experience</h2>\n");
        for exp in &resume.experience {
            let _ = write!(
                body,
                "<div class=\"experience-item\"><div class=\"item-header\"><div class=\"item-title\"><h3 class=\"position\">{}</h3><p class=\"company\">{}</p></div><div class=\"date\">{}</div></div>",
                escape_html(&exp.job_title),
                escape_html(&exp.company),
                date_range(&exp.start_date, &exp.end_date, exp.current),
            );
            if !exp.description.trim().is_empty() {
                let _ = write!(body, "<p class=\"description\">{}</p>", escape_html(&exp.description));
            }
            if !exp.achievements.is_empty() {
                body.push_str("<ul class=\"achievements\">");
                for achievement in &exp.achievements {
                    let _ = write!(body, "<li>{}</li>", escape_html(achievement));
                }
                body.push_str("</ul>");
            }
            body.push_str("</div>\n");
        }
        body.push_str("</section>\n");
    }

    if !resume.education.is_empty() {
        body.push_str("<section class=\"section\"><h2 class=\"section-title\">Education</h2>\n");
        for edu in &resume.education {
            let degree = match (edu.degree.trim(), edu.field.trim()) {
                (d, "") => escape_html(d),
                ("", f) => escape_html(f),
                (d, f) => format!("{} in {}", escape_html(d), escape_html(f)),
            };
            let _ = write!(
                body,
                "<div class=\"education-item\"><div class=\"item-header\"><div class=\"item-title\"><h3 class=\"degree\">{degree}</h3><p class=\"institution\">{}</p></div><div class=\"date\">{}</div></div>",
                escape_html(&edu.institution),
                date_range(&edu.start_date, &edu.end_date, false),
            );
            if let Some(gpa) = &edu.gpa {
                let _ = write!(body, "<p class=\"gpa\">GPA: {}</p>", escape_html(gpa));
            }
            body.push_str("</div>\n");
        }
        body.push_str("</section>\n");
    }

    if let Some(skills) = resume.skills.as_ref().filter(|s| !s.is_empty()) {
        body.push_str("<section class=\"section\"><h2 class=\"section-title\">Skills</h2><div class=\"skills-grid\">\n");
        for (title, list) in [
            ("Technical Skills", &skills.technical),
            ("Soft Skills", &skills.soft),
            ("Languages", &skills.languages),
            ("Certifications", &skills.certifications),
        ] {
            if list.is_empty() {
                continue;
            }
            let _ = write!(
                body,
                "<div class=\"skill-category\"><h4 class=\"skill-category-title\">{title}</h4><div class=\"skill-tags\">"
            );
            for skill in list {
                let _ = write!(body, "<span class=\"skill-tag\">{}</span>", escape_html(skill));
            }
            body.push_str("</div></div>\n");
        }
        body.push_str("</div></section>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n<title>{title_name}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n<div class=\"resume-container\">\n{body}</div>\n</body>\n</html>\n",
        stylesheet(palette)
    )
}
