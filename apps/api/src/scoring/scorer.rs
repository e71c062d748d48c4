//! Resume scoring strategies.
//!
//! Every AI endpoint goes through a `ResumeScorer`. `HeuristicScorer` runs the local rule
//! engine and never fails; `LlmScorer` proxies to the model and validates what comes back.
//! `AppState` holds an `Arc<dyn ResumeScorer>` chosen at startup from `SCORER_BACKEND`.

use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

use crate::config::{Config, ScorerBackend};
use crate::errors::AppError;
use crate::industry::profile_for;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::resume::ResumeRecord;
use crate::scoring::ats::{analyze_ats, keyword_density, AtsAnalysis};
use crate::scoring::composer::assess_formatting;
use crate::scoring::industry_opt::{optimize_industry, IndustryOptimization};
use crate::scoring::job_match::{analyze_job_match, JobMatchAnalysis, ResumeInput};
use crate::scoring::keyword_opt::{optimize_keywords, KeywordOptimization};
use crate::scoring::prompts::{
    fill_template, keyword_list, ATS_PROMPT_TEMPLATE, INDUSTRY_PROMPT_TEMPLATE, JOB_MATCH_PROMPT_TEMPLATE,
    KEYWORD_PROMPT_TEMPLATE,
};
use crate::scoring::recommendations::MAX_RECOMMENDATIONS;
use crate::scoring::sections::score_sections;

// ────────────────────────────────────────────────────────────────────────────
// Validated request inputs (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AtsRequest {
    pub resume: ResumeRecord,
    pub template: String,
    pub career_keywords: BTreeSet<String>,
}

#[derive(Debug, Clone)]
pub struct JobMatchRequest {
    pub resume: ResumeInput,
    pub job_description: String,
    pub career_keywords: BTreeSet<String>,
}

#[derive(Debug, Clone)]
pub struct KeywordRequest {
    pub content: String,
    pub industry: String,
    pub job_description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IndustryRequest {
    pub resume: ResumeRecord,
    pub industry: String,
    pub role: String,
    pub career_keywords: BTreeSet<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap backends without touching handlers.
#[async_trait]
pub trait ResumeScorer: Send + Sync {
    /// "heuristic" | "llm", reported by the health endpoint.
    fn backend(&self) -> &'static str;

    async fn analyze_ats(&self, request: &AtsRequest) -> Result<AtsAnalysis, AppError>;

    async fn match_job(&self, request: &JobMatchRequest) -> Result<JobMatchAnalysis, AppError>;

    async fn optimize_keywords(
        &self,
        request: &KeywordRequest,
    ) -> Result<KeywordOptimization, AppError>;

    async fn optimize_industry(
        &self,
        request: &IndustryRequest,
    ) -> Result<IndustryOptimization, AppError>;
}

/// Builds the scorer selected by configuration.
pub fn scorer_from_config(config: &Config) -> anyhow::Result<Arc<dyn ResumeScorer>> {
    let scorer: Arc<dyn ResumeScorer> = match config.scorer_backend {
        ScorerBackend::Heuristic => Arc::new(HeuristicScorer::new(config.min_content_length)),
        ScorerBackend::Llm => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .context("ANTHROPIC_API_KEY is required for the llm scorer")?;
            let llm = LlmClient::new(api_key, config.anthropic_base_url.as_deref())
                .context("Failed to build LLM client")?;
            Arc::new(LlmScorer::new(llm, config.min_content_length))
        }
    };
    info!("Using {} resume scorer", scorer.backend());
    Ok(scorer)
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicScorer
// ────────────────────────────────────────────────────────────────────────────

/// Local rule engine. Deterministic, no network.
pub struct HeuristicScorer {
    min_content_length: usize,
}

impl HeuristicScorer {
    pub fn new(min_content_length: usize) -> Self {
        Self { min_content_length }
    }
}

#[async_trait]
impl ResumeScorer for HeuristicScorer {
    fn backend(&self) -> &'static str {
        "heuristic"
    }

    async fn analyze_ats(&self, request: &AtsRequest) -> Result<AtsAnalysis, AppError> {
        Ok(analyze_ats(
            &request.resume,
            &request.template,
            &request.career_keywords,
            self.min_content_length,
        ))
    }

    async fn match_job(&self, request: &JobMatchRequest) -> Result<JobMatchAnalysis, AppError> {
        Ok(analyze_job_match(
            &request.resume,
            &request.job_description,
            &request.career_keywords,
        ))
    }

    async fn optimize_keywords(
        &self,
        request: &KeywordRequest,
    ) -> Result<KeywordOptimization, AppError> {
        Ok(optimize_keywords(
            &request.content,
            profile_for(&request.industry),
            request.job_description.as_deref(),
        ))
    }

    async fn optimize_industry(
        &self,
        request: &IndustryRequest,
    ) -> Result<IndustryOptimization, AppError> {
        Ok(optimize_industry(
            &request.resume,
            profile_for(&request.industry),
            &request.role,
            &request.career_keywords,
        ))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmScorer
// ────────────────────────────────────────────────────────────────────────────

/// Model-backed scorer. One call per request; any failure surfaces as `AppError::Llm`.
pub struct LlmScorer {
    llm: LlmClient,
    min_content_length: usize,
}

impl LlmScorer {
    pub fn new(llm: LlmClient, min_content_length: usize) -> Self {
        Self {
            llm,
            min_content_length,
        }
    }

    fn system_prompt() -> String {
        format!("{JSON_ONLY_SYSTEM}\n\n{GROUNDING_INSTRUCTION}")
    }
}

fn resume_json(resume: &ResumeRecord) -> Result<String, AppError> {
    serde_json::to_string_pretty(resume)
        .context("Failed to serialize resume for prompt")
        .map_err(AppError::from)
}

fn ats_prompt(request: &AtsRequest) -> Result<String, AppError> {
    let resume = resume_json(&request.resume)?;
    let keywords = keyword_list(&request.career_keywords);
    Ok(fill_template(
        ATS_PROMPT_TEMPLATE,
        &[
            ("resume_json", resume.as_str()),
            ("template", request.template.as_str()),
            ("career_keywords", keywords.as_str()),
        ],
    ))
}

fn job_match_prompt(request: &JobMatchRequest) -> String {
    let resume = request.resume.text();
    let keywords = keyword_list(&request.career_keywords);
    fill_template(
        JOB_MATCH_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume.as_str()),
            ("job_description", request.job_description.as_str()),
            ("career_keywords", keywords.as_str()),
        ],
    )
}

fn keyword_prompt(request: &KeywordRequest) -> String {
    fill_template(
        KEYWORD_PROMPT_TEMPLATE,
        &[
            ("content", request.content.as_str()),
            ("industry", request.industry.as_str()),
            (
                "job_description",
                request.job_description.as_deref().unwrap_or(""),
            ),
        ],
    )
}

fn industry_prompt(request: &IndustryRequest) -> Result<String, AppError> {
    let resume = resume_json(&request.resume)?;
    let keywords = keyword_list(&request.career_keywords);
    Ok(fill_template(
        INDUSTRY_PROMPT_TEMPLATE,
        &[
            ("resume_json", resume.as_str()),
            ("industry", request.industry.as_str()),
            ("role", request.role.as_str()),
            ("career_keywords", keywords.as_str()),
        ],
    ))
}

fn out_of_range(field: &str, value: u32, max: u32) -> AppError {
    AppError::Llm(format!("{field} {value} outside 0..={max}"))
}

fn validate_ats(mut analysis: AtsAnalysis) -> Result<AtsAnalysis, AppError> {
    if analysis.ats_score > 100 {
        return Err(out_of_range("atsScore", analysis.ats_score, 100));
    }
    if analysis.section_analysis.is_empty() {
        return Err(AppError::Llm("sectionAnalysis is empty".to_string()));
    }
    if let Some(report) = analysis.section_analysis.iter().find(|r| r.score > 100) {
        return Err(out_of_range("section score", report.score, 100));
    }
    analysis.keyword_analysis.density = analysis.keyword_analysis.density.min(100);
    analysis.recommendations.truncate(MAX_RECOMMENDATIONS);
    Ok(analysis)
}

fn validate_job_match(mut analysis: JobMatchAnalysis) -> Result<JobMatchAnalysis, AppError> {
    if analysis.match_percentage > 100 {
        return Err(out_of_range("matchPercentage", analysis.match_percentage, 100));
    }
    analysis.matching_skills.truncate(8);
    analysis.missing_requirements.truncate(6);
    analysis.keywords_to_add.truncate(5);
    analysis.suggestions.truncate(5);
    Ok(analysis)
}

fn validate_keywords(mut result: KeywordOptimization) -> Result<KeywordOptimization, AppError> {
    if !(1..=10).contains(&result.ats_score) {
        return Err(AppError::Llm(format!(
            "atsScore {} outside 1..=10",
            result.ats_score
        )));
    }
    result.missing_keywords.truncate(8);
    result.suggestions.truncate(5);
    Ok(result)
}

fn validate_industry(mut result: IndustryOptimization) -> Result<IndustryOptimization, AppError> {
    if result.industry_keywords.is_empty() && result.skills_gaps.is_empty() {
        return Err(AppError::Llm(
            "industry optimization returned no keywords or skill gaps".to_string(),
        ));
    }
    result.industry_keywords.truncate(8);
    result.skills_gaps.truncate(5);
    result.experience_reframing.truncate(3);
    Ok(result)
}

#[async_trait]
impl ResumeScorer for LlmScorer {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn analyze_ats(&self, request: &AtsRequest) -> Result<AtsAnalysis, AppError> {
        let prompt = ats_prompt(request)?;

        let analysis: AtsAnalysis = self.llm.call_json(&prompt, &Self::system_prompt()).await?;
        let mut analysis = validate_ats(analysis)?;

        // The model never sees the raw payload size, so density and the sparse/template
        // checks stay local.
        analysis.keyword_analysis.density = keyword_density(request.resume.content_length);
        let local = assess_formatting(
            &request.template,
            request.resume.content_length,
            self.min_content_length,
        );
        for issue in local.issues {
            if !analysis.formatting_issues.contains(&issue) {
                analysis.formatting_issues.push(issue);
            }
        }
        Ok(analysis)
    }

    async fn match_job(&self, request: &JobMatchRequest) -> Result<JobMatchAnalysis, AppError> {
        let prompt = job_match_prompt(request);

        let analysis: JobMatchAnalysis =
            self.llm.call_json(&prompt, &Self::system_prompt()).await?;
        let mut analysis = validate_job_match(analysis)?;

        if let ResumeInput::Structured(resume) = &request.resume {
            analysis.section_analysis = score_sections(resume, &request.career_keywords).reports;
        }
        Ok(analysis)
    }

    async fn optimize_keywords(
        &self,
        request: &KeywordRequest,
    ) -> Result<KeywordOptimization, AppError> {
        let prompt = keyword_prompt(request);

        let result: KeywordOptimization =
            self.llm.call_json(&prompt, &Self::system_prompt()).await?;
        validate_keywords(result)
    }

    async fn optimize_industry(
        &self,
        request: &IndustryRequest,
    ) -> Result<IndustryOptimization, AppError> {
        let prompt = industry_prompt(request)?;

        let result: IndustryOptimization =
            self.llm.call_json(&prompt, &Self::system_prompt()).await?;
        validate_industry(result)
    }
}
