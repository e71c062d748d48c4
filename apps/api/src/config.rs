use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::scoring::composer::DEFAULT_MIN_CONTENT_LENGTH;

/// Which `ResumeScorer` strategy backs the AI endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerBackend {
    /// Local deterministic rules. Never fails.
    Heuristic,
    /// Proxies every analysis to the LLM provider.
    Llm,
}

impl FromStr for ScorerBackend {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(ScorerBackend::Heuristic),
            "llm" => Ok(ScorerBackend::Llm),
            other => bail!("Unknown SCORER_BACKEND '{other}' (expected 'heuristic' or 'llm')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if the selected backend is missing what it needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub scorer_backend: ScorerBackend,
    pub anthropic_api_key: Option<String>,
    /// Overrides the LLM endpoint (proxies, local mocks).
    pub anthropic_base_url: Option<String>,
    pub min_content_length: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let scorer_backend: ScorerBackend = optional_env("SCORER_BACKEND")
            .unwrap_or_else(|| "heuristic".to_string())
            .parse()?;

        let anthropic_api_key = optional_env("ANTHROPIC_API_KEY");
        if scorer_backend == ScorerBackend::Llm && anthropic_api_key.is_none() {
            bail!("SCORER_BACKEND=llm requires ANTHROPIC_API_KEY to be set");
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scorer_backend,
            anthropic_api_key,
            anthropic_base_url: optional_env("ANTHROPIC_BASE_URL"),
            min_content_length: match optional_env("MIN_CONTENT_LENGTH") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MIN_CONTENT_LENGTH must be a non-negative integer")?,
                None => DEFAULT_MIN_CONTENT_LENGTH,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            scorer_backend: ScorerBackend::Heuristic,
            anthropic_api_key: None,
            anthropic_base_url: None,
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
        }
    }
}

/// Reads an env var, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
