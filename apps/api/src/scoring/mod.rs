// Resume scoring engine and the AI endpoints built on it.
// Pure rule modules (text, keywords, signals, sections, composer, recommendations) feed the
// per-endpoint analyses; `scorer` puts them and the LLM path behind one trait.

pub mod ats;
pub mod composer;
pub mod handlers;
pub mod industry_opt;
pub mod job_match;
pub mod keyword_opt;
pub mod keywords;
pub mod prompts;
pub mod recommendations;
pub mod scorer;
pub mod sections;
pub mod signals;
pub mod text;
