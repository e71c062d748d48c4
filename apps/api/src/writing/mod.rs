// Writing assistance: template content generation, edit feedback, completion metrics.
// Deterministic; none of these call the LLM.

pub mod completeness;
pub mod content;
pub mod feedback;
pub mod handlers;
