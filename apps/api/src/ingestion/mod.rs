// Daily batch: fetch feeds, persist articles, fan out per-user summaries.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod feed;
pub mod job;
pub mod scheduler;
