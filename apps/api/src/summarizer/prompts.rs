// All LLM prompt constants for the summarizer. The completion is parsed by
// splitting on SUGGESTION_DELIMITER, so the prompt pins that exact prefix.

pub const SUMMARIZE_SYSTEM: &str =
    "You are a content summarization and career advice expert. \
    You write tight, factual summaries and give concrete, actionable skill advice.";

/// Literal marker the model must place before its suggestion line.
pub const SUGGESTION_DELIMITER: &str = "Suggestion:";

pub fn build_summarize_prompt(profession: &str, title: &str, content: &str) -> String {
    format!(
        "Summarize the following article in roughly 200 words, then give exactly one \
        skill-improvement suggestion for a {profession}.\n\
        Put the suggestion on its own final line, introduced by the literal prefix \
        \"{SUGGESTION_DELIMITER}\".\n\n\
        Title: {title}\n\
        Content:\n{content}"
    )
}
