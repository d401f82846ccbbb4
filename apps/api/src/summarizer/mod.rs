//! Summarization client — turns one article into a profession-tailored
//! summary plus a single skill-improvement suggestion.

pub mod prompts;

use crate::errors::AppError;
use crate::llm_client::LlmClient;

use prompts::SUGGESTION_DELIMITER;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryAdvice {
    pub summary: String,
    pub suggestion: String,
}

/// Summarizes one article for one profession.
pub async fn summarize_for_profession(
    llm: &LlmClient,
    profession: &str,
    title: &str,
    content: &str,
) -> Result<SummaryAdvice, AppError> {
    let prompt = prompts::build_summarize_prompt(profession, title, content);
    let response = llm
        .call(&prompt, prompts::SUMMARIZE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Summarization failed: {e}")))?;
    let text = response
        .text()
        .ok_or_else(|| AppError::Llm("LLM returned empty content".to_string()))?;
    Ok(parse_completion(text))
}

/// Splits the completion at the first `Suggestion:` marker. Without the
/// marker the whole completion becomes the summary and the suggestion
/// stays empty.
fn parse_completion(text: &str) -> SummaryAdvice {
    match text.split_once(SUGGESTION_DELIMITER) {
        Some((summary, suggestion)) => SummaryAdvice {
            summary: summary.trim().to_string(),
            suggestion: suggestion.trim().to_string(),
        },
        None => SummaryAdvice {
            summary: text.trim().to_string(),
            suggestion: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_completion_with_delimiter() {
        let advice = parse_completion(
            "The article covers hiring trends in fintech.\n\nSuggestion: Learn SQL window functions.",
        );
        assert_eq!(advice.summary, "The article covers hiring trends in fintech.");
        assert_eq!(advice.suggestion, "Learn SQL window functions.");
    }

    #[test]
    fn test_parse_completion_without_delimiter() {
        let advice = parse_completion("Just a summary, nothing else.");
        assert_eq!(advice.summary, "Just a summary, nothing else.");
        assert_eq!(advice.suggestion, "");
    }

    #[test]
    fn test_parse_completion_splits_on_first_delimiter() {
        let advice = parse_completion("Summary text.\nSuggestion: a\nSuggestion: b");
        assert_eq!(advice.summary, "Summary text.");
        assert_eq!(advice.suggestion, "a\nSuggestion: b");
    }

    #[test]
    fn test_build_prompt_pins_delimiter_and_profession() {
        let prompt = prompts::build_summarize_prompt("data engineer", "Title", "Body");
        assert!(prompt.contains("data engineer"));
        assert!(prompt.contains(SUGGESTION_DELIMITER));
        assert!(prompt.contains("Title: Title"));
        assert!(prompt.contains("Content:\nBody"));
    }
}
