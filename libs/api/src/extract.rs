use gemini::models::generate_content::GenerateContentResponse;
use serde::de::DeserializeOwned;

use crate::completion::CompletionError;

/// Text of the first candidate.
///
/// A blocked prompt, a missing candidate, or a candidate without any text is
/// reported as [`CompletionError::BlockedOrEmpty`].
pub fn completion_text(
    response: GenerateContentResponse,
) -> Result<String, CompletionError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(CompletionError::BlockedOrEmpty { reason });
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(CompletionError::BlockedOrEmpty {
            reason: "no candidates".to_string(),
        });
    };

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        return Err(CompletionError::BlockedOrEmpty {
            reason: candidate
                .finish_reason
                .unwrap_or_else(|| "empty content".to_string()),
        });
    }

    Ok(text)
}

/// Removes a surrounding code fence, tagged (```` ```json ````) or bare.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();

    let text = match text.strip_prefix("```") {
        Some(rest) => {
            rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric())
        }
        None => text,
    };
    let text = text.strip_suffix("```").unwrap_or(text);

    text.trim()
}

pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, CompletionError> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|e| CompletionError::Malformed(e.to_string()))
}
