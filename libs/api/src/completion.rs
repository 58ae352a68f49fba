use async_trait::async_trait;
use tracing::warn;

use crate::prompt;

/// Returned in place of a back-translation that could not be produced.
pub static TRANSLATION_FALLBACK: &str = "（翻译失败，请以原文为准）";

/// Binary payload sent inline next to the prompt.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    pub mime_type: String,
    /// base64 encoded bytes, passed through untouched
    pub data: String,
}

impl Attachment {
    pub fn jpeg(data: String) -> Self {
        Self {
            mime_type: "image/jpeg".to_string(),
            data,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("upstream timed out after {0} seconds")]
    UpstreamTimeout(u64),
    /// `body` is for logs only and stays out of the display text.
    #[error("upstream returned status {status}")]
    Upstream { status: u16, body: String },
    #[error("{0}")]
    Transport(String),
    #[error("API returned no content, it might be blocked due to safety settings ({reason})")]
    BlockedOrEmpty { reason: String },
    #[error("completion is not in the expected format: {0}")]
    Malformed(String),
}

impl From<gemini::Error> for CompletionError {
    fn from(e: gemini::Error) -> Self {
        match e {
            gemini::Error::Timeout(secs) => Self::UpstreamTimeout(secs),
            gemini::Error::Status { status, body } => Self::Upstream {
                status: status.as_u16(),
                body,
            },
            other => Self::Transport(other.to_string()),
        }
    }
}

/// A generative model reachable with a single prompt.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn generate_completion(
        &self,
        prompt: &str,
        attachment: Option<Attachment>,
    ) -> Result<String, CompletionError>;
}

/// Translates `text` back into Chinese. Never fails: a failed call yields
/// [`TRANSLATION_FALLBACK`].
pub async fn back_translate(
    completion: &dyn Completion,
    language: &str,
    text: &str,
) -> String {
    let prompt = prompt::back_translation(language, text);

    match completion.generate_completion(&prompt, None).await {
        Ok(translation) => translation.trim().to_string(),
        Err(e) => {
            warn!(task = "back translation", error = ?e);
            TRANSLATION_FALLBACK.to_string()
        }
    }
}
