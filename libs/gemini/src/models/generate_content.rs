pub mod implementation;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub trait GenerateContent {
    fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> impl std::future::Future<Output = Result<GenerateContentResponse>> + Send;
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn: the prompt text, followed by an optional inline
    /// attachment.
    pub fn user(prompt: &str, attachment: Option<InlineData>) -> Self {
        let mut parts = vec![Part::text(prompt)];
        if let Some(inline_data) = attachment {
            parts.push(Part {
                text: None,
                inline_data: Some(inline_data),
            });
        }

        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// base64 encoded payload
    pub data: String,
}

////////////////////////////// Response //////////////////////////////
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize() {
        // Arrange
        let text = include_str!("generate_content/test.json");

        // Act
        let response = serde_json::from_str::<GenerateContentResponse>(text);

        // Assert
        let response = response.unwrap();
        assert_eq!(response.candidates.len(), 1);
        let candidate = &response.candidates[0];
        assert_eq!(candidate.finish_reason.as_deref(), Some("STOP"));
        let parts = &candidate.content.as_ref().unwrap().parts;
        assert_eq!(parts[0].text.as_deref(), Some("Bonjour !"));
    }

    #[test]
    fn test_deserialize_blocked_prompt() {
        let text = r#"{"promptFeedback":{"blockReason":"SAFETY","safetyRatings":[]}}"#;

        let response =
            serde_json::from_str::<GenerateContentResponse>(text).unwrap();

        assert!(response.candidates.is_empty());
        assert_eq!(
            response.prompt_feedback.unwrap().block_reason.as_deref(),
            Some("SAFETY")
        );
    }

    #[test]
    fn test_serialize_user_request_with_image() {
        let request = GenerateContentRequest::user(
            "describe",
            Some(InlineData {
                mime_type: "image/jpeg".to_string(),
                data: "aGVsbG8=".to_string(),
            }),
        );

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        { "text": "describe" },
                        { "inlineData": { "mimeType": "image/jpeg", "data": "aGVsbG8=" } }
                    ]
                }]
            })
        );
    }
}
