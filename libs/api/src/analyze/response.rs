use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::completion::CompletionError;

/// Also the json shape the model is asked to produce.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageResponse {
    pub original_text: String,
    pub language: String,
    pub translated_text: String,
}

impl AnalyzeImageResponse {
    /// All three fields must carry text.
    pub fn validate(self) -> Result<Self, CompletionError> {
        let fields = [
            ("originalText", &self.original_text),
            ("language", &self.language),
            ("translatedText", &self.translated_text),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(CompletionError::Malformed(format!(
                    "field `{}` is empty",
                    name
                )));
            }
        }

        Ok(self)
    }
}
