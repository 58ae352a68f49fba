use std::time::Duration;

use async_trait::async_trait;
use gemini::{
    models::generate_content::{
        GenerateContent, GenerateContentRequest, InlineData,
    },
    Models,
};
use tracing::{debug, error};

use crate::{
    completion::{Attachment, Completion, CompletionError},
    extract::completion_text,
};

/// [`Completion`] backed by Gemini. Prompts with an attachment go to the
/// vision model, the rest to the text model.
#[derive(Clone, Debug)]
pub struct GeminiCompletion {
    models: Models,
    text_model: String,
    vision_model: String,
}

impl GeminiCompletion {
    pub fn new(api_key: &str, config: &util::Gemini) -> anyhow::Result<Self> {
        let models = Models::new(
            api_key,
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )?;

        Ok(Self {
            models,
            text_model: config.text_model.clone(),
            vision_model: config.vision_model.clone(),
        })
    }
}

#[async_trait]
impl Completion for GeminiCompletion {
    async fn generate_completion(
        &self,
        prompt: &str,
        attachment: Option<Attachment>,
    ) -> Result<String, CompletionError> {
        let model = match attachment {
            Some(_) => &self.vision_model,
            None => &self.text_model,
        };
        let request = GenerateContentRequest::user(
            prompt,
            attachment.map(|a| InlineData {
                mime_type: a.mime_type,
                data: a.data,
            }),
        );

        debug!(task = "generate content", model = %model);
        let response = self
            .models
            .generate_content(model, request)
            .await
            .map_err(CompletionError::from)?;

        completion_text(response).inspect_err(|e| {
            error!(task = "extract completion", model = %model, error = %e);
        })
    }
}
