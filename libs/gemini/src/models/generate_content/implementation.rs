use crate::{
    error::{Error, Result},
    models::Models,
};

use super::{GenerateContent, GenerateContentRequest, GenerateContentResponse};

impl GenerateContent for Models {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let body = serde_json::to_string(&request).map_err(Error::Encode)?;
        let text = self
            .string_response(body, model, "generateContent")
            .await?;

        let response = serde_json::from_str(&text).map_err(Error::Decode)?;

        Ok(response)
    }
}
