use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct AnalyzeImageRequest {
    /// base64 encoded JPEG
    pub image: Option<String>,
}
