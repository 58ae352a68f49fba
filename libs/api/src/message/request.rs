use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMessageRequest {
    pub target_language: Option<String>,
    /// written in Chinese
    pub user_intent: Option<String>,
    /// casual, friendly, polite or business
    pub tone: Option<String>,
}
