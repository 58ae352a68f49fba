use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReplyRequest {
    /// the message being replied to
    pub original_text: Option<String>,
    pub language: Option<String>,
    pub user_intent: Option<String>,
    pub tone: Option<String>,
}
