use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMessageResponse {
    pub reply: String,
    pub reply_translation: String,
}
