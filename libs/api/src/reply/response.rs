use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReplyResponse {
    pub reply: String,
    /// Chinese back-translation of `reply`, or a fixed notice when it
    /// could not be produced
    pub reply_translation: String,
}
