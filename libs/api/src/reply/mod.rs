use axum::{body::Bytes, extract::State, Json};
use tracing::info;

pub mod request;
pub mod response;

use crate::{
    completion::back_translate,
    prompt::{self, Tone},
    request::{parse_body, required},
    response::{ApiResponse, ErrorResponse, IntoApiResponse},
    ApiError, ApiState,
};

use self::{request::GenerateReplyRequest, response::GenerateReplyResponse};

static FAILED_MESSAGE: &str = "Failed to generate reply.";

/// Draft a reply to a received message
#[utoipa::path(
    post,
    path = "/api/generateReply",
    request_body = GenerateReplyRequest,
    responses(
        (status = 200, description = "Reply generated", body = GenerateReplyResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Failed to generate reply", body = ErrorResponse)
    )
)]
pub async fn generate_reply(
    State(state): State<ApiState>,
    body: Bytes,
) -> ApiResponse<Json<GenerateReplyResponse>> {
    let params = parse_body::<GenerateReplyRequest>(&body)?;
    let (Some(original_text), Some(language), Some(user_intent), Some(tone)) = (
        required(params.original_text),
        required(params.language),
        required(params.user_intent),
        required(params.tone),
    ) else {
        return Err(ApiError::ClientError(
            "Missing required fields".to_string(),
        ));
    };
    info!(task = "generate reply", language = %language, tone = %tone);

    let prompt = prompt::generate_reply(
        &original_text,
        &language,
        &user_intent,
        Tone::from(tone.as_str()),
    );
    let reply = state
        .completion
        .generate_completion(&prompt, None)
        .await
        .into_response(FAILED_MESSAGE)?
        .trim()
        .to_string();
    info!(task = "generate reply", "reply generated, translating back");

    let reply_translation =
        back_translate(state.completion.as_ref(), &language, &reply).await;

    info!(task = "generate reply", "completed");
    Ok(Json(GenerateReplyResponse {
        reply,
        reply_translation,
    }))
}
