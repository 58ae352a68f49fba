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

use self::{
    request::GenerateMessageRequest, response::GenerateMessageResponse,
};

static FAILED_MESSAGE: &str = "Failed to generate message.";

/// Write a message in a foreign language from the user's intent
#[utoipa::path(
    post,
    path = "/api/generateMessage",
    request_body = GenerateMessageRequest,
    responses(
        (status = 200, description = "Message generated", body = GenerateMessageResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Failed to generate message", body = ErrorResponse)
    )
)]
pub async fn generate_message(
    State(state): State<ApiState>,
    body: Bytes,
) -> ApiResponse<Json<GenerateMessageResponse>> {
    let params = parse_body::<GenerateMessageRequest>(&body)?;
    let (Some(target_language), Some(user_intent), Some(tone)) = (
        required(params.target_language),
        required(params.user_intent),
        required(params.tone),
    ) else {
        return Err(ApiError::ClientError(
            "Missing required fields".to_string(),
        ));
    };
    info!(task = "generate message", language = %target_language, tone = %tone);

    let prompt = prompt::generate_message(
        &target_language,
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

    let reply_translation =
        back_translate(state.completion.as_ref(), &target_language, &reply)
            .await;

    Ok(Json(GenerateMessageResponse {
        reply,
        reply_translation,
    }))
}
