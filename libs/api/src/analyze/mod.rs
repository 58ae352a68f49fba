use axum::{body::Bytes, extract::State, Json};
use tracing::info;

pub mod request;
pub mod response;

use crate::{
    completion::Attachment,
    extract, prompt,
    request::{parse_body, required},
    response::{ApiResponse, ErrorResponse, IntoApiResponse},
    ApiError, ApiState,
};

use self::{request::AnalyzeImageRequest, response::AnalyzeImageResponse};

static FAILED_MESSAGE: &str = "Failed to analyze image.";

/// Extract, identify and translate the text in a photo
#[utoipa::path(
    post,
    path = "/api/analyzeImage",
    request_body = AnalyzeImageRequest,
    responses(
        (status = 200, description = "Text extracted and translated", body = AnalyzeImageResponse),
        (status = 400, description = "No image data provided", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Failed to analyze image", body = ErrorResponse)
    )
)]
pub async fn analyze_image(
    State(state): State<ApiState>,
    body: Bytes,
) -> ApiResponse<Json<AnalyzeImageResponse>> {
    info!(task = "analyze image", "endpoint hit");

    let params = parse_body::<AnalyzeImageRequest>(&body)?;
    let Some(image) = required(params.image) else {
        return Err(ApiError::ClientError(
            "No image data provided".to_string(),
        ));
    };

    info!(task = "analyze image", "sending request to model");
    let completion = state
        .completion
        .generate_completion(prompt::ANALYZE_IMAGE, Some(Attachment::jpeg(image)))
        .await
        .into_response(FAILED_MESSAGE)?;

    let response = extract::parse_json::<AnalyzeImageResponse>(&completion)
        .and_then(AnalyzeImageResponse::validate)
        .into_response(FAILED_MESSAGE)?;

    info!(task = "analyze image", language = %response.language, "completed");
    Ok(Json(response))
}
