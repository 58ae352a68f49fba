use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{completion::CompletionError, ApiError};

pub static BLOCKED_MESSAGE: &str =
    "The model returned no content, it might be blocked due to safety settings.";

/// Body of every non-2xx response.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, error, details) = match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
                None,
            ),
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, "Not found".to_string(), None)
            }
            ApiError::ClientError(message) => {
                (StatusCode::BAD_REQUEST, message, None)
            }
            ApiError::ServerError { message, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
        };

        (status_code, Json(ErrorResponse { error, details })).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    /// Logs the failure and turns it into a 500 carrying `message`.
    fn into_response(self, message: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, CompletionError> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!(error = ?e, "{}", message);

            let message = match e {
                CompletionError::BlockedOrEmpty { .. } => BLOCKED_MESSAGE,
                _ => message,
            };

            ApiError::ServerError {
                message: message.to_string(),
                details: Some(e.to_string()),
            }
        })
    }
}
