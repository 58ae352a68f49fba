use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("api key is not a valid header value")]
    InvalidApiKey,
    #[error("request timed out after {0} seconds")]
    Timeout(u64),
    #[error("status code: {status}")]
    Status { status: StatusCode, body: String },
    #[error("failed to send request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("failed to serialize request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
