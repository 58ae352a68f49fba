use serde::de::DeserializeOwned;
use tracing::warn;

use crate::ApiError;

/// Decodes a json body. Content type is not checked.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(task = "parse body", error = %e);
        ApiError::ClientError("Invalid request body".to_string())
    })
}

/// `None` for absent and empty fields alike.
pub fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(required(Some(String::new())), None);
        assert_eq!(required(None), None);
    }
}
