use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Body, Client,
};
use tracing::debug;

use crate::error::{Error, Result};

pub mod generate_content;

/// Thin wrapper over the Gemini REST API.
///
/// The api key travels as a sensitive default header, so it never shows up
/// in request urls or `Debug` output.
#[derive(Debug, Clone)]
pub struct Models {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl Models {
    pub fn new(
        api_key: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let mut api_key =
            HeaderValue::from_str(api_key).map_err(|_| Error::InvalidApiKey)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-goog-api-key", api_key);

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(Error::Request)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout,
        })
    }

    async fn string_response<R: Into<Body>>(
        &self,
        request: R,
        model: &str,
        method: &str,
    ) -> Result<String> {
        let url = format!("{}/models/{}:{}", self.base_url, model, method);
        debug!(task = "send", url = %url);

        let response = self
            .client
            .post(url)
            .body(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(Error::Status { status, body: text });
        }

        Ok(text)
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout(self.timeout.as_secs())
        } else {
            Error::Request(e)
        }
    }
}
