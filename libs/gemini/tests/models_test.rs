use std::time::Duration;

use gemini::{
    models::generate_content::{
        GenerateContent, GenerateContentRequest, InlineData,
    },
    Error, Models,
};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const MODEL: &str = "gemini-1.5-flash";
const GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";

fn models(server: &MockServer, timeout: Duration) -> Models {
    Models::new("test-key", &server.uri(), timeout).unwrap()
}

#[tokio::test]
async fn test_generate_content_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "text": "read this" },
                    { "inlineData": { "mimeType": "image/jpeg", "data": "AAAA" } }
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "hello" }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = GenerateContentRequest::user(
        "read this",
        Some(InlineData {
            mime_type: "image/jpeg".to_string(),
            data: "AAAA".to_string(),
        }),
    );
    let response = models(&server, Duration::from_secs(5))
        .generate_content(MODEL, request)
        .await
        .unwrap();

    let parts = &response.candidates[0].content.as_ref().unwrap().parts;
    assert_eq!(parts[0].text.as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_generate_content_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(429).set_body_string("quota exceeded"),
        )
        .mount(&server)
        .await;

    let result = models(&server, Duration::from_secs(5))
        .generate_content(MODEL, GenerateContentRequest::user("hi", None))
        .await;

    match result {
        Err(Error::Status { status, body }) => {
            assert_eq!(status.as_u16(), 429);
            assert_eq!(body, "quota exceeded");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_content_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "candidates": [] }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let result = models(&server, Duration::from_millis(200))
        .generate_content(MODEL, GenerateContentRequest::user("hi", None))
        .await;

    assert!(matches!(result, Err(Error::Timeout(_))));
}

#[tokio::test]
async fn test_generate_content_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let result = models(&server, Duration::from_secs(5))
        .generate_content(MODEL, GenerateContentRequest::user("hi", None))
        .await;

    assert!(matches!(result, Err(Error::Decode(_))));
}

#[test]
fn test_debug_output_hides_api_key() {
    let models =
        Models::new("super-secret", "http://localhost", Duration::from_secs(1))
            .unwrap();

    assert!(!format!("{:?}", models).contains("super-secret"));
}
