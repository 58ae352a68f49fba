use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    clients::gemini::GeminiCompletion,
    not_found::{get_404, method_not_allowed},
};

pub mod analyze;
mod clients;
pub mod completion;
pub mod extract;
pub mod healthz;
pub mod message;
mod not_found;
pub mod prompt;
mod request;
pub mod reply;
pub mod response;

pub use completion::{Attachment, Completion, CompletionError};

/// Camera photos arrive base64 encoded inside the json body.
const BODY_LIMIT: usize = 10 * 1024 * 1024;

pub enum ApiError {
    MethodNotAllowed,
    NotFound,
    ClientError(String),
    ServerError {
        message: String,
        details: Option<String>,
    },
}

#[derive(Clone)]
pub struct ApiState {
    completion: Arc<dyn Completion>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        analyze::analyze_image,
        message::generate_message,
        reply::generate_reply,
        healthz::get_health,
    ),
    components(schemas(
        analyze::request::AnalyzeImageRequest,
        analyze::response::AnalyzeImageResponse,
        message::request::GenerateMessageRequest,
        message::response::GenerateMessageResponse,
        reply::request::GenerateReplyRequest,
        reply::response::GenerateReplyResponse,
        healthz::HealthResponse,
        response::ErrorResponse,
    )),
    tags(
        (name = "prompt-gateway", description = "Prompted completion endpoints")
    )
)]
struct ApiDoc;

/// Builds the router backed by Gemini.
pub fn serve(config: &util::Config, api_key: &str) -> anyhow::Result<Router> {
    info!(
        task = "start api serving",
        text_model = %config.gemini.text_model,
        vision_model = %config.gemini.vision_model
    );

    let completion = GeminiCompletion::new(api_key, &config.gemini)?;

    router(Arc::new(completion), &config.server.allowed_origins)
}

/// Builds the router around any [`Completion`].
pub fn router(
    completion: Arc<dyn Completion>,
    allowed_origins: &[String],
) -> anyhow::Result<Router> {
    let state = ApiState { completion };

    let api_router = Router::new()
        .route(
            "/analyzeImage",
            post(analyze::analyze_image).fallback(method_not_allowed),
        )
        .route(
            "/generateMessage",
            post(message::generate_message).fallback(method_not_allowed),
        )
        .route(
            "/generateReply",
            post(reply::generate_reply).fallback(method_not_allowed),
        )
        .with_state(state);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .nest("/api", api_router)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .layer(cors(allowed_origins)?)
        .fallback(get_404);

    Ok(router)
}

fn cors(allowed_origins: &[String]) -> anyhow::Result<CorsLayer> {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}
