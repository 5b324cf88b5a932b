use crate::dust_client::DustClient;
use crate::image_client::ImageClient;
use crate::models::{
    ErrorResponse, GenerateContentRequest, GenerateImageRequest, HealthResponse,
    ImageGenerationResponse,
};
use crate::request_id::{RequestId, inject_request_id};
use axum::{
    Extension, Json, Router,
    extract::State,
    http::{Method, StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct AppState {
    pub dust_client: Arc<DustClient>,
    pub image_client: Arc<ImageClient>,
}

fn error_response(detail: String) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { detail })).into_response()
}

#[axum_macros::debug_handler]
pub async fn generate_content(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<GenerateContentRequest>,
) -> Response {
    debug!("raw request: {:?}", request);
    match state.dust_client.generate(&request, Some(&request_id)).await {
        Ok(content) => {
            info!("Content generated");
            Json(content.into_body()).into_response()
        }
        Err(e) => {
            warn!("Content generation failed: {}", e);
            error_response(e.to_string())
        }
    }
}

#[axum_macros::debug_handler]
pub async fn image_generation(
    State(state): State<AppState>,
    Json(request): Json<GenerateImageRequest>,
) -> Response {
    match state.image_client.generate(&request.prompt).await {
        Ok(image_url) => Json(ImageGenerationResponse { image_url }).into_response(),
        Err(e) => {
            warn!("Image generation failed: {}", e);
            error_response(e.to_string())
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy".to_string() })
}

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/generate-content", post(generate_content))
        .route("/image-generation", post(image_generation))
        .route("/health", get(health))
        .layer(middleware::from_fn(inject_request_id))
        .layer(cors_layer())
        .with_state(app_state)
}
