pub mod enhance;
pub mod health;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Browser clients send these alongside the auth token.
const X_CLIENT_INFO: HeaderName = HeaderName::from_static("x-client-info");
const APIKEY: HeaderName = HeaderName::from_static("apikey");

/// Permissive CORS: any origin, the client's auth/info headers, POST + OPTIONS.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, X_CLIENT_INFO, APIKEY, CONTENT_TYPE])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/enhance-resume",
            post(enhance::handle_enhance).options(enhance::handle_preflight),
        )
        // Path used by existing hosted-function clients.
        .route(
            "/functions/v1/enhance-resume",
            post(enhance::handle_enhance).options(enhance::handle_preflight),
        )
        .layer(cors_layer())
        .with_state(state)
}
