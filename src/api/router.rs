//! HTTP router.
//!
//! API routes (`/predict`, `/health`) carry `Cache-Control: no-store`.
//! Every other GET falls through to the static directory, where `/`
//! resolves to `index.html`.
//!
//! Layers (outermost → innermost):
//! 1. Panic catcher → 2. Request log → 3. Handler / static files

use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::error::ApiError;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::pipeline::Engine;

/// Build the full application router.
pub fn app_router(engine: Arc<Engine>, static_dir: &Path) -> Router {
    build_router(ApiContext::new(engine), static_dir)
}

fn build_router(ctx: ApiContext, static_dir: &Path) -> Router {
    let api = Router::new()
        .route("/predict", post(endpoints::predict::predict))
        .route("/health", get(endpoints::health::check))
        .with_state(ctx)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .merge(api)
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Convert a handler panic into the standard 500 body. The server keeps
/// running; the engine holds no mutable state to corrupt.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
