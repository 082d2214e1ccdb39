//! Routing module for the shop application

use crate::{cart::state::SharedState, error::AppError};
use axum::{
    body::Body,
    extract::Request,
    http::Uri,
    middleware::Next,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        tracing::info!("REQ: {} {}", method, uri);
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!("RES: {} {} -> {}", method, uri, res.status());
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::pages::routes())
        .merge(crate::catalog::routes())
        .merge(crate::cart::routes())
        .fallback(not_found)
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

/// Answers anything no route claims, including known paths hit with a method
/// they do not serve. The `/api/` surface gets a JSON error, the rest plain
/// text.
pub async fn not_found(uri: Uri) -> AppError {
    if uri.path().starts_with("/api/") {
        AppError::ApiEndpointNotFound
    } else {
        AppError::PageNotFound
    }
}
