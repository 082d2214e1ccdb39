//! HTML pages and static assets served from the public directory.
//!
//! Files are read on every request so edits to `public/` show up without a
//! restart.

use crate::{
    cart::state::SharedState,
    error::{AppError, Result},
    router::not_found,
};
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use std::path::{Component, Path as FsPath, PathBuf};

/// Page routes and the template each one renders.
pub const PAGES: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/insurance", "insurance.html"),
    ("/health-checkups", "health-checkup.html"),
    ("/health-drinks", "health-drinks.html"),
    ("/cart", "cart.html"),
    ("/payment", "payment.html"),
    ("/success", "success.html"),
];

/// Asset directories and the content type served for everything under them.
pub const ASSETS: &[(&str, &str)] = &[
    ("css", "text/css"),
    ("images", "image/x-icon"),
    ("js", "application/javascript"),
];

/// Creates the page and static asset routes
pub fn routes() -> Router<SharedState> {
    let router = PAGES.iter().fold(Router::new(), |router, &(path, template)| {
        router.route(
            path,
            get(move |State(state): State<SharedState>| render_page(state, template))
                .fallback(not_found),
        )
    });

    ASSETS.iter().fold(router, |router, &(dir, content_type)| {
        router.route(
            &format!("/{dir}/*path"),
            get(
                move |State(state): State<SharedState>, Path(path): Path<String>| {
                    serve_asset(state, dir, path, content_type)
                },
            )
            .fallback(not_found),
        )
    })
}

async fn render_page(state: SharedState, template: &'static str) -> Result<Html<String>> {
    let html = tokio::fs::read_to_string(state.public_dir.join(template))
        .await
        .map_err(AppError::Template)?;
    Ok(Html(html))
}

async fn serve_asset(
    state: SharedState,
    dir: &'static str,
    path: String,
    content_type: &'static str,
) -> Result<impl IntoResponse> {
    let file = asset_path(&state.public_dir, dir, &path).ok_or(AppError::PageNotFound)?;

    let bytes = tokio::fs::read(&file).await.map_err(|e| {
        tracing::debug!(?file, error = %e, "static asset not found");
        AppError::PageNotFound
    })?;

    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}

/// Resolves `path` inside `public_dir/dir`, refusing anything that could
/// climb out of it.
fn asset_path(public_dir: &FsPath, dir: &str, path: &str) -> Option<PathBuf> {
    let relative = FsPath::new(path);
    let contained = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));

    if !contained || path.is_empty() {
        return None;
    }

    Some(public_dir.join(dir).join(relative))
}
