//! Error types for the shop service
//!
//! Every request resolves locally to a status code and body: JSON for the
//! `/api/*` surface, plain text for pages and static assets.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::cart::models::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Item not found in cart")]
    CartItemNotFound,

    #[error("API endpoint not found")]
    ApiEndpointNotFound,

    #[error("Page Not Found")]
    PageNotFound,

    #[error("Internal Server Error")]
    Template(#[source] std::io::Error),

    #[error("Payment processing failed")]
    PaymentTask(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::CartItemNotFound | AppError::ApiEndpointNotFound | AppError::PageNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::Template(_) | AppError::PaymentTask(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::CartItemNotFound
            | AppError::ApiEndpointNotFound
            | AppError::PaymentTask(_) => (
                status,
                Json(ErrorResponse {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            AppError::PageNotFound | AppError::Template(_) => {
                if let AppError::Template(err) = &self {
                    tracing::error!(error = %err, "failed to read page template");
                }
                (
                    status,
                    [(header::CONTENT_TYPE, "text/plain")],
                    self.to_string(),
                )
                    .into_response()
            }
        }
    }
}

/// Raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
