//! REST API handlers for shopping cart operations
//!
//! This module implements the HTTP endpoints for listing, adding to and
//! removing from the shared cart, plus the simulated checkout.

use super::{models::*, state::SharedState};
use crate::{
    error::{AppError, Result},
    router::not_found,
};
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/cart", get(list_cart).fallback(not_found))
        .route("/api/add-to-cart", post(add_to_cart).fallback(not_found))
        .route(
            "/api/process-payment",
            post(process_payment).fallback(not_found),
        )
        .route(
            "/api/remove-from-cart",
            delete(remove_from_cart).fallback(not_found),
        )
}

/// Endpoint: GET /api/cart
async fn list_cart(State(state): State<SharedState>) -> impl IntoResponse {
    Json(state.cart.list().await)
}

/// Endpoint: POST /api/add-to-cart
/// Appends the submitted id/name/price exactly as sent. The body is decoded
/// as urlencoded whatever its content type; one that does not decode still
/// adds a line item, with every field absent.
async fn add_to_cart(State(state): State<SharedState>, body: Bytes) -> impl IntoResponse {
    let item = match serde_urlencoded::from_bytes::<AddToCartForm>(&body) {
        Ok(item) => item,
        Err(e) => {
            tracing::warn!("add-to-cart body not a form: {}", e);
            CartLineItem::default()
        }
    };

    state.cart.add(item).await;
    Json(MessageResponse::new(ITEM_ADDED))
}

/// Endpoint: POST /api/process-payment
/// Responds once the simulated payment has cleared the cart. The payment
/// runs on its own task so it completes even if the client disconnects.
async fn process_payment(State(state): State<SharedState>) -> Result<Json<MessageResponse>> {
    let payment = tokio::spawn(async move { state.cart.process_payment().await });
    payment.await?;

    Ok(Json(MessageResponse::new(PAYMENT_SUCCESSFUL)))
}

/// Endpoint: DELETE /api/remove-from-cart?id=<id>
/// A query that does not name a single id (e.g. `?id=1&id=2`) matches no
/// line item.
async fn remove_from_cart(
    State(state): State<SharedState>,
    query: std::result::Result<Query<RemoveFromCartQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>> {
    let Query(query) = query.map_err(|e| {
        tracing::warn!("remove-from-cart query rejected: {}", e.body_text());
        AppError::CartItemNotFound
    })?;

    state.cart.remove(query.id.as_deref()).await?;
    Ok(Json(MessageResponse::new(ITEM_REMOVED)))
}
