//! Shopping Cart Domain Models
//!
//! This module contains the data structures exchanged by the cart API.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A line in the shared cart.
///
/// Fields hold exactly what the client submitted: nothing is validated or
/// coerced to the catalog's numeric types, and a field the client left out
/// stays absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl CartLineItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            price: Some(price.into()),
        }
    }
}

/// Form body of `POST /api/add-to-cart`
pub type AddToCartForm = CartLineItem;

/// Query string of `DELETE /api/remove-from-cart`
#[derive(Debug, Default, Deserialize)]
pub struct RemoveFromCartQuery {
    pub id: Option<String>,
}

// =============================================================================
// Responses
// =============================================================================

pub const ITEM_ADDED: &str = "Item added to cart";
pub const ITEM_REMOVED: &str = "Item removed from cart";
pub const PAYMENT_SUCCESSFUL: &str = "Payment successful";

/// Acknowledgement returned by every successful cart mutation
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every JSON error response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
