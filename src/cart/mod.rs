//! Shopping Cart Domain Module
//!
//! This module contains the cart business logic:
//! - Domain models (CartLineItem, form input, acknowledgements)
//! - Formatting helpers used in logs
//! - The shared cart service and application state
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, CartService, SharedState};
