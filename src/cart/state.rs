//! Shopping Cart State Management
//!
//! The cart is one ordered list shared by every client. It is owned by
//! [`AppState`] and handed to handlers through axum's `State`, so separate
//! router instances (and tests) never see each other's carts.

use super::{
    helpers::{format_item_summary, position_of},
    models::CartLineItem,
};
use crate::{
    config::Config,
    error::{AppError, Result},
};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::Mutex;

// =============================================================================
// Cart Service
// =============================================================================

pub struct CartService {
    /// Line items in insertion order. Every mutation takes the lock for the
    /// whole step, so add/remove/list never interleave.
    items: Mutex<Vec<CartLineItem>>,

    payment_delay: Duration,
}

impl CartService {
    pub fn new(payment_delay: Duration) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            payment_delay,
        }
    }

    /// Snapshot of the cart in insertion order.
    pub async fn list(&self) -> Vec<CartLineItem> {
        self.items.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }

    /// Appends `item` as submitted.
    pub async fn add(&self, item: CartLineItem) {
        let mut items = self.items.lock().await;
        items.push(item);
        tracing::info!(cart_size = items.len(), "item added to cart");
    }

    /// Removes the first line item whose id equals `id`, keeping the order of
    /// the rest. Leaves the cart untouched when nothing matches.
    pub async fn remove(&self, id: Option<&str>) -> Result<CartLineItem> {
        let mut items = self.items.lock().await;
        match position_of(&items, id) {
            Some(index) => {
                let removed = items.remove(index);
                tracing::info!(?id, cart_size = items.len(), "item removed from cart");
                Ok(removed)
            }
            None => {
                tracing::debug!(?id, "remove requested for item not in cart");
                Err(AppError::CartItemNotFound)
            }
        }
    }

    /// Simulates an external payment: waits for the payment delay, then
    /// clears whatever the cart holds at that moment.
    ///
    /// The lock is not held while waiting. Items added during the delay are
    /// cleared along with the rest. Returns the line items that were cleared.
    pub async fn process_payment(&self) -> Vec<CartLineItem> {
        tracing::info!(delay_ms = self.payment_delay.as_millis() as u64, "processing payment");
        tokio::time::sleep(self.payment_delay).await;

        let cleared = std::mem::take(&mut *self.items.lock().await);
        tracing::info!("payment complete, cleared: {}", format_item_summary(&cleared));
        cleared
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the cart and asset location
pub struct AppState {
    pub cart: CartService,

    /// Path to the directory containing HTML pages and static assets.
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        tracing::info!("Using public directory: {:?}", config.public_dir);

        Self {
            cart: CartService::new(config.payment_delay),
            public_dir: config.public_dir.clone(),
        }
    }

    pub fn shared(config: &Config) -> SharedState {
        Arc::new(Self::new(config))
    }
}
