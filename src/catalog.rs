//! Catalog Store
//!
//! Three fixed, read-only product lists. Ids are unique within a catalog but
//! repeat across catalogs.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::cart::state::SharedState;

/// A purchasable item as exposed by the catalog API.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: u32,
    pub name: &'static str,
    pub price: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl CatalogItem {
    const fn new(id: u32, name: &'static str, price: u32) -> Self {
        Self {
            id,
            name,
            price,
            description: None,
        }
    }

    const fn described(id: u32, name: &'static str, price: u32, description: &'static str) -> Self {
        Self {
            id,
            name,
            price,
            description: Some(description),
        }
    }
}

const INSURANCE_PLANS: [CatalogItem; 4] = [
    CatalogItem::new(1, "Single Coverage", 100),
    CatalogItem::new(2, "Family Coverage (2 Adults + 2 Children)", 200),
    CatalogItem::new(3, "Parental Coverage", 150),
    CatalogItem::new(4, "Additional Coverage (Top-up)", 50),
];

const CHECKUP_PLANS: [CatalogItem; 4] = [
    CatalogItem::new(1, "Basic Health Check-up", 50),
    CatalogItem::new(2, "Standard Health Check-up", 100),
    CatalogItem::new(3, "Comprehensive Health Check-up", 150),
    CatalogItem::new(4, "Advanced Health Check-up", 200),
];

const DRINKS: [CatalogItem; 4] = [
    CatalogItem::described(1, "Green Tea", 10, "Healthy and refreshing green tea."),
    CatalogItem::described(2, "Protein Shake", 20, "Nutrient-rich protein shake."),
    CatalogItem::described(3, "Fruit Smoothie", 15, "Delicious and healthy fruit smoothie."),
    CatalogItem::described(4, "Herbal Drink", 12, "Natural and healthy herbal drink."),
];

/// The three product categories the shop sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Insurance,
    Checkups,
    Drinks,
}

impl Catalog {
    pub fn items(self) -> &'static [CatalogItem] {
        match self {
            Catalog::Insurance => &INSURANCE_PLANS,
            Catalog::Checkups => &CHECKUP_PLANS,
            Catalog::Drinks => &DRINKS,
        }
    }

    /// Path of the JSON listing under `/api`.
    pub fn api_path(self) -> &'static str {
        match self {
            Catalog::Insurance => "/api/insurance-plans",
            Catalog::Checkups => "/api/health-checkups",
            Catalog::Drinks => "/api/health-drinks",
        }
    }
}

pub fn list_insurance_plans() -> &'static [CatalogItem] {
    Catalog::Insurance.items()
}

pub fn list_checkup_plans() -> &'static [CatalogItem] {
    Catalog::Checkups.items()
}

pub fn list_drinks() -> &'static [CatalogItem] {
    Catalog::Drinks.items()
}

/// Creates the read-only catalog listing routes
pub fn routes() -> Router<SharedState> {
    [Catalog::Insurance, Catalog::Checkups, Catalog::Drinks]
        .into_iter()
        .fold(Router::new(), |router, catalog| {
            router.route(
                catalog.api_path(),
                get(move || list_catalog(catalog)).fallback(crate::router::not_found),
            )
        })
}

async fn list_catalog(catalog: Catalog) -> impl IntoResponse {
    (StatusCode::OK, Json(catalog.items()))
}
