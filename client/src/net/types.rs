//! Wire DTOs for the assistant backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so responses deserialize
//! verbatim. Optional collections default to empty so sparse payloads still
//! decode; products are never mutated after decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Product identifier. Backends send either a number or a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

/// A store offering a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Retailer {
    /// Store display name.
    pub name: String,
    /// Price at this store.
    pub price: f64,
    /// Product page at this store, if known.
    #[serde(default)]
    pub url: Option<String>,
    /// Whether the backend marked this as the best offer.
    #[serde(default)]
    pub is_best: bool,
}

/// A recommended product as returned by `/api/assist`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Headline price.
    pub price: f64,
    /// Average rating, typically on a 0-5 scale.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Key specs in display order.
    #[serde(default)]
    pub specs: Vec<String>,
    /// Offers in display order.
    #[serde(default)]
    pub retailers: Vec<Retailer>,
    /// Why the assistant picked this product.
    #[serde(default)]
    pub why: Option<String>,
}

impl Product {
    /// The first retailer flagged as the best offer.
    pub fn best_retailer(&self) -> Option<&Retailer> {
        self.retailers.iter().find(|r| r.is_best)
    }
}

/// A trending entry from `/api/trending`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingItem {
    pub title: String,
}

/// Body of `POST /api/assist`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistRequest {
    pub message: String,
}

/// Response of `POST /api/assist`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssistResponse {
    /// Research summary; also becomes the assistant's chat reply.
    pub summary: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<Product>,
}
