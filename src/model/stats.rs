use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A periodically refreshed snapshot of catalog-wide aggregates.
///
/// The store may hold many snapshots; "latest" is the one with the greatest
/// `created_at`. There may be none at all before the first refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStats {
    pub id: i64,
    pub total_products: i64,
    pub active_products: i64,
    pub featured_products: i64,
    pub digital_products: i64,
    pub out_of_stock_products: i64,
    pub low_stock_products: i64,
    pub total_stock_quantity: i64,
    pub total_inventory_value: f64,
    pub average_price: Option<f64>,
    pub average_rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl ProductStats {
    /// An all-zero snapshot taken at `created_at`.
    pub fn empty(id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            total_products: 0,
            active_products: 0,
            featured_products: 0,
            digital_products: 0,
            out_of_stock_products: 0,
            low_stock_products: 0,
            total_stock_quantity: 0,
            total_inventory_value: 0.0,
            average_price: None,
            average_rating: None,
            created_at,
        }
    }
}

/// Transport payload for `getLatestProductStats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsEnvelope {
    pub stats: Option<ProductStats>,
}
