//! Represents a product row in the catalog.
//!
//! # Ordering
//! `id` is the stable ordering key. Every listing is sorted ascending by it, which is
//! what makes offset pagination repeatable between two identical requests.
//!
//! Products are read-only copies: the record store owns the rows and the client
//! holds whatever a fetch returned, stale from the moment it arrives.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,

    // Pricing
    pub price: Option<f64>,
    pub cost: Option<f64>,

    // Physical dimensions
    pub weight: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub material: Option<String>,
    pub manufacturer: Option<String>,
    pub country_of_origin: Option<String>,
    pub barcode: Option<String>,

    // Inventory
    pub stock_quantity: i32,
    pub min_stock_level: i32,
    pub max_stock_level: i32,

    // Flags
    pub is_active: bool,
    pub is_featured: bool,
    pub is_digital: bool,
    pub requires_shipping: bool,

    pub tax_rate: Option<f64>,
    pub warranty_months: Option<i32>,
    pub supplier_name: Option<String>,
    pub supplier_code: Option<String>,

    // Taxonomy
    pub season: Option<String>,
    pub collection: Option<String>,
    pub style: Option<String>,
    pub pattern: Option<String>,
    pub fabric_composition: Option<String>,
    pub care_instructions: Option<String>,
    pub tags: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub slug: Option<String>,

    // Engagement
    pub rating_average: Option<f64>,
    pub rating_count: i32,
    pub view_count: i32,
    pub purchase_count: i32,

    // Timestamps
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_restocked_at: Option<DateTime<Utc>>,
    pub discontinued_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Creates a product with only the required columns filled in.
    ///
    /// Optional columns start as `None`, counters at zero, and the flags match the
    /// store defaults (active, physical, shipped).
    pub fn new(id: impl Into<ProductId>, sku: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sku: sku.into(),
            name: name.into(),
            description: None,
            brand: None,
            category: None,
            subcategory: None,
            price: None,
            cost: None,
            weight: None,
            length: None,
            width: None,
            height: None,
            color: None,
            size: None,
            material: None,
            manufacturer: None,
            country_of_origin: None,
            barcode: None,
            stock_quantity: 0,
            min_stock_level: 0,
            max_stock_level: 0,
            is_active: true,
            is_featured: false,
            is_digital: false,
            requires_shipping: true,
            tax_rate: None,
            warranty_months: None,
            supplier_name: None,
            supplier_code: None,
            season: None,
            collection: None,
            style: None,
            pattern: None,
            fabric_composition: None,
            care_instructions: None,
            tags: None,
            meta_title: None,
            meta_description: None,
            slug: None,
            rating_average: None,
            rating_count: 0,
            view_count: 0,
            purchase_count: 0,
            created_at: None,
            updated_at: None,
            last_restocked_at: None,
            discontinued_at: None,
        }
    }

    /// Stock is at or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity > 0 && self.stock_quantity <= self.min_stock_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_with_snake_case_fields() {
        let mut product = Product::new(ProductId(7), "SKU-7", "Desk Lamp");
        product.country_of_origin = Some("PT".to_string());

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["country_of_origin"], "PT");
        assert!(value["discontinued_at"].is_null());
    }

    #[test]
    fn test_low_stock_excludes_out_of_stock() {
        let mut product = Product::new(ProductId(1), "SKU-1", "Mug");
        product.min_stock_level = 5;

        product.stock_quantity = 0;
        assert!(!product.is_low_stock());
        product.stock_quantity = 5;
        assert!(product.is_low_stock());
        product.stock_quantity = 6;
        assert!(!product.is_low_stock());
    }
}
