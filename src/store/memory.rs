use std::collections::BTreeMap;

use crate::model::{ListParams, Product, ProductId, ProductStats};
use crate::store::error::StoreError;
use crate::store::traits::RecordStore;

/// In-memory record store.
///
/// Products live in a `BTreeMap` keyed by id, so iteration order is already the
/// ascending-id order that pagination relies on.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    products: BTreeMap<ProductId, Product>,
    stats: Vec<ProductStats>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn list_products(&self, params: ListParams) -> Result<Vec<Product>, StoreError> {
        let skip = usize::try_from(params.offset).unwrap_or(usize::MAX);
        Ok(self
            .products
            .values()
            .skip(skip)
            .take(params.limit as usize)
            .cloned()
            .collect())
    }

    fn latest_stats(&self) -> Result<Option<ProductStats>, StoreError> {
        Ok(self.stats.iter().max_by_key(|s| (s.created_at, s.id)).cloned())
    }

    fn product_count(&self) -> Result<u64, StoreError> {
        Ok(self.products.len() as u64)
    }

    fn insert_product(&mut self, product: &Product) -> Result<(), StoreError> {
        self.products.insert(product.id, product.clone());
        Ok(())
    }

    fn insert_stats(&mut self, stats: &ProductStats) -> Result<(), StoreError> {
        self.stats.push(stats.clone());
        Ok(())
    }
}
