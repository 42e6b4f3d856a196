use crate::model::{ListParams, Product, ProductStats};
use crate::store::error::StoreError;

/// Read access to products and statistics snapshots.
///
/// Implementations must be `Send` so the query actor can own them inside a tokio task;
/// they do not need to be `Sync` because the actor never shares them.
pub trait RecordStore: Send + 'static {
    /// Products ordered ascending by id, skipping `offset` rows and returning at most
    /// `limit`. An offset past the end yields an empty vector.
    fn list_products(&self, params: ListParams) -> Result<Vec<Product>, StoreError>;

    /// The snapshot with the greatest `created_at`, if any exist.
    fn latest_stats(&self) -> Result<Option<ProductStats>, StoreError>;

    fn product_count(&self) -> Result<u64, StoreError>;

    /// Seeding only. Nothing reachable from the transport calls this.
    fn insert_product(&mut self, product: &Product) -> Result<(), StoreError>;

    /// Seeding only. Nothing reachable from the transport calls this.
    fn insert_stats(&mut self, stats: &ProductStats) -> Result<(), StoreError>;
}
