use tracing::debug;

use crate::model::{ListParams, Product, ProductStats};
use crate::store::{RecordStore, StoreError};

/// Literal returned by the health check.
pub const HEALTH_OK: &str = "OK";

/// Stateless read operations over a record store.
///
/// Every method is a pure read: safe to retry and safe to interleave with any other.
pub struct QueryService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> QueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Products ascending by id, at most `params.limit` of them, starting at the
    /// `params.offset`-th row. Past the end this is an empty vector.
    pub fn list_products(&self, params: ListParams) -> Result<Vec<Product>, StoreError> {
        let products = self.store.list_products(params)?;
        debug!(
            limit = params.limit,
            offset = params.offset,
            returned = products.len(),
            "list_products"
        );
        Ok(products)
    }

    /// The snapshot with the greatest `created_at`, or `None` for an empty store.
    pub fn latest_stats(&self) -> Result<Option<ProductStats>, StoreError> {
        self.store.latest_stats()
    }

    pub fn health_check(&self) -> &'static str {
        HEALTH_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{seed, MemoryStore, SqliteStore};
    use chrono::{TimeZone, Utc};

    fn seeded_memory(count: usize) -> QueryService<MemoryStore> {
        let mut store = MemoryStore::new();
        seed::populate(&mut store, count, Utc::now()).unwrap();
        QueryService::new(store)
    }

    fn check_page_properties<S: RecordStore>(service: &QueryService<S>, total: u64) {
        for limit in [0u32, 1, 7, 20, 50, 200] {
            for offset in [0u64, 1, 19, 49, 50, 99, 119, 120, 500] {
                let page = service.list_products(ListParams::new(limit, offset)).unwrap();
                assert!(page.len() <= limit as usize);
                assert!(page.windows(2).all(|w| w[0].id < w[1].id));
                let expected = limit.min(total.saturating_sub(offset) as u32) as usize;
                assert_eq!(page.len(), expected, "limit={limit} offset={offset}");
                if let Some(first) = page.first() {
                    // ids are 1..=total, so the offset-th row has id offset + 1
                    assert_eq!(first.id.0, offset as i64 + 1);
                }
            }
        }
    }

    #[test]
    fn test_list_products_page_properties_memory() {
        check_page_properties(&seeded_memory(120), 120);
    }

    #[test]
    fn test_list_products_page_properties_sqlite() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        seed::populate(&mut store, 120, Utc::now()).unwrap();
        check_page_properties(&QueryService::new(store), 120);
    }

    #[test]
    fn test_list_products_is_idempotent() {
        let service = seeded_memory(60);
        let params = ListParams::new(25, 10);
        assert_eq!(
            service.list_products(params).unwrap(),
            service.list_products(params).unwrap()
        );
    }

    #[test]
    fn test_latest_stats_empty_and_ordered() {
        let mut store = MemoryStore::new();
        assert_eq!(QueryService::new(store.clone()).latest_stats().unwrap(), None);

        let t1 = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        store.insert_stats(&seed::aggregate_stats(&[], 1, t1)).unwrap();
        store.insert_stats(&seed::aggregate_stats(&[], 2, t2)).unwrap();

        let latest = QueryService::new(store).latest_stats().unwrap().unwrap();
        assert_eq!(latest.created_at, t2);
    }

    #[test]
    fn test_health_check_literal() {
        assert_eq!(seeded_memory(0).health_check(), "OK");
    }
}
