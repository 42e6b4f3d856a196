//! Record store: the read-only source of product rows and statistics snapshots.
//!
//! The query actor owns exactly one [`RecordStore`] and is the only thing that reads it.
//! Two implementations ship with the crate:
//!
//! - [`MemoryStore`] - an ordered in-memory map, used by tests and the demo binary.
//! - [`SqliteStore`] - a `rusqlite` database with the `products` / `product_stats` schema.
//!
//! [`seed`] generates deterministic demo rows for either of them.

pub mod error;
pub mod memory;
pub mod schema;
pub mod seed;
pub mod sqlite;
pub mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::RecordStore;
