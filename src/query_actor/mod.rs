//! # Query Actor
//!
//! The read-only query service for the catalog, run inside a [`QueryActor`].
//!
//! ## Structure
//!
//! - [`service`] - [`QueryService`], the stateless operations over a [`RecordStore`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use catalog_browser::model::ListParams;
//! use catalog_browser::query_actor;
//! use catalog_browser::store::{seed, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = MemoryStore::new();
//!     seed::populate(&mut store, 10, chrono::Utc::now())?;
//!
//!     let (actor, client) = query_actor::new(store);
//!     tokio::spawn(actor.run());
//!
//!     let page = client.list_products(ListParams::new(5, 0)).await?;
//!     assert_eq!(page.len(), 5);
//!     Ok(())
//! }
//! ```

pub mod service;

pub use service::*;

use crate::framework::{QueryActor, QueryClient};
use crate::store::RecordStore;

/// Mailbox size used when the caller does not configure one.
pub const DEFAULT_BUFFER: usize = 32;

/// Creates a new query actor over `store` and its client.
pub fn new<S: RecordStore>(store: S) -> (QueryActor<S>, QueryClient) {
    QueryActor::new(store, DEFAULT_BUFFER)
}
