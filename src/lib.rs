//! # Catalog Browser
//!
//! > **A read-only product catalog behind an actor, browsed through an infinite-scroll table.**
//!
//! A record store of products and periodic statistics snapshots sits behind a
//! single query actor. A small procedure-name transport validates JSON input in
//! front of it, and a table controller on the other side pulls pages on demand as
//! the viewport reaches the end of what has been loaded.
//!
//! ## 🏗️ Design
//!
//! ### One Actor Owns the Store
//! The [`QueryActor`](framework::QueryActor) runs in its own Tokio task and handles
//! requests one at a time, so the store (including a `rusqlite::Connection`) needs no
//! locks. Any number of [`QueryClient`](framework::QueryClient)s can share it.
//!
//! ### Validation at the Edge
//! The [`transport`] layer is the only place that looks at raw input. Negative or
//! fractional `limit`/`offset` values and unknown fields are rejected there, so the
//! actor only ever sees a well-formed [`ListParams`](model::ListParams).
//!
//! ### A Single Consumer for Table State
//! [`TableController`](table::TableController) mutates only through `&mut self`.
//! Fetches run on spawned tasks and report back over a oneshot; the owner applies
//! each outcome with [`pump`](table::TableController::pump). The in-flight guard is
//! set before the task is spawned, which is what keeps a burst of sentinel events
//! down to one request.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Data ([`model`], [`store`])
//! - [`Product`](model::Product), [`ProductStats`](model::ProductStats), [`ListParams`](model::ListParams)
//! - [`RecordStore`](store::RecordStore) with [`MemoryStore`](store::MemoryStore) and
//!   [`SqliteStore`](store::SqliteStore), plus deterministic demo data in [`store::seed`]
//!
//! ### 2. The Engine ([`framework`], [`query_actor`])
//! - [`QueryActor`](framework::QueryActor) / [`QueryClient`](framework::QueryClient) and the
//!   [`mock`](framework::mock) test helpers
//! - [`QueryService`](query_actor::QueryService), the stateless reads the actor performs
//!
//! ### 3. The Interface ([`transport`], [`clients`])
//! - [`Router`](transport::Router): `healthCheck`, `getAllProducts`, `getLatestProductStats`
//! - [`CatalogClient`](clients::CatalogClient), the typed [`PageSource`](clients::PageSource)
//!
//! ### 4. The Table ([`table`], [`presentation`])
//! - [`TableController`](table::TableController) and the pure [`visible_range`](table::visible_range)
//! - 48-column text rendering, loading and empty states, the stats summary
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! - [`CatalogSystem`](lifecycle::CatalogSystem) starts and stops the actor
//! - [`CatalogConfig`](config::CatalogConfig) reads `CATALOG_*` environment variables
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Scroll through the demo catalog with info logs
//! RUST_LOG=info cargo run
//!
//! # Serve from a sqlite file instead of memory
//! CATALOG_DB_PATH=catalog.db CATALOG_SEED_PRODUCTS=500 cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod presentation;
pub mod query_actor;
pub mod store;
pub mod table;
pub mod transport;
