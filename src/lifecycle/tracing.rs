//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber::fmt` subscriber that
//! hides the module prefix (`with_target(false)`) and reads its filter from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle** at `info`: startup, shutdown, requests served
//! - **Requests** at `debug`: one line per query with its `limit`/`offset`
//! - **Page loads** at `info`, inside a `fetch_page` span carrying the offset
//! - **Failures** at `warn`: rejected transport input, failed or aborted fetches
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and page loads
//! RUST_LOG=info cargo run
//!
//! # Every request, with its parameters
//! RUST_LOG=debug cargo run
//!
//! # Only the table
//! RUST_LOG=catalog_browser::table=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`** a scroll through 120 products looks like:
//!
//! ```text
//! INFO Query actor started store_type="SqliteStore"
//! INFO fetch_page{offset=0 limit=50}: Page loaded kind=Initial offset=0 page_len=50 total_loaded=50 has_more=true
//! INFO fetch_page{offset=50 limit=50}: Page loaded kind=NextPage offset=50 page_len=50 total_loaded=100 has_more=true
//! INFO fetch_page{offset=100 limit=50}: Page loaded kind=NextPage offset=100 page_len=20 total_loaded=120 has_more=false
//! INFO Shutdown store_type="SqliteStore" served=5
//! ```

/// Installs the global subscriber. Later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
