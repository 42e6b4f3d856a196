//! # Incremental Table
//!
//! Client-side state for the infinite-scroll product table.
//!
//! - [`controller`] - [`TableController`]: loaded pages, the single-fetch guard, scroll handling
//! - [`virtualizer`] - pure windowing math over a fixed row height
//!
//! ## Fetch Flow
//!
//! ```text
//! on_scroll ─► sentinel visible? ─► fetch_next_page ─► tokio::spawn(fetch_page)
//!                                        │                     │
//!                                  guard set now          oneshot outcome
//!                                                              │
//!                                  pump() ◄────────────────────┘
//!                                    └─► append page, recompute has_more, release guard
//! ```
//!
//! The next offset is always the number of rows already loaded. If the store
//! changes between two fetches, rows can be skipped or repeated.

pub mod controller;
pub mod error;
pub mod virtualizer;

pub use controller::*;
pub use error::TableError;
pub use virtualizer::{visible_range, VirtualItem, VisibleRange};
