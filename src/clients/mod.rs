//! Typed clients over the transport, and the [`PageSource`] seam the table consumes.

pub mod catalog_client;
pub mod error;
pub mod page_source;

pub use catalog_client::*;
pub use error::*;
pub use page_source::*;
