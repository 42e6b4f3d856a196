//! Error types for the transport layer.

use thiserror::Error;

use crate::framework::FrameworkError;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The input object failed shape validation; the query never ran.
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Unknown procedure: {0}")]
    UnknownProcedure(String),

    #[error("Query failed: {0}")]
    Framework(#[from] FrameworkError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
