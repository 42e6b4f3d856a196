//! Error types for the record store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored value could not be turned back into a model field.
    #[error("corrupt row: {0}")]
    Corrupt(String),
}
