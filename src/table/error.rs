use thiserror::Error;

use crate::clients::ClientError;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Fetch at offset {offset} failed: {source}")]
    Fetch { offset: u64, source: ClientError },

    /// The fetch task went away without sending an outcome.
    #[error("Fetch ended without an outcome")]
    FetchAborted,
}
