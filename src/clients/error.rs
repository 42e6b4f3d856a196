use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The transport answered with JSON that does not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
