use async_trait::async_trait;

use crate::clients::ClientError;
use crate::model::{ListParams, Product};

/// Anything the table controller can pull pages of products from.
///
/// Implementations must be cheap to clone: the controller hands a clone to every
/// fetch task it spawns.
#[async_trait]
pub trait PageSource: Clone + Send + Sync + 'static {
    /// Fetch at most `params.limit` products starting at `params.offset`.
    async fn fetch_page(&self, params: ListParams) -> Result<Vec<Product>, ClientError>;
}
