use serde::{Deserialize, Serialize};

/// Server-side page size when the caller omits `limit`.
pub const DEFAULT_LIMIT: u32 = 20;

/// Validated pagination parameters for `list_products`.
///
/// Both fields are unsigned: a negative limit or offset is rejected by the transport
/// before a `ListParams` can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    pub limit: u32,
    pub offset: u64,
}

impl ListParams {
    pub fn new(limit: u32, offset: u64) -> Self {
        Self { limit, offset }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
