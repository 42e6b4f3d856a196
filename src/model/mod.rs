//! Pure data structures (DTOs) that flow from the record store to the table.

pub mod params;
pub mod product;
pub mod stats;

pub use params::*;
pub use product::*;
pub use stats::*;
