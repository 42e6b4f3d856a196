//! Text rendering of the product table and the stats panel.

pub mod columns;
pub mod format;
pub mod render;

pub use columns::*;
pub use format::*;
pub use render::*;
