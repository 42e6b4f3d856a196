//! Query actor framework.
//!
//! This module provides the typed request/response channel between the record store
//! and everything that reads from it.
//!
//! # Main Components
//!
//! - [`QueryActor`] - Owns a record store and answers requests sequentially
//! - [`QueryClient`] - Cloneable sender half used by the transport router
//! - [`QueryRequest`] - The read-only message set
//! - [`FrameworkError`] - Channel and store failures
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning a real actor.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
