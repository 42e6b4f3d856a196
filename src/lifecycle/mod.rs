//! # System Lifecycle
//!
//! Starts the query actor, wires the transport and clients in front of it, and
//! shuts it all down again.
//!
//! ## Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the mailbox
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the actor logs how many requests it served and exits
//!
//! Table controllers and their in-flight fetch tasks hold client clones too. The
//! actor keeps running until the last of them is gone.
//!
//! ## Observability
//!
//! See the [`tracing`](self::tracing) module for [`setup_tracing`] and what each level shows.

pub mod catalog_system;
pub mod tracing;

pub use self::catalog_system::*;
pub use self::tracing::setup_tracing;
