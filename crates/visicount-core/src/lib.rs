//! visicount core: transport-agnostic event/response types, the counter record,
//! CORS header sets, and the shared error surface.
//!
//! Nothing here depends on a runtime or a transport, so the gateway, tests and
//! any other front end can share the same wire contract.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `CounterError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cors;
pub mod error;
pub mod protocol;
pub mod record;

/// Shared result type.
pub use error::{CounterError, ErrorKind, Result};
pub use record::{CounterRecord, COUNTER_KEY};
