//! visicount gateway library entry.
//!
//! Wires config, the counter store, the request handler, and the HTTP surface
//! into one stack. Consumed by the binary (`main.rs`) and integration tests.

pub mod app_state;
pub mod config;
pub mod handler;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
pub mod transport;

pub use handler::CounterHandler;
