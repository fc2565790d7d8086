//! Transport adapters between axum and the handler's event/response types.

pub mod http;
