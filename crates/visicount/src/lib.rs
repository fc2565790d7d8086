//! Top-level facade crate for visicount.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use visicount_core::*;
}

pub mod gateway {
    pub use visicount_gateway::*;
}
