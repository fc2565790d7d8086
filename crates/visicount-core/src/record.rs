//! The single counter record.

use serde::{Deserialize, Serialize};

/// Key of the only record ever addressed.
pub const COUNTER_KEY: &str = "0";

/// Stored value `{count: n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    pub count: u64,
}

impl CounterRecord {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    /// The record that follows this one, or `None` on overflow.
    pub fn incremented(self) -> Option<Self> {
        self.count.checked_add(1).map(Self::new)
    }
}
