//! Counter store: the key-value collaborator behind the handler.
//!
//! The handler only ever sees `Arc<dyn CounterStore>`; backends are picked from
//! config at startup. Stores do not offer a conditional write, so a
//! `get` followed by `put` is last-writer-wins.

pub mod file;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use visicount_core::error::Result;
use visicount_core::CounterRecord;

use crate::config::{StoreBackend, StoreSection};

pub use file::FileCounterStore;
pub use memory::InMemoryCounterStore;

#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
    async fn get(&self, key: &str) -> Result<Option<CounterRecord>>;
    async fn put(&self, key: &str, record: CounterRecord) -> Result<()>;
}

/// Build the configured backend.
pub fn from_config(cfg: &StoreSection) -> Result<Arc<dyn CounterStore>> {
    match cfg.backend {
        StoreBackend::Memory => Ok(Arc::new(InMemoryCounterStore::new())),
        StoreBackend::File => {
            let path = cfg.path.clone().ok_or_else(|| {
                visicount_core::CounterError::Validation("store.path is required".into())
            })?;
            Ok(Arc::new(FileCounterStore::new(path)))
        }
    }
}

/// Provision `key` with `count` unless a record already exists.
/// Returns whether a record was written.
pub async fn seed(store: &dyn CounterStore, key: &str, count: u64) -> Result<bool> {
    if store.get(key).await?.is_some() {
        return Ok(false);
    }
    store.put(key, CounterRecord::new(count)).await?;
    tracing::info!(backend = store.backend(), key, count, "seeded counter record");
    Ok(true)
}
