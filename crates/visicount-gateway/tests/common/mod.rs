//! Store doubles shared by the gateway integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use visicount_core::error::{CounterError, Result};
use visicount_core::CounterRecord;
use visicount_gateway::store::{CounterStore, InMemoryCounterStore};

/// Wraps an in-memory store and records every call.
#[derive(Default)]
pub struct RecordingStore {
    inner: InMemoryCounterStore,
    gets: AtomicUsize,
    puts: Mutex<Vec<(String, CounterRecord)>>,
}

impl RecordingStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn holding(count: u64) -> Self {
        Self {
            inner: InMemoryCounterStore::with_record("0", CounterRecord::new(count)),
            ..Self::default()
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> Vec<(String, CounterRecord)> {
        self.puts.lock().unwrap().clone()
    }

    pub async fn current(&self) -> Option<CounterRecord> {
        self.inner.get("0").await.unwrap()
    }
}

#[async_trait]
impl CounterStore for RecordingStore {
    fn backend(&self) -> &'static str {
        "recording"
    }

    async fn get(&self, key: &str) -> Result<Option<CounterRecord>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, record: CounterRecord) -> Result<()> {
        self.puts.lock().unwrap().push((key.to_string(), record));
        self.inner.put(key, record).await
    }
}

/// Fails `get` and/or `put` with a fixed message.
pub struct FailingStore {
    pub fail_get: bool,
    pub fail_put: bool,
    pub count: u64,
    pub puts: AtomicUsize,
}

impl FailingStore {
    pub fn on_get() -> Self {
        Self { fail_get: true, fail_put: false, count: 0, puts: AtomicUsize::new(0) }
    }

    pub fn on_put(count: u64) -> Self {
        Self { fail_get: false, fail_put: true, count, puts: AtomicUsize::new(0) }
    }
}

#[async_trait]
impl CounterStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn get(&self, _key: &str) -> Result<Option<CounterRecord>> {
        if self.fail_get {
            return Err(CounterError::Store("table unavailable".into()));
        }
        Ok(Some(CounterRecord::new(self.count)))
    }

    async fn put(&self, _key: &str, _record: CounterRecord) -> Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.fail_put {
            return Err(CounterError::Store("write throttled".into()));
        }
        Ok(())
    }
}
