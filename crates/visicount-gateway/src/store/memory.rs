use async_trait::async_trait;
use dashmap::DashMap;

use visicount_core::error::Result;
use visicount_core::CounterRecord;

use super::CounterStore;

/// Process-local store. Contents vanish with the process.
#[derive(Default)]
pub struct InMemoryCounterStore {
    records: DashMap<String, CounterRecord>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn with_record(key: impl Into<String>, record: CounterRecord) -> Self {
        let this = Self::new();
        this.records.insert(key.into(), record);
        this
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<CounterRecord>> {
        Ok(self.records.get(key).map(|r| *r.value()))
    }

    async fn put(&self, key: &str, record: CounterRecord) -> Result<()> {
        self.records.insert(key.to_string(), record);
        Ok(())
    }
}
