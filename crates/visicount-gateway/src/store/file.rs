//! JSON-document store on local disk.
//!
//! Layout: `{"<key>": {"count": n}, ...}`. A missing file holds no records.
//! Writes go to a sibling temp file and are renamed into place, so readers never
//! observe a half-written document.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use visicount_core::error::{CounterError, Result};
use visicount_core::CounterRecord;

use super::CounterStore;

type Document = BTreeMap<String, CounterRecord>;

pub struct FileCounterStore {
    path: PathBuf,
    // serializes writers on the temp file; does not make get+put atomic
    write_lock: Mutex<()>,
}

impl FileCounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_document(&self) -> Result<Document> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => {
                return Err(CounterError::Store(format!(
                    "read {} failed: {e}",
                    self.path.display()
                )))
            }
        };
        serde_json::from_slice(&raw).map_err(|e| {
            CounterError::Store(format!("malformed document {}: {e}", self.path.display()))
        })
    }

    async fn write_document(&self, doc: &Document) -> Result<()> {
        let raw = serde_json::to_vec_pretty(doc)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| CounterError::Store(format!("write {} failed: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            CounterError::Store(format!("rename to {} failed: {e}", self.path.display()))
        })
    }
}

#[async_trait]
impl CounterStore for FileCounterStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<CounterRecord>> {
        Ok(self.read_document().await?.get(key).copied())
    }

    async fn put(&self, key: &str, record: CounterRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.read_document().await?;
        doc.insert(key.to_string(), record);
        self.write_document(&doc).await
    }
}
