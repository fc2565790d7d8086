//! Counter request handler.
//!
//! `handle(event)` has exactly five outcomes:
//! - 400: the event has no `httpMethod`
//! - 200: `OPTIONS` preflight, answered without touching the store
//! - 404: record `"0"` is absent; nothing is written
//! - 200: record read, incremented, written back
//! - 500: the store failed or the increment could not be completed
//!
//! The read and the write are two independent store calls. Concurrent callers
//! that read the same count both write the same successor, so one increment is
//! lost. Fixing that needs a conditional write in the store.

use std::sync::Arc;

use tokio::time::Instant;

use visicount_core::cors::CorsPolicy;
use visicount_core::error::{CounterError, ErrorKind, Result};
use visicount_core::protocol::{Event, HandlerResponse, Method, SuccessBody};
use visicount_core::{CounterRecord, COUNTER_KEY};

use crate::obs::{GatewayMetrics, Outcome};
use crate::store::CounterStore;

/// Counts observed by one successful increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Increment {
    pub current: u64,
    pub updated: u64,
}

#[derive(Clone)]
pub struct CounterHandler {
    store: Arc<dyn CounterStore>,
    metrics: Arc<GatewayMetrics>,
}

impl CounterHandler {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self::with_metrics(store, Arc::new(GatewayMetrics::default()))
    }

    pub fn with_metrics(store: Arc<dyn CounterStore>, metrics: Arc<GatewayMetrics>) -> Self {
        Self { store, metrics }
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Answer one event. Never fails: every error becomes a CORS-carrying
    /// JSON response.
    pub async fn handle(&self, event: &Event) -> HandlerResponse {
        let started = Instant::now();

        let (res, outcome) = match self.route(event).await {
            Ok(ok) => ok,
            Err(e) => {
                let outcome = match e.kind() {
                    ErrorKind::Validation => Outcome::Validation,
                    ErrorKind::NotFound => Outcome::NotFound,
                    ErrorKind::Store | ErrorKind::Internal => {
                        tracing::error!(kind = e.kind().as_str(), error = %e, "counter update failed");
                        Outcome::Failure
                    }
                };
                (error_response(&e), outcome)
            }
        };

        self.metrics.record_outcome(outcome, started.elapsed());
        tracing::info!(
            status = res.status_code,
            outcome = outcome.as_str(),
            body = res.body.as_deref().unwrap_or(""),
            "response"
        );
        res
    }

    async fn route(&self, event: &Event) -> Result<(HandlerResponse, Outcome)> {
        let method = match event.method()? {
            Method::Preflight => {
                return Ok((HandlerResponse::empty(200, CorsPolicy::Default), Outcome::Preflight));
            }
            Method::Other(m) => m,
        };
        tracing::debug!(method = %method, "counter request");

        let inc = self.increment().await?;
        let res = HandlerResponse::json(
            200,
            CorsPolicy::Success,
            &SuccessBody::new(inc.current, inc.updated),
        )?;
        Ok((res, Outcome::Success))
    }

    /// Read record `"0"`, add one, write it back (last writer wins).
    pub async fn increment(&self) -> Result<Increment> {
        let got = self.store.get(COUNTER_KEY).await;
        self.metrics.record_store_op("get", got.is_ok());
        tracing::info!(backend = self.store.backend(), record = ?got, "read counter record");

        let current = got?.ok_or_else(|| CounterError::NotFound(COUNTER_KEY.to_string()))?;
        tracing::info!(current_count = current.count, "current record count");

        let next: CounterRecord = current.incremented().ok_or_else(|| {
            CounterError::Internal(format!("count overflow at {}", current.count))
        })?;
        tracing::info!(updated_count = next.count, "updated record count");

        let put = self.store.put(COUNTER_KEY, next).await;
        self.metrics.record_store_op("put", put.is_ok());
        put?;
        tracing::info!(key = COUNTER_KEY, count = next.count, "wrote counter record");

        Ok(Increment {
            current: current.count,
            updated: next.count,
        })
    }
}

/// Map a failure to its response. Validation carries its own message;
/// store and internal failures expose the error text in `error`.
pub fn error_response(e: &CounterError) -> HandlerResponse {
    let status = e.kind().status_code();
    match e {
        CounterError::Validation(msg) => HandlerResponse::message(status, msg.clone(), None),
        CounterError::NotFound(_) => HandlerResponse::message(status, "Record not found", None),
        CounterError::Store(_) | CounterError::Internal(_) => {
            HandlerResponse::message(status, "Internal server error", Some(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCounterStore;
    use visicount_core::cors;

    fn handler_with(count: Option<u64>) -> (CounterHandler, Arc<InMemoryCounterStore>) {
        let store = Arc::new(match count {
            Some(n) => InMemoryCounterStore::with_record(COUNTER_KEY, CounterRecord::new(n)),
            None => InMemoryCounterStore::new(),
        });
        (CounterHandler::new(store.clone()), store)
    }

    #[tokio::test]
    async fn get_increments_and_persists() {
        let (h, store) = handler_with(Some(5));
        let res = h.handle(&Event::with_method("GET")).await;

        assert_eq!(res.status_code, 200);
        assert_eq!(
            res.body.as_deref(),
            Some(r#"{"message":"Record updated successfully","current_count":"5","updated_count":"6"}"#)
        );
        assert_eq!(store.get(COUNTER_KEY).await.unwrap(), Some(CounterRecord::new(6)));
        assert_eq!(res.header(cors::ALLOW_HEADERS), Some("Content-Type,Authorization"));
    }

    #[tokio::test]
    async fn preflight_has_no_body() {
        let (h, store) = handler_with(Some(5));
        let res = h.handle(&Event::with_method("OPTIONS")).await;

        assert_eq!(res.status_code, 200);
        assert!(res.body.is_none());
        assert_eq!(res.header(cors::ALLOW_METHODS), Some("GET, POST, PUT, DELETE"));
        assert_eq!(store.get(COUNTER_KEY).await.unwrap(), Some(CounterRecord::new(5)));
    }

    #[tokio::test]
    async fn overflow_is_internal_and_not_written() {
        let (h, store) = handler_with(Some(u64::MAX));
        let res = h.handle(&Event::with_method("GET")).await;

        assert_eq!(res.status_code, 500);
        let body: serde_json::Value = serde_json::from_str(res.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["message"], "Internal server error");
        assert!(body["error"].as_str().unwrap().contains("overflow"));
        assert_eq!(store.get(COUNTER_KEY).await.unwrap(), Some(CounterRecord::new(u64::MAX)));
    }

    #[tokio::test]
    async fn outcomes_are_counted() {
        let (h, _store) = handler_with(None);
        h.handle(&Event::with_method("GET")).await;
        h.handle(&Event::default()).await;

        let m = h.metrics();
        assert_eq!(m.requests.get(&[("outcome", "not_found")]), 1);
        assert_eq!(m.requests.get(&[("outcome", "validation")]), 1);
        assert_eq!(m.store_ops.get(&[("op", "get"), ("result", "ok")]), 1);
        assert_eq!(m.store_ops.get(&[("op", "put"), ("result", "ok")]), 0);
    }

    #[test]
    fn error_response_shapes() {
        let res = error_response(&CounterError::Store("timeout".into()));
        assert_eq!(res.status_code, 500);
        assert_eq!(
            res.body.as_deref(),
            Some(r#"{"message":"Internal server error","error":"store: timeout"}"#)
        );
        assert_eq!(res.header(cors::ALLOW_ORIGIN), Some("*"));
    }
}
