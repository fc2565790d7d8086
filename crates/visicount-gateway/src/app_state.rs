//! Shared application state for the visicount gateway.

use std::sync::Arc;

use visicount_core::error::Result;
use visicount_core::COUNTER_KEY;

use crate::config::GatewayConfig;
use crate::handler::CounterHandler;
use crate::obs::GatewayMetrics;
use crate::store::{self, CounterStore};

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<GatewayConfig>,
    handler: CounterHandler,
    metrics: Arc<GatewayMetrics>,
}

impl AppState {
    /// Wire state around an already built store.
    pub fn new(cfg: GatewayConfig, store: Arc<dyn CounterStore>) -> Self {
        let metrics = Arc::new(GatewayMetrics::default());
        let handler = CounterHandler::with_metrics(store, Arc::clone(&metrics));
        Self {
            cfg: Arc::new(cfg),
            handler,
            metrics,
        }
    }

    /// Build the configured store, provision it if `store.seed_count` is set,
    /// and wire state. Returns Result so main can fail without panicking.
    pub async fn from_config(cfg: GatewayConfig) -> Result<Self> {
        let store = store::from_config(&cfg.store)?;
        if let Some(count) = cfg.store.seed_count {
            store::seed(store.as_ref(), COUNTER_KEY, count).await?;
        }
        tracing::info!(backend = store.backend(), "counter store ready");
        Ok(Self::new(cfg, store))
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.cfg
    }

    pub fn handler(&self) -> &CounterHandler {
        &self.handler
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }
}
