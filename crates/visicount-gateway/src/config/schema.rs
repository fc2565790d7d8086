use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use visicount_core::error::{CounterError, Result};

use crate::router::RESERVED_ROUTES;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub store: StoreSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CounterError::Validation(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.store.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Path the counter handler is mounted on.
    #[serde(default = "default_route")]
    pub route: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            route: default_route(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.route.starts_with('/') || self.route.len() < 2 {
            return Err(CounterError::Validation(
                "gateway.route must start with '/' and name a path".into(),
            ));
        }
        if RESERVED_ROUTES.contains(&self.route.as_str()) {
            return Err(CounterError::Validation(format!(
                "gateway.route collides with a reserved route: {}",
                self.route
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            CounterError::Validation(format!(
                "gateway.listen must be a valid SocketAddr: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_route() -> String {
    "/visitor-counter".into()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default)]
    pub backend: StoreBackend,

    /// JSON document path, file backend only.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Provision record "0" with this count at startup when it is absent.
    #[serde(default)]
    pub seed_count: Option<u64>,
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        match (self.backend, &self.path) {
            (StoreBackend::File, None) => Err(CounterError::Validation(
                "store.path is required when store.backend is file".into(),
            )),
            (StoreBackend::Memory, Some(_)) => Err(CounterError::Validation(
                "store.path is only valid with the file backend".into(),
            )),
            _ => Ok(()),
        }
    }
}
