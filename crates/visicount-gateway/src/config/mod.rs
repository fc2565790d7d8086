//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use visicount_core::error::{CounterError, Result};

pub use schema::{GatewayConfig, GatewaySection, StoreBackend, StoreSection};

/// Env var that overrides the default config path.
pub const CONFIG_PATH_ENV: &str = "VISICOUNT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "visicount.yaml";

/// Path to load: `$VISICOUNT_CONFIG` or `visicount.yaml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CounterError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| CounterError::Validation(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
