//! Inbound event.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CounterError, Result};

/// Name of the method field, as it appears on the wire.
pub const METHOD_FIELD: &str = "httpMethod";

/// Inbound request description. Everything but `http_method` is transport
/// metadata the handler does not look at, so it is kept as untyped JSON and
/// any shape is accepted. An explicit `"httpMethod": null` reads as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string_parameters: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// Validated method. Only the preflight case is distinguished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Preflight,
    Other(String),
}

impl Event {
    pub fn with_method(method: impl Into<String>) -> Self {
        Self {
            http_method: Some(method.into()),
            ..Self::default()
        }
    }

    /// Shape check: the method must be present. `OPTIONS` matches exactly
    /// (case-sensitive).
    pub fn method(&self) -> Result<Method> {
        match self.http_method.as_deref() {
            None => Err(CounterError::Validation(format!(
                "Bad Request: Missing '{METHOD_FIELD}' in the event object."
            ))),
            Some("OPTIONS") => Ok(Method::Preflight),
            Some(m) => Ok(Method::Other(m.to_string())),
        }
    }
}
