//! Outbound response object and the JSON bodies it carries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cors::CorsPolicy;
use crate::error::Result;

/// `{statusCode, headers, body?}`. `body` is JSON text when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// `{"message": ..., "error"?: ...}` used by every non-success outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Success body. Counts are serialized as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessBody {
    pub message: String,
    pub current_count: String,
    pub updated_count: String,
}

impl SuccessBody {
    pub fn new(current: u64, updated: u64) -> Self {
        Self {
            message: "Record updated successfully".into(),
            current_count: current.to_string(),
            updated_count: updated.to_string(),
        }
    }
}

impl HandlerResponse {
    /// Bare response with the CORS headers of `cors` and no body.
    pub fn empty(status_code: u16, cors: CorsPolicy) -> Self {
        let headers = cors
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            status_code,
            headers,
            body: None,
        }
    }

    /// Response whose body is `body` serialized as JSON.
    pub fn json<T: Serialize>(status_code: u16, cors: CorsPolicy, body: &T) -> Result<Self> {
        let mut res = Self::empty(status_code, cors);
        res.body = Some(serde_json::to_string(body)?);
        Ok(res)
    }

    /// Message-only response. Falls back to an empty body if serialization
    /// of a plain string pair ever fails.
    pub fn message(status_code: u16, message: impl Into<String>, error: Option<String>) -> Self {
        let body = MessageBody {
            message: message.into(),
            error,
        };
        Self::json(status_code, CorsPolicy::Default, &body)
            .unwrap_or_else(|_| Self::empty(status_code, CorsPolicy::Default))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cors;

    #[test]
    fn empty_body_is_omitted_on_the_wire() {
        let res = HandlerResponse::empty(200, CorsPolicy::Default);
        let v = serde_json::to_value(&res).unwrap();
        assert_eq!(v["statusCode"], 200);
        assert!(v.get("body").is_none());
        assert_eq!(v["headers"][cors::ALLOW_ORIGIN], "*");
    }

    #[test]
    fn success_body_uses_string_counts() {
        let res = HandlerResponse::json(200, CorsPolicy::Success, &SuccessBody::new(5, 6)).unwrap();
        assert_eq!(
            res.body.as_deref(),
            Some(r#"{"message":"Record updated successfully","current_count":"5","updated_count":"6"}"#)
        );
        assert_eq!(res.header(cors::ALLOW_METHODS), Some("GET, OPTIONS"));
    }

    #[test]
    fn message_without_error_omits_field() {
        let res = HandlerResponse::message(404, "Record not found", None);
        assert_eq!(res.body.as_deref(), Some(r#"{"message":"Record not found"}"#));
    }
}
