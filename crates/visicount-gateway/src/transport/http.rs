//! HTTP <-> event adapters.
//!
//! - `counter`: a real HTTP request on the configured route becomes an `Event`
//!   (method, path, headers, query, body) and the handler's response is
//!   written back as-is.
//! - `invoke`: the request body *is* the event (proxy-integration style), and
//!   the serialized response object is returned. This is the only way to send
//!   an event without `httpMethod`.
//!
//! Extractor rejections are answered with the same CORS-carrying JSON shape as
//! handler errors. A rejected query string is dropped, since the handler never
//! reads it.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use serde_json::{json, Value};

use visicount_core::protocol::{Event, HandlerResponse};

use crate::app_state::AppState;

pub async fn counter(
    State(app): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    query: std::result::Result<Query<HashMap<String, String>>, QueryRejection>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(rejection),
    };
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "ignoring unparsable query string");
            HashMap::new()
        }
    };
    let event = event_from_parts(&method, &uri, &headers, query, &body);
    let res = app.handler().handle(&event).await;
    into_http(res)
}

pub async fn invoke(
    State(app): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(rejection),
    };
    let event: Event = match serde_json::from_slice(&body) {
        Ok(ev) => ev,
        Err(e) => {
            tracing::warn!(error = %e, "invoke: malformed event");
            return into_http(HandlerResponse::message(
                400,
                "Bad Request: malformed event JSON",
                Some(e.to_string()),
            ));
        }
    };
    let res = app.handler().handle(&event).await;
    (StatusCode::OK, Json(res)).into_response()
}

fn rejected_body(rejection: BytesRejection) -> Response {
    let status = rejection.status();
    tracing::warn!(%status, error = %rejection.body_text(), "request body rejected");
    into_http(HandlerResponse::message(
        status.as_u16(),
        "Request body rejected",
        Some(rejection.body_text()),
    ))
}

pub fn event_from_parts(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    query: HashMap<String, String>,
    body: &[u8],
) -> Event {
    let headers: serde_json::Map<String, Value> = headers
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), json!(v))))
        .collect();

    Event {
        http_method: Some(method.as_str().to_string()),
        path: Some(json!(uri.path())),
        headers: Some(Value::Object(headers)),
        query_string_parameters: (!query.is_empty()).then(|| json!(query)),
        body: (!body.is_empty()).then(|| json!(String::from_utf8_lossy(body))),
    }
}

/// Write a handler response as an HTTP response. Headers that are not valid
/// HTTP header names/values are dropped.
pub fn into_http(res: HandlerResponse) -> Response {
    let status = StatusCode::from_u16(res.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut out = match res.body {
        Some(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        None => status.into_response(),
    };

    let map = out.headers_mut();
    for (k, v) in &res.headers {
        match (HeaderName::from_bytes(k.as_bytes()), HeaderValue::from_str(v)) {
            (Ok(name), Ok(value)) => {
                map.insert(name, value);
            }
            _ => tracing::warn!(header = %k, "dropping invalid response header"),
        }
    }
    out
}
