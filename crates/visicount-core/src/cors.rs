//! CORS header sets attached to every handler response.
//!
//! Two variants exist: the success path advertises `GET, OPTIONS` and allows
//! `Authorization`, every other outcome (preflight included) advertises the
//! wider method list with `Content-Type` only. Both are kept verbatim.

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

/// Which header set a response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsPolicy {
    /// 200 after a successful increment.
    Success,
    /// Preflight, validation, not-found and internal errors.
    Default,
}

impl CorsPolicy {
    pub fn allow_methods(self) -> &'static str {
        match self {
            CorsPolicy::Success => "GET, OPTIONS",
            CorsPolicy::Default => "GET, POST, PUT, DELETE",
        }
    }

    pub fn allow_headers(self) -> &'static str {
        match self {
            CorsPolicy::Success => "Content-Type,Authorization",
            CorsPolicy::Default => "Content-Type",
        }
    }

    /// Header triples in a stable order.
    pub fn headers(self) -> [(&'static str, &'static str); 3] {
        [
            (ALLOW_ORIGIN, "*"),
            (ALLOW_METHODS, self.allow_methods()),
            (ALLOW_HEADERS, self.allow_headers()),
        ]
    }
}
