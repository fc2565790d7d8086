#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use visicount_gateway::config::{self, StoreBackend};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
store:
  backend: memory
  seed_cuont: 3 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "VALIDATION");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.route, "/visitor-counter");
    assert_eq!(cfg.store.backend, StoreBackend::Memory);
    assert!(cfg.store.seed_count.is_none());
}

#[test]
fn file_backend_needs_path() {
    let bad = r#"
version: 1
store:
  backend: file
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("store.path"));

    let ok = r#"
version: 1
store:
  backend: file
  path: "/var/lib/visicount/counter.json"
  seed_count: 0
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.store.backend, StoreBackend::File);
    assert_eq!(cfg.store.seed_count, Some(0));
}

#[test]
fn rejects_bad_gateway_section() {
    for bad in [
        "version: 2\n",
        "version: 1\ngateway:\n  listen: \"not-an-addr\"\n",
        "version: 1\ngateway:\n  route: \"visitor-counter\"\n",
        "version: 1\ngateway:\n  route: \"/metrics\"\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.kind().as_str(), "VALIDATION", "config={bad}");
    }
}
