#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use meterstore_core::MeterError;
use meterstore_runtime::{config, Store, StoreConfig};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
store:
  retention_msec: 1000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, MeterError::InvalidConfig(_)));
}

#[test]
fn ok_minimal_config_uses_five_minute_window() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.store.retention(), Duration::from_secs(300));
    assert_eq!(cfg.store.mailbox_capacity, None);
}

#[test]
fn explicit_values_roundtrip() {
    let ok = r#"
version: 1
store:
  retention_ms: 1500
  mailbox_capacity: 64
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.store.retention_ms, 1500);
    assert_eq!(cfg.store.mailbox_capacity, Some(64));
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.to_string().contains("version"));
}

#[test]
fn rejects_out_of_range_values() {
    let zero_retention = "version: 1\nstore:\n  retention_ms: 0\n";
    assert!(config::load_from_str(zero_retention).is_err());

    let zero_mailbox = "version: 1\nstore:\n  mailbox_capacity: 0\n";
    assert!(config::load_from_str(zero_mailbox).is_err());
}

#[test]
fn missing_file_is_internal_error() {
    let err = config::load_from_file("/nonexistent/meterstore.yaml").expect_err("must fail");
    assert!(matches!(err, MeterError::Internal(_)));
}

#[tokio::test]
async fn spawn_rejects_unvalidated_config() {
    let mut cfg = StoreConfig::default();
    cfg.store.mailbox_capacity = Some(0);
    let err = Store::spawn(&cfg).err().expect("zero capacity must be rejected");
    assert!(matches!(err, MeterError::InvalidConfig(_)));

    let mut cfg = StoreConfig::default();
    cfg.store.retention_ms = 0;
    assert!(Store::spawn(&cfg).is_err());
}
