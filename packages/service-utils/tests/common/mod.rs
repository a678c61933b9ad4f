#![allow(dead_code)]

// tests/common/mod.rs
use service_utils::SecurityConfig;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    service_utils::telemetry::init_test_tracing();
}

/// Security config with a fresh random secret.
pub fn fresh_security() -> SecurityConfig {
    SecurityConfig::new(test_support::unique_secret("hs512").into_bytes())
}
