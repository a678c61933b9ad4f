#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Stateless service helpers: HMAC-signed bearer tokens for a user id, and a
//! database connection opened from `DATABASE_URL`.

pub mod auth;
pub mod config;
pub mod error;
pub mod infra;
pub mod logging;
pub mod state;
pub mod telemetry;

pub use auth::claims::{Claims, User};
pub use auth::jwt::{create_token, parse_token, validate_token, Token, TOKEN_TTL};
pub use config::db::{database_url, sanitize_db_url, strip_ssl_mode_suffix};
pub use error::AppError;
pub use infra::db::{connect_db, connect_db_url, connect_target};
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    telemetry::init_test_tracing();
}
