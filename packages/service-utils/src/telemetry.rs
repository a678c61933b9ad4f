use std::env;

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable selecting the output shape of [`init_tracing`].
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

static TEST_INITIALIZED: OnceCell<()> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT=pretty` selects human-readable output; anything else is JSON.
    pub fn from_env() -> Self {
        match env::var(LOG_FORMAT_VAR) {
            Ok(v) if v.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

/// Filter from the first variable in `vars` that is set, else `default`.
fn filter_from_env(vars: &[&str], default: &str) -> EnvFilter {
    vars.iter()
        .find_map(|var| env::var(var).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Install the process-wide subscriber. Call once from the service bootstrap.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let env_filter = filter_from_env(&["RUST_LOG"], DEFAULT_FILTER);
    let registry = tracing_subscriber::registry().with(env_filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(false).with_ansi(false).json())
            .try_init()
            .is_ok(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false))
            .try_init()
            .is_ok(),
    }
}

/// Quiet subscriber for test binaries, safe to call any number of times.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, and defaults to `warn`.
pub fn init_test_tracing() {
    TEST_INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(filter_from_env(&["TEST_LOG", "RUST_LOG"], "warn"))
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time()
            .try_init()
            .ok();
    });
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use test_support::EnvGuard;

    use super::{init_test_tracing, init_tracing, LogFormat, LOG_FORMAT_VAR};

    #[test]
    fn test_init_tracing_does_not_replace_existing_subscriber() {
        init_test_tracing();
        assert!(!init_tracing());
        init_test_tracing();
    }

    #[test]
    #[serial]
    fn test_log_format_from_env() {
        let mut env = EnvGuard::new();

        env.remove(LOG_FORMAT_VAR);
        assert_eq!(LogFormat::from_env(), LogFormat::Json);

        env.set(LOG_FORMAT_VAR, "Pretty");
        assert_eq!(LogFormat::from_env(), LogFormat::Pretty);

        env.set(LOG_FORMAT_VAR, "xml");
        assert_eq!(LogFormat::from_env(), LogFormat::Json);
    }
}
