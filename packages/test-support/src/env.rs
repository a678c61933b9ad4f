//! Scoped process environment mutation for tests.
//!
//! Environment variables are process-global, so tests that use [`EnvGuard`]
//! must also be marked `#[serial]`.

use std::env;
use std::ffi::OsString;

/// Restores every variable it touched to its previous value on drop.
#[derive(Debug, Default)]
pub struct EnvGuard {
    saved: Vec<(String, Option<OsString>)>,
}

impl EnvGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value` for the lifetime of the guard.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.remember(key);
        env::set_var(key, value);
        self
    }

    /// Remove `key` for the lifetime of the guard.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.remember(key);
        env::remove_var(key);
        self
    }

    fn remember(&mut self, key: &str) {
        if self.saved.iter().any(|(k, _)| k == key) {
            return;
        }
        self.saved.push((key.to_string(), env::var_os(key)));
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(v) => env::set_var(&key, v),
                None => env::remove_var(&key),
            }
        }
    }
}
