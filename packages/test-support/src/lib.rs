//! Test support utilities shared by unit and integration tests.
//!
//! Provides a scoped guard for process environment variables and ULID-based
//! unique values for test isolation.

pub mod env;

use ulid::Ulid;

pub use env::EnvGuard;

/// Generate a unique signing secret with the given prefix
///
/// # Examples
/// ```
/// use test_support::unique_secret;
///
/// let a = unique_secret("jwt");
/// let b = unique_secret("jwt");
/// assert_ne!(a, b);
/// assert!(a.starts_with("jwt-"));
/// ```
pub fn unique_secret(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_secret_produces_different_results() {
        assert_ne!(unique_secret("s"), unique_secret("s"));
    }

    #[test]
    fn test_unique_secret_has_correct_prefix() {
        let secret = unique_secret("hs512");
        assert!(secret.starts_with("hs512-"));
        assert!(secret.len() > "hs512-".len());
    }
}
