use std::env;
use std::fmt;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Environment variable holding the symmetric signing key.
pub const JWT_SECRET_VAR: &str = "JWT_HS512_SECRET";

/// Configuration for JWT security settings
#[derive(Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Algorithm used when signing (defaults to HS512)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS512,
        }
    }

    /// Read the signing secret from `JWT_HS512_SECRET`.
    ///
    /// Intended to be called once by the service bootstrap.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var(JWT_SECRET_VAR).map_err(|_| {
            AppError::config(format!(
                "Required environment variable '{JWT_SECRET_VAR}' is not set"
            ))
        })?;

        if secret.is_empty() {
            return Err(AppError::config(format!(
                "Environment variable '{JWT_SECRET_VAR}' must not be empty"
            )));
        }

        Ok(Self::new(secret))
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::Algorithm;
    use serial_test::serial;
    use test_support::EnvGuard;

    use super::{SecurityConfig, JWT_SECRET_VAR};
    use crate::AppError;

    #[test]
    fn test_new_defaults_to_hs512() {
        let security = SecurityConfig::new("secret".as_bytes());
        assert_eq!(security.algorithm, Algorithm::HS512);
        assert_eq!(security.jwt_secret, b"secret".to_vec());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_secret() {
        let mut env = EnvGuard::new();
        env.set(JWT_SECRET_VAR, "from-env-secret");

        let security = SecurityConfig::from_env().unwrap();
        assert_eq!(security.jwt_secret, b"from-env-secret".to_vec());
    }

    #[test]
    #[serial]
    fn test_from_env_missing_secret() {
        let mut env = EnvGuard::new();
        env.remove(JWT_SECRET_VAR);

        match SecurityConfig::from_env() {
            Err(AppError::Config { detail }) => assert!(detail.contains(JWT_SECRET_VAR)),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_empty_secret() {
        let mut env = EnvGuard::new();
        env.set(JWT_SECRET_VAR, "");

        assert!(matches!(
            SecurityConfig::from_env(),
            Err(AppError::Config { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let security = SecurityConfig::new("super-secret-value".as_bytes());
        let rendered = format!("{security:?}");
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("HS512"));
    }
}
