use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Malformed token")]
    MalformedToken,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Unexpected signing method: {alg}")]
    UnexpectedSigningMethod { alg: String },
    #[error("Token expired")]
    ExpiredToken,
    #[error("Token used before issued")]
    TokenNotYetValid,
    #[error("Database connection error: {detail}")]
    Connection { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::MalformedToken => "MALFORMED_TOKEN",
            AppError::InvalidSignature => "INVALID_SIGNATURE",
            AppError::UnexpectedSigningMethod { .. } => "UNEXPECTED_SIGNING_METHOD",
            AppError::ExpiredToken => "EXPIRED_TOKEN",
            AppError::TokenNotYetValid => "TOKEN_NOT_YET_VALID",
            AppError::Connection { .. } => "CONNECTION_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    /// True for every failure produced while verifying a presented token.
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self,
            AppError::MalformedToken
                | AppError::InvalidSignature
                | AppError::UnexpectedSigningMethod { .. }
                | AppError::ExpiredToken
                | AppError::TokenNotYetValid
        )
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn connection(detail: impl Into<String>) -> Self {
        Self::Connection {
            detail: detail.into(),
        }
    }

    pub fn unexpected_signing_method(alg: impl Into<String>) -> Self {
        Self::UnexpectedSigningMethod { alg: alg.into() }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::connection(e.to_string())
    }
}
