use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::auth::claims::{Claims, User};
use crate::error::AppError;
use crate::logging::security;
use crate::state::security_config::SecurityConfig;

/// Lifetime of an issued token.
pub const TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Algorithms accepted on verification. Anything outside the HMAC family is
/// rejected before the signature is looked at.
const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// A token that has been through [`parse_token`].
#[derive(Debug, Clone)]
pub struct Token {
    pub header: Header,
    pub claims: Claims,
    /// Set by `parse_token` once signature and time claims have been verified.
    pub valid: bool,
}

/// Mint a signed access token for `user` with a 24-hour TTL.
pub fn create_token(
    user: User,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = epoch_secs(now)?;
    let exp = i64::try_from(TOKEN_TTL.as_secs())
        .ok()
        .and_then(|ttl| iat.checked_add(ttl))
        .ok_or_else(|| AppError::internal("Token expiry out of range"))?;

    let claims = Claims { user, iat, exp };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Decode and verify a token string.
///
/// Errors:
/// - Undecodable header or claims, including an `alg` such as `none` that has
///   no `Algorithm` variant → `AppError::MalformedToken`
/// - Non-HMAC `alg` → `AppError::UnexpectedSigningMethod`
/// - Signature mismatch → `AppError::InvalidSignature`
/// - `exp` in the past → `AppError::ExpiredToken`
/// - `iat` in the future → `AppError::TokenNotYetValid`
pub fn parse_token(token: &str, security: &SecurityConfig) -> Result<Token, AppError> {
    let header = decode_header(token).map_err(|_| rejected(AppError::MalformedToken))?;

    if !HMAC_ALGORITHMS.contains(&header.alg) {
        return Err(rejected(AppError::unexpected_signing_method(format!(
            "{:?}",
            header.alg
        ))));
    }

    let mut validation = Validation::new(security.algorithm);
    validation.algorithms = HMAC_ALGORITHMS.to_vec();
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map_err(|e| {
        rejected(match e.kind() {
            ErrorKind::ExpiredSignature => AppError::ExpiredToken,
            ErrorKind::InvalidSignature => AppError::InvalidSignature,
            ErrorKind::InvalidAlgorithm => {
                AppError::unexpected_signing_method(format!("{:?}", header.alg))
            }
            _ => AppError::MalformedToken,
        })
    })?;

    if data.claims.iat > epoch_secs(SystemTime::now())? {
        return Err(rejected(AppError::TokenNotYetValid));
    }

    Ok(Token {
        header: data.header,
        claims: data.claims,
        valid: true,
    })
}

/// Extract the user from a parsed token.
///
/// Returns `(User { id: 0 }, false)` unless the token is marked valid. A real
/// user with id 0 is indistinguishable from the sentinel.
pub fn validate_token(token: &Token) -> (User, bool) {
    if token.valid {
        (token.claims.user, true)
    } else {
        (User::default(), false)
    }
}

fn epoch_secs(now: SystemTime) -> Result<i64, AppError> {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs();
    i64::try_from(secs).map_err(|_| AppError::internal("Timestamp out of range"))
}

fn rejected(err: AppError) -> AppError {
    security::token_rejected(err.code());
    err
}
