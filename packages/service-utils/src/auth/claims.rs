//! Token payload types.

use serde::{Deserialize, Serialize};

/// The identity carried by an access token.
///
/// `User::default()` (id 0) doubles as the invalid-token sentinel returned by
/// [`validate_token`](crate::auth::jwt::validate_token), so callers must not
/// hand out id 0 to a real account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
}

impl User {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

/// Claims included in issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub user: User,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
