use tracing::warn;

/// Log a security-relevant token rejection. Only the reason code is recorded.
pub fn token_rejected(reason: &str) {
    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        reason,
        "Access token rejected"
    );
}

