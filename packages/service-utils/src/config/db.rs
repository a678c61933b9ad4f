use std::env;

use crate::error::AppError;

/// Environment variable holding the database connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Query suffix appended by managed cloud databases that the generic URL
/// resolver does not understand.
pub const SSL_MODE_SUFFIX: &str = "?ssl-mode=REQUIRED";

/// Read the raw database URL from `DATABASE_URL`.
pub fn database_url() -> Result<String, AppError> {
    must_var(DATABASE_URL_VAR)
}

/// Remove a trailing `?ssl-mode=REQUIRED`, leaving any other URL untouched.
pub fn strip_ssl_mode_suffix(url: &str) -> &str {
    url.strip_suffix(SSL_MODE_SUFFIX).unwrap_or(url)
}

/// Mask passwords in a URL for logging, both in the userinfo part and in
/// `password=` style query parameters.
pub fn sanitize_db_url(url: &str) -> String {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };

    let mut sanitized = mask_userinfo(base);
    if let Some(query) = query {
        sanitized.push('?');
        sanitized.push_str(&mask_query_passwords(query));
    }
    sanitized
}

fn mask_userinfo(base: &str) -> String {
    let Some((auth_part, host_part)) = base.rsplit_once('@') else {
        return base.to_string();
    };
    let Some((scheme, credentials)) = auth_part.split_once("://") else {
        return base.to_string();
    };

    match credentials.split_once(':') {
        Some((user, _password)) => format!("{scheme}://{user}:***@{host_part}"),
        None => base.to_string(),
    }
}

/// Covers `password` as well as driver variants such as libpq's `sslpassword`.
fn mask_query_passwords(query: &str) -> String {
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key.to_ascii_lowercase().ends_with("password") => {
                format!("{key}=***")
            }
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
