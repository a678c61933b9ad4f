use sea_orm::{Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{database_url, sanitize_db_url, strip_ssl_mode_suffix};
use crate::error::AppError;

/// Resolve the URL that [`connect_db`] will open: `DATABASE_URL` with the
/// managed-database `?ssl-mode=REQUIRED` suffix removed.
pub fn connect_target() -> Result<String, AppError> {
    let raw = database_url()?;
    Ok(strip_ssl_mode_suffix(&raw).to_string())
}

/// Open a connection to the database named by `DATABASE_URL`.
///
/// A missing variable is returned as `AppError::Config`; the caller decides
/// whether that is fatal. There is no retry.
pub async fn connect_db() -> Result<DatabaseConnection, AppError> {
    let url = connect_target()?;
    connect_db_url(&url).await
}

/// Open a connection to an explicit URL. The driver is chosen from the scheme.
pub async fn connect_db_url(url: &str) -> Result<DatabaseConnection, AppError> {
    let target = sanitize_db_url(url);
    info!(db_url = %target, "connecting to database");

    Database::connect(url).await.map_err(|e| {
        warn!(db_url = %target, "database connection failed");
        AppError::from(e)
    })
}
