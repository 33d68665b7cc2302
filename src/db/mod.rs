//! PostgreSQL pool construction and startup schema creation.

use std::str::FromStr;

use log::warn;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::config::Config;

/// Build the connection pool from the configured database URL.
///
/// TLS behavior comes from the URL's `sslmode` parameter. When
/// `database_accept_invalid_certs` is set the mode is forced to `require`,
/// which encrypts the connection but skips peer-certificate verification.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(&config.database_url)?;

    if config.database_accept_invalid_certs {
        warn!("DATABASE_ACCEPT_INVALID_CERTS is set: TLS peer verification is disabled");
        options = options.ssl_mode(PgSslMode::Require);
    }

    PgPoolOptions::new().connect_with(options).await
}

/// Create the users table if it does not exist yet.
///
/// There is no migration versioning; this single statement is the whole schema.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            nombre TEXT,
            correo TEXT
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
