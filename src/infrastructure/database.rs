use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::{is_in_memory_url, Config};
use crate::domain::repositories::StoreError;

/// Opens the SQLite pool described by `config` and applies migrations
///
/// An in-memory database exists only as long as its connection, so such URLs
/// get a single connection that is never recycled.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_in_memory_url(&config.database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.database_max_connections.max(1))
            .connect_with(options)
            .await?
    };

    migrate(&pool).await?;
    Ok(pool)
}

/// Runs the embedded schema migrations
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                // SQLite reports "UNIQUE constraint failed: teams.<column>"
                if db.message().contains("teams.location") {
                    StoreError::Duplicate {
                        entity: "Team",
                        field: "location",
                    }
                } else if db.message().contains("teams.name") {
                    StoreError::Duplicate {
                        entity: "Team",
                        field: "name",
                    }
                } else {
                    StoreError::Database(err.to_string())
                }
            }
            other => StoreError::Database(other.to_string()),
        }
    }
}
