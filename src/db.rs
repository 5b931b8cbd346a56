use std::{str::FromStr, time::Duration};

use log::{debug, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::config::DatabaseConfig;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Invalid database URL: {0}")]
    InvalidUrl(String),

    #[error("Schema initialization error: {0}")]
    SchemaError(String),
}

pub type DbResult<T> = Result<T, DatabaseError>;

const CREATE_URLS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS urls (
        short_code TEXT PRIMARY KEY,
        long_url TEXT NOT NULL
    )
"#;

/// Shared handle to the SQLite file holding the `urls` table
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (or creates) the backing file and ensures the schema exists
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        info!("Initializing database connection");
        debug!(
            "Database configuration: url={}, max_conn={}, timeout={}s",
            config.url, config.max_connections, config.connect_timeout_seconds
        );

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DatabaseError::InvalidUrl(format!("{}: {}", config.url, e)))?
            .create_if_missing(config.create_if_missing);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to open database: {}", e);
                DatabaseError::ConnectionError(e)
            })?;

        info!("Successfully connected to database");

        Self::ensure_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Idempotent table creation
    async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
        match sqlx::query(CREATE_URLS_TABLE).execute(pool).await {
            Ok(_) => {
                info!("Database initialized successfully");
                Ok(())
            }
            Err(e) => {
                warn!("Error creating table: {}", e);
                Err(DatabaseError::SchemaError(e.to_string()))
            }
        }
    }

    /// Gracefully close the database connection pool
    pub async fn shutdown(&self) {
        info!("Shutting down database connection pool...");

        let used_connections = self.pool.size();
        let idle_connections = self.pool.num_idle();

        self.pool.close().await;

        info!(
            "Database connection pool successfully closed. Stats: {} active, {} idle connections released",
            used_connections, idle_connections
        );
    }
}


#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::test_support::temp_database;
    use super::*;

    #[actix_web::test]
    async fn connect_creates_urls_table() {
        let (db, _dir) = temp_database().await;

        let (name,): (String,) =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'urls'")
                .fetch_one(db.get_pool())
                .await
                .unwrap();
        assert_eq!(name, "urls");

        db.shutdown().await;
        assert!(db.get_pool().is_closed());
    }

    #[actix_web::test]
    async fn schema_creation_is_idempotent() {
        let (db, _dir) = temp_database().await;
        sqlx::query("INSERT INTO urls (short_code, long_url) VALUES ('abc123', 'https://example.com')")
            .execute(db.get_pool())
            .await
            .unwrap();

        Database::ensure_schema(db.get_pool()).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM urls")
            .fetch_one(db.get_pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[actix_web::test]
    async fn connect_fails_when_file_missing_and_creation_disabled() {
        let dir = TempDir::new().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("missing.db").display()),
            max_connections: 1,
            connect_timeout_seconds: 1,
            create_if_missing: false,
        };

        let result = Database::connect(&config).await;
        assert!(matches!(result, Err(DatabaseError::ConnectionError(_))));
    }
}
