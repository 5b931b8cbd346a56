// src/repositories/short_link.rs - Data access
use async_trait::async_trait;
use log::{debug, error};
use sqlx::SqlitePool;

use crate::db::Database;
use crate::errors::RepositoryError;
use crate::models::ShortLink;

type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepositoryTrait: Send + Sync {
    /// Inserts a new mapping from `code` to `target`
    ///
    /// ### Errors
    /// * `RepositoryError::Conflict` - If `code` is already stored
    /// * `RepositoryError::Database` - If a database error occurs
    async fn put(&self, code: &str, target: &str) -> Result<()>;

    /// Looks up the mapping stored under `code`
    ///
    /// ### Errors
    /// * `RepositoryError::NotFound` - If no row matches `code`
    /// * `RepositoryError::Database` - If a database error occurs
    async fn get(&self, code: &str) -> Result<ShortLink>;
}

// Implementation backed by the `urls` table
pub struct ShortLinkRepository {
    pool: SqlitePool,
}

impl ShortLinkRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.get_pool().clone(),
        }
    }
}

#[async_trait]
impl ShortLinkRepositoryTrait for ShortLinkRepository {
    async fn put(&self, code: &str, target: &str) -> Result<()> {
        sqlx::query("INSERT INTO urls (short_code, long_url) VALUES (?, ?)")
            .bind(code)
            .bind(target)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Error inserting into database: {}", e);
                RepositoryError::from(e)
            })?;

        debug!("Stored short code '{}'", code);
        Ok(())
    }

    async fn get(&self, code: &str) -> Result<ShortLink> {
        sqlx::query_as::<_, ShortLink>("SELECT short_code, long_url FROM urls WHERE short_code = ?")
            .bind(code)
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::temp_database;

    #[actix_web::test]
    async fn test_put_then_get_returns_target() {
        let (db, _dir) = temp_database().await;
        let repository = ShortLinkRepository::new(&db);

        repository.put("aB3xY9", "https://example.com").await.unwrap();
        let link = repository.get("aB3xY9").await.unwrap();

        assert_eq!(
            link,
            ShortLink {
                code: "aB3xY9".to_string(),
                target: "https://example.com".to_string(),
            }
        );
    }

    #[actix_web::test]
    async fn test_target_is_stored_verbatim() {
        let (db, _dir) = temp_database().await;
        let repository = ShortLinkRepository::new(&db);
        let target = "  not a url?q=ü&x='; DROP TABLE urls; --";

        repository.put("weird1", target).await.unwrap();

        assert_eq!(repository.get("weird1").await.unwrap().target, target);
    }

    #[actix_web::test]
    async fn test_get_unknown_code_is_not_found() {
        let (db, _dir) = temp_database().await;
        let repository = ShortLinkRepository::new(&db);

        let result = repository.get("nope00").await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_codes_are_case_sensitive() {
        let (db, _dir) = temp_database().await;
        let repository = ShortLinkRepository::new(&db);

        repository.put("abcdef", "https://lower.example").await.unwrap();
        repository.put("ABCDEF", "https://upper.example").await.unwrap();

        assert_eq!(repository.get("abcdef").await.unwrap().target, "https://lower.example");
        assert_eq!(repository.get("ABCDEF").await.unwrap().target, "https://upper.example");
    }

    #[actix_web::test]
    async fn test_duplicate_code_is_conflict_and_keeps_original() {
        let (db, _dir) = temp_database().await;
        let repository = ShortLinkRepository::new(&db);

        repository.put("dup123", "https://first.example").await.unwrap();
        let result = repository.put("dup123", "https://second.example").await;

        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
        assert_eq!(repository.get("dup123").await.unwrap().target, "https://first.example");
    }

    #[actix_web::test]
    async fn test_closed_pool_is_database_error() {
        let (db, _dir) = temp_database().await;
        let repository = ShortLinkRepository::new(&db);
        db.shutdown().await;

        assert!(matches!(
            repository.get("abc123").await,
            Err(RepositoryError::Database(_))
        ));
        assert!(matches!(
            repository.put("abc123", "https://example.com").await,
            Err(RepositoryError::Database(_))
        ));
    }
}
