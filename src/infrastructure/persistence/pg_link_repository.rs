//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Idempotent schema bootstrap, run once at startup.
const CREATE_URLS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS urls (
    id TEXT PRIMARY KEY,
    original_url TEXT NOT NULL,
    short_url TEXT NOT NULL,
    creation_date TIMESTAMP NOT NULL
)
"#;

/// Ensures the `urls` table exists.
///
/// # Errors
///
/// Returns the underlying [`sqlx::Error`] if the statement fails; callers
/// treat this as a fatal startup error.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_URLS_TABLE).execute(pool).await?;
    Ok(())
}

/// PostgreSQL repository for short link storage and retrieval.
///
/// Uses bind parameters throughout for SQL injection protection. The pool
/// is the only concurrency guard: the application adds no locking and no
/// per-request timeout on top of it.
pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert_if_absent(&self, link: &NewShortLink) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO urls (id, original_url, short_url, creation_date)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&link.id)
        .bind(&link.original_url)
        .bind(&link.short_url)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, original_url, short_url, creation_date
            FROM urls
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }
}
