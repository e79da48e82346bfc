//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and retrieving short links.
///
/// Handlers receive an implementation through [`crate::state::AppState`]
/// rather than touching a shared connection handle directly, which keeps
/// the storage layer swappable in tests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test doubles in `tests/common`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a short link unless a row with the same `id` already exists.
    ///
    /// Conflict-ignore semantics: re-submitting the same URL does not error,
    /// does not duplicate, and does not touch the original `creation_date`.
    /// Two concurrent inserts for the same URL race benignly into a no-op
    /// second insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_if_absent(&self, link: &NewShortLink) -> Result<(), AppError>;

    /// Finds a link by its short code (primary key).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<ShortLink>, AppError>;
}
