//! Short link entity representing a URL mapping.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// A persisted short link.
///
/// `id` is the short code and primary key. `short_url` duplicates `id`;
/// the column is inherited from the original schema and kept for
/// compatibility. Rows are immutable once created.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShortLink {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub creation_date: NaiveDateTime,
}

/// Payload for inserting a new short link.
///
/// `creation_date` is assigned server-side at insert time.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
}

impl NewShortLink {
    /// Builds an insert payload for a code and its original URL.
    pub fn new(code: String, original_url: String) -> Self {
        Self {
            short_url: code.clone(),
            id: code,
            original_url,
        }
    }
}
