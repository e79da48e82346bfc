//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::short_code;

/// Service for creating and resolving short links.
///
/// Creation is deterministic (same URL, same code) and best-effort: a
/// persistence failure is logged and absorbed, and the caller still
/// receives the computed code. This is the documented contract, not an
/// accident of logging: the original API always reports the code once
/// the request body decodes.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service backed by the given repository.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Derives the short code for a URL and persists the mapping.
    ///
    /// The code is the deterministic truncated digest of the URL, so
    /// repeated calls with the same URL return the same code and leave a
    /// single row behind (the insert is conflict-ignoring).
    ///
    /// Best-effort: insert failures are logged at error level and the
    /// computed code is returned regardless.
    ///
    /// Callers must reject empty URLs before calling; the generator itself
    /// accepts any string.
    pub async fn create_short_link(&self, original_url: String) -> String {
        let code = short_code::generate(&original_url);
        let link = NewShortLink::new(code.clone(), original_url);

        if let Err(e) = self.repository.insert_if_absent(&link).await {
            tracing::error!("failed to persist short link {}: {}", code, e);
        }

        code
    }

    /// Resolves a short code to its stored link.
    ///
    /// A missing row and a failed lookup collapse into the same NotFound
    /// error; lookup failures are logged before being collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code is unknown or the
    /// lookup fails.
    pub async fn resolve(&self, id: &str) -> Result<ShortLink, AppError> {
        match self.repository.find_by_id(id).await {
            Ok(Some(link)) => Ok(link),
            Ok(None) => Err(AppError::not_found("Invalid request")),
            Err(e) => {
                tracing::error!("failed to look up short link {}: {}", id, e);
                Err(AppError::not_found("Invalid request"))
            }
        }
    }
}
