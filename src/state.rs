use std::sync::Arc;

use crate::application::LinkService;
use crate::domain::repositories::LinkRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub links: Arc<LinkService>,
}

impl AppState {
    /// Builds the state from a repository implementation.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            links: Arc::new(LinkService::new(repository)),
        }
    }
}
