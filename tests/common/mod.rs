#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use urlshort::domain::entities::{NewShortLink, ShortLink};
use urlshort::domain::repositories::LinkRepository;
use urlshort::error::AppError;
use urlshort::routes::app_router;
use urlshort::state::AppState;

/// In-memory repository double with the same conflict-ignore semantics as
/// the PostgreSQL implementation.
#[derive(Default)]
pub struct InMemoryRepository {
    links: Mutex<HashMap<String, ShortLink>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn get(&self, id: &str) -> Option<ShortLink> {
        self.links.lock().unwrap().get(id).cloned()
    }

    pub fn seed(&self, id: &str, original_url: &str) {
        self.links.lock().unwrap().insert(
            id.to_string(),
            ShortLink {
                id: id.to_string(),
                original_url: original_url.to_string(),
                short_url: id.to_string(),
                creation_date: Utc::now().naive_utc(),
            },
        );
    }
}

#[async_trait]
impl LinkRepository for InMemoryRepository {
    async fn insert_if_absent(&self, link: &NewShortLink) -> Result<(), AppError> {
        let mut links = self.links.lock().unwrap();
        links.entry(link.id.clone()).or_insert_with(|| ShortLink {
            id: link.id.clone(),
            original_url: link.original_url.clone(),
            short_url: link.short_url.clone(),
            creation_date: Utc::now().naive_utc(),
        });
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.lock().unwrap().get(id).cloned())
    }
}

/// Repository double whose every operation fails, for exercising the
/// best-effort create and collapsed not-found paths.
pub struct FailingRepository;

#[async_trait]
impl LinkRepository for FailingRepository {
    async fn insert_if_absent(&self, _link: &NewShortLink) -> Result<(), AppError> {
        Err(AppError::internal("connection reset"))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<ShortLink>, AppError> {
        Err(AppError::internal("connection reset"))
    }
}

pub fn create_test_state(repository: Arc<dyn LinkRepository>) -> AppState {
    AppState::new(repository)
}

/// Full application router over the given repository, CORS layer included.
pub fn test_app(repository: Arc<dyn LinkRepository>) -> Router {
    app_router(create_test_state(repository))
}
