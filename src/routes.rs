//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET/POST /home`   - fixed confirmation string
//! - `POST    /shorten` - create a short code (explicit OPTIONS responder for preflight probes)
//! - `GET     /{id}`    - redirect to the original URL
//!
//! # Middleware
//!
//! - **CORS** - `Access-Control-Allow-Origin: *`, `Content-Type` allowed on preflight
//! - **Tracing** - structured request/response logging

use axum::Router;
use axum::http::header;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{home_handler, preflight_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/home", get(home_handler).post(home_handler))
        .route("/shorten", post(shorten_handler).options(preflight_handler))
        .route("/{id}", get(redirect_handler))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
