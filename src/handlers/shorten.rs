//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// Request body for `POST /shorten`.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

/// Response body for `POST /shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

/// Creates (or re-derives) a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "c984d06a" }
/// ```
///
/// The code is deterministic: every call with the same URL returns the
/// same 8 characters. Persistence is best-effort; see
/// [`crate::application::LinkService::create_short_link`].
///
/// # Errors
///
/// Returns `400 "Invalid request body"` when the body is not valid JSON
/// of the expected shape or `url` is empty. The rejection is caught here
/// so the body text stays fixed instead of axum's default message.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Ok(Json(request)) = payload else {
        return Err(AppError::bad_request("Invalid request body"));
    };

    // Empty URLs stop here; the data-access layer never sees them.
    if request.url.is_empty() {
        return Err(AppError::bad_request("Invalid request body"));
    }

    let short_url = state.links.create_short_link(request.url).await;

    Ok(Json(ShortenResponse { short_url }))
}

/// Answers a bare `OPTIONS /shorten` with an empty 200.
///
/// Browser preflights carrying `Access-Control-Request-Method` are handled
/// by the CORS layer before they reach the router; this covers clients that
/// probe with a plain OPTIONS request.
pub async fn preflight_handler() {}
