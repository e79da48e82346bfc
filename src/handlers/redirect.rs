//! Handler for short code redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{id}` (catch-all; the leading slash is stripped by routing)
///
/// Responds `302 Found` with `Location` set to the stored original URL.
///
/// # Errors
///
/// Returns `404 "Invalid request"` when the code is unknown; a failed
/// lookup collapses into the same response.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.links.resolve(&id).await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, link.original_url)],
    ))
}
