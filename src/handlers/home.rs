//! Handler for the root/health confirmation endpoint.

/// Returns a fixed confirmation string.
///
/// # Endpoint
///
/// `GET /home` and `POST /home`
///
/// Always succeeds with `200 text/plain`.
pub async fn home_handler() -> &'static str {
    "API running successfully"
}
