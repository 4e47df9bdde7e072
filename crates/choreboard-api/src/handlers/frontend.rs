//! Front-end entry points and the fallback route.
//!
//! The entry page and `/static` files themselves are served by
//! `tower_http::services` in the router.

use axum::{http::Uri, response::Redirect};

use crate::error::ApiError;

/// Path of the front-end entry page.
pub const ENTRY_PATH: &str = "/choreboard";

/// GET / - Redirect to the entry page.
pub async fn index() -> Redirect {
    Redirect::temporary(ENTRY_PATH)
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
