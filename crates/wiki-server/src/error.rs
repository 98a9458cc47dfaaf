//! Server error type and HTTP status mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use wiki_core::WikiError;
use wiki_storage::StoreErrorKind;

/// Error returned by request handlers.
///
/// Wraps [`WikiError`] and maps each variant to an HTTP status code. All of
/// the wiki's error taxonomy is user-visible; only backend failures surface
/// as 500s.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub(crate) struct ServerError(#[from] pub(crate) WikiError);

/// JSON body for error responses.
#[derive(Serialize)]
struct ErrorBody {
    /// Human-readable error message.
    error: String,
}

impl ServerError {
    /// HTTP status code for the wrapped error.
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            WikiError::EntryNotFound(_) | WikiError::EmptyWiki => StatusCode::NOT_FOUND,
            WikiError::Conflict(_) => StatusCode::CONFLICT,
            WikiError::Storage(err) if err.kind == StoreErrorKind::InvalidTitle => {
                StatusCode::BAD_REQUEST
            }
            WikiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "Storage failure");
        }

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
