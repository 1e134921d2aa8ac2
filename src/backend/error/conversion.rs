/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers return it directly
 * with `?`. Server-side failures are logged here, once, with their source.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
    Json,
};
use crate::backend::error::types::BackendError;
use crate::shared::SharedError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {:?}", self);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::Shared(SharedError::malformed(rejection.body_text()))
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("Rejected path parameter: {}", rejection.body_text());
        Self::Shared(SharedError::malformed(rejection.body_text()))
    }
}
