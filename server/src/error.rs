use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Activities service domain error variants.
///
/// The `#[error]` strings double as the `detail` field of error responses,
/// so they are part of the public API.
#[derive(Debug, thiserror::Error)]
pub enum ActivitiesServiceError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ActivitiesServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ActivityNotFound => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp | Self::ActivityFull | Self::NotSignedUp => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only. 4xx are expected client errors, and the anyhow chain
        // behind an internal error never reaches the response body.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, "internal error");
        }
        let body = serde_json::json!({
            "detail": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
