use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Rejections raised by the roster operations.
///
/// The `Display` text is what clients see in the `detail` field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,
    #[error("Activity is full")]
    CapacityExceeded,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Missing email query parameter")]
    MissingEmail,
}

impl SignupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SignupError::ActivityNotFound | SignupError::NotRegistered => StatusCode::NOT_FOUND,
            SignupError::AlreadyRegistered
            | SignupError::CapacityExceeded
            | SignupError::InvalidEmail
            | SignupError::MissingEmail => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
