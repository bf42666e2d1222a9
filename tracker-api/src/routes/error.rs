use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use tracker_core::domain::TrackerError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::TrackerNotFound(_) | TrackerError::CategoryNotFound(_) => {
                Self::not_found(err.to_string())
            }
            TrackerError::InvalidName(_) => Self::bad_request(err.to_string()),
            TrackerError::Storage(ref message) => {
                tracing::error!("Tracker storage failed: {}", message);
                Self::internal("storage failure")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tracker_core::domain::models::TrackerId;

    use super::*;

    #[test]
    fn maps_domain_errors_to_status_codes() {
        let cases = [
            (
                TrackerError::TrackerNotFound(TrackerId::generate()),
                StatusCode::NOT_FOUND,
            ),
            (
                TrackerError::CategoryNotFound("Health".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                TrackerError::InvalidName("".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                TrackerError::storage("connection reset"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn storage_details_are_not_exposed() {
        let err = ApiError::from(TrackerError::storage("password=hunter2"));
        assert!(!err.to_string().contains("hunter2"));
    }
}
