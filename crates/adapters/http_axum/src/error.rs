//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use fakeapi_domain::error::FakeApiError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// Propagated from an application service.
    Domain(FakeApiError),
    /// The request declared JSON but the body could not be parsed.
    MalformedBody(serde_json::Error),
    /// The request body could not be read.
    Body(BytesRejection),
}

impl From<FakeApiError> for ApiError {
    fn from(err: FakeApiError) -> Self {
        Self::Domain(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(err: BytesRejection) -> Self {
        Self::Body(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(FakeApiError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::MalformedBody(err) => {
                tracing::debug!(error = %err, "malformed request body");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Body(rejection) => return rejection.into_response(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_storage_error_to_internal_server_error() {
        let err = FakeApiError::Storage("disk on fire".into());
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_map_malformed_body_to_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = ApiError::MalformedBody(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
