use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use switchyard_core::AppError;
use thiserror::Error;
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    message: String,
}

/// Terminal failure of one gateway request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No caller identity was attached to the request.
    #[error("caller identity is missing")]
    AuthorizationAbsent,

    /// Path, query or body could not be bound.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// The backend rejected or failed the operation.
    #[error("backend failure: {0}")]
    Backend(#[from] AppError),

    /// No usable credential was presented.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),
}

impl ApiError {
    /// Returns a short, stable label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AuthorizationAbsent => "authorization_absent",
            Self::MalformedRequest(_) => "malformed_request",
            Self::Backend(_) => "backend",
            Self::Unauthenticated(_) => "unauthenticated",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::AuthorizationAbsent | Self::MalformedRequest(_) | Self::Backend(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::MalformedRequest(detail) => detail.clone(),
            Self::Backend(_) => "request could not be completed".to_owned(),
            Self::Unauthenticated(_) => "authentication required".to_owned(),
            Self::AuthorizationAbsent => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = Json(ErrorResponse {
            message: self.public_message(),
        });

        (self.status(), payload).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use switchyard_core::AppError;

    use super::ApiError;

    #[test]
    fn backend_failures_are_client_errors() {
        for error in [
            AppError::NotFound("call".to_owned()),
            AppError::Validation("name".to_owned()),
            AppError::Internal("call-manager down".to_owned()),
        ] {
            let response = ApiError::from(error).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn maps_gateway_kinds_to_status() {
        assert_eq!(
            ApiError::AuthorizationAbsent.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthenticated("no credential".to_owned())
                .into_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn backend_detail_stays_out_of_message() {
        let error = ApiError::from(AppError::Internal("db password rejected".to_owned()));
        assert_eq!(error.kind(), "backend");
        assert_eq!(error.public_message(), "request could not be completed");
    }
}
