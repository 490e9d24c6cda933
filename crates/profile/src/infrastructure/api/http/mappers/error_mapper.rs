// crates/profile/src/infrastructure/api/http/mappers/error_mapper.rs

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use shared_kernel::errors::{AppError, DomainError, ErrorCode};

/// Erreur renvoyée par les handlers : `{ code, detail, errors? }`
#[derive(Debug)]
pub struct HttpError(pub AppError);

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: ErrorCode,
    detail: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a Value>,
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ConcurrencyConflict => StatusCode::CONFLICT,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::InternalError | ErrorCode::InfrastructureFailure => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Requête mal formée (corps, query) : toujours une 422
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self(AppError::new(ErrorCode::ValidationFailed, detail))
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self(AppError::from(err))
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::unprocessable(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::unprocessable(format!("Invalid query parameters: {}", rejection.body_text()))
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(code = ?self.0.code, "❌ Request failed: {}", self.0.message);
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {}", self.0.message);
        }

        let body = ErrorBody {
            code: self.0.code,
            detail: &self.0.message,
            errors: self.0.details.as_ref(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::Validation { field: "bio", reason: "too long".into() }, StatusCode::UNPROCESSABLE_ENTITY),
            (DomainError::InvalidFields(vec![]), StatusCode::UNPROCESSABLE_ENTITY),
            (DomainError::Unauthorized { reason: "no token".into() }, StatusCode::UNAUTHORIZED),
            (DomainError::Forbidden { reason: "nope".into() }, StatusCode::FORBIDDEN),
            (DomainError::NotFound { entity: "UserProfile", id: "x".into() }, StatusCode::NOT_FOUND),
            (DomainError::ConcurrencyConflict { reason: "stale".into() }, StatusCode::CONFLICT),
            (DomainError::TooManyConflicts("busy".into()), StatusCode::CONFLICT),
            (DomainError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(HttpError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_validation_errors_are_listed() {
        let err = HttpError::from(DomainError::Validation {
            field: "github_profile_url",
            reason: "Invalid GitHub URL: host must be github.com".into(),
        });

        let errors = err.0.details.clone().unwrap();
        assert_eq!(errors[0]["field"], "github_profile_url");
    }
}
