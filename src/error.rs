use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::{mailer::NotifyError, response::ApiResponse};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("ORM error")]
    OrmError(#[from] DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorData {
    pub error: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::OrmError(DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated) => {
                StatusCode::NOT_FOUND
            }
            AppError::OrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!(error = ?self, "request failed");
        }

        let message = match &self {
            AppError::OrmError(DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated) => {
                "Record not found".to_string()
            }
            other => other.to_string(),
        };

        let body = ApiResponse::error(ErrorData { error: message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<NotifyError> for AppError {
    fn from(err: NotifyError) -> Self {
        match err {
            NotifyError::InvalidAddress { .. } => AppError::Validation(err.to_string()),
            other => AppError::ServiceUnavailable(other.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_kinds_to_statuses() {
        assert_eq!(
            AppError::NotFound("Product").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("missing field `name`".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::ServiceUnavailable("relay down".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::OrmError(DbErr::RecordNotUpdated).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::OrmError(DbErr::Custom("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_the_resource() {
        assert_eq!(AppError::NotFound("Supplier").to_string(), "Supplier not found");
    }

    #[test]
    fn invalid_address_is_a_validation_error() {
        let err: AppError = NotifyError::InvalidAddress {
            address: "nope".into(),
            reason: "missing domain".into(),
        }
        .into();
        assert!(matches!(err, AppError::Validation(_)));

        let err: AppError = NotifyError::Timeout(std::time::Duration::from_secs(1)).into();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }
}
