//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    (StatusCode::NOT_FOUND, "not_found")
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
                }
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(status_of(AppError::NotFound("student 7".into())), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_and_bad_request_map_to_400() {
        assert_eq!(
            status_of(AppError::Validation("name is required".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::BadRequest("body must be a JSON object".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn database_errors_map_to_500_except_missing_rows() {
        assert_eq!(status_of(AppError::Db(sqlx::Error::RowNotFound)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AppError::Db(sqlx::Error::PoolTimedOut)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn config_errors_map_to_500() {
        assert_eq!(
            status_of(AppError::Config(ConfigError::MissingVar("DATABASE_URL"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
