use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use budgify_core::errors::{DatabaseError, Error as CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::auth::AuthError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(ErrorBody {
        code: status.as_u16(),
        message: message.into(),
    });
    (status, body).into_response()
}

const INTERNAL_MESSAGE: &str = "Internal server error";

fn core_status(err: &CoreError) -> (StatusCode, String) {
    match err {
        CoreError::Validation(ValidationError::InvalidInput(message)) => {
            (StatusCode::BAD_REQUEST, message.clone())
        }
        CoreError::Validation(other) => (StatusCode::BAD_REQUEST, other.to_string()),
        CoreError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        CoreError::ConstraintViolation(message) => (StatusCode::CONFLICT, message.clone()),
        CoreError::Database(DatabaseError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "Record not found".to_string())
        }
        CoreError::Database(DatabaseError::UniqueViolation(_)) => {
            (StatusCode::CONFLICT, "Record already exists".to_string())
        }
        CoreError::Database(_) | CoreError::Unexpected(_) => {
            tracing::error!(error = %err, "request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Core(err) => core_status(&err),
            ApiError::Auth(err) => return err.into_response(),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason),
            ApiError::Internal(reason) => {
                tracing::error!(error = %reason, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };
        error_response(status, message)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
