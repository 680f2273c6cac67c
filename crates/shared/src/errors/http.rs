use crate::errors::{
    error::ErrorResponse, field::FieldErrors, repository::RepositoryError, service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

const VALIDATION_MESSAGE: &str = "Please correct the following errors:";
const INTERNAL_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

#[derive(Debug)]
pub enum HttpError {
    Validation(FieldErrors),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => HttpError::Validation(errors),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Conflict(msg) => HttpError::Conflict(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Duplicate(msg) => HttpError::Conflict(msg),
                other => HttpError::Internal(format!("Repository error: {other}")),
            },
        }
    }
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::Validation(_) | HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            HttpError::Validation(errors) => ErrorResponse {
                field_errors: Some(errors.into_map()),
                ..ErrorResponse::new("VALIDATION_ERROR", VALIDATION_MESSAGE)
            },
            HttpError::BadRequest(msg) => ErrorResponse::new("INVALID_JSON", msg),
            HttpError::NotFound(msg) => ErrorResponse::new("FORM_NOT_FOUND", msg),
            HttpError::Conflict(msg) => ErrorResponse::new("DUPLICATE_REGISTRATION", msg),
            HttpError::Internal(detail) => {
                error!("Internal error while handling request: {detail}");
                ErrorResponse::new("INTERNAL_ERROR", INTERNAL_MESSAGE)
            }
        };

        (status, Json(body)).into_response()
    }
}
