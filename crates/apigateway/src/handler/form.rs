use crate::{middleware::validate::SimpleJson, state::AppState};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use registration::{
    abstract_trait::{DynFormService, DynRegisterService},
    domain::{
        requests::RegistrationRequest,
        response::{ApiResponse, FormResponse, RegistrationResponse},
    },
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "Member registration service is running";

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": MESSAGE
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/api/form",
    responses(
        (status = 200, description = "Default registration form", body = ApiResponse<FormResponse>),
        (status = 404, description = "No form configured", body = ErrorResponse)
    ),
    tag = "Registration"
)]
pub async fn get_default_form(
    Extension(service): Extension<DynFormService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_default_form().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/form/{id}",
    params(("id" = String, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Registration form", body = ApiResponse<FormResponse>),
        (status = 404, description = "Form not found", body = ErrorResponse)
    ),
    tag = "Registration"
)]
pub async fn get_form(
    Extension(service): Extension<DynFormService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_form(&id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/form/{id}/register",
    params(("id" = String, Path, description = "Form ID")),
    request_body = RegistrationRequest,
    responses(
        (status = 201, description = "Registration accepted", body = ApiResponse<RegistrationResponse>),
        (status = 400, description = "Invalid fields or malformed JSON", body = ErrorResponse),
        (status = 404, description = "Form not found", body = ErrorResponse),
        (status = 409, description = "Email already registered for this form", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "Registration"
)]
pub async fn register_member(
    Extension(service): Extension<DynRegisterService>,
    Path(id): Path<String>,
    SimpleJson(body): SimpleJson<RegistrationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register(&id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn form_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/healthchecker", get(health_checker_handler))
        .route("/api/form", get(get_default_form))
        .route("/api/form/{id}", get(get_form))
        .route("/api/form/{id}/register", post(register_member))
        .layer(Extension(app_state.di_container.form_service.clone()))
        .layer(Extension(app_state.di_container.register_service.clone()))
        .with_state(app_state)
}
