use crate::{
    abstract_trait::{DynFormRepository, FormServiceTrait},
    domain::response::{ApiResponse, FormResponse},
    model::RegistrationForm,
    service::observe::Observer,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Operation, Status, TracingContext},
};

pub struct FormServiceDeps {
    pub forms: DynFormRepository,
}

#[derive(Clone)]
pub struct FormService {
    forms: DynFormRepository,
    observer: Observer,
}

impl FormService {
    pub fn new(deps: FormServiceDeps, registry: &mut Registry) -> Self {
        let FormServiceDeps { forms } = deps;

        Self {
            forms,
            observer: Observer::new("form-service", "form_service", "FormService", registry),
        }
    }

    fn respond(
        &self,
        tracing_ctx: &TracingContext,
        lookup: Result<Option<RegistrationForm>, RepositoryError>,
        not_found: String,
    ) -> Result<ApiResponse<FormResponse>, ServiceError> {
        match lookup {
            Ok(Some(form)) => {
                self.observer.complete(
                    tracing_ctx,
                    Operation::GetForm,
                    Status::Success,
                    "Form retrieved",
                );
                Ok(ApiResponse::success(
                    "Form retrieved successfully",
                    FormResponse::from(&form),
                ))
            }
            Ok(None) => {
                self.observer
                    .complete(tracing_ctx, Operation::GetForm, Status::Rejected, &not_found);
                Err(ServiceError::NotFound(not_found))
            }
            Err(err) => {
                self.observer.complete(
                    tracing_ctx,
                    Operation::GetForm,
                    Status::Error,
                    &format!("Form lookup failed: {err}"),
                );
                Err(ServiceError::Repo(err))
            }
        }
    }
}

#[async_trait]
impl FormServiceTrait for FormService {
    async fn get_default_form(&self) -> Result<ApiResponse<FormResponse>, ServiceError> {
        let tracing_ctx = self.observer.start(
            "GetDefaultForm",
            vec![KeyValue::new("component", "registration")],
        );

        let lookup = self.forms.find_default().await;
        self.respond(&tracing_ctx, lookup, "No registration form is available".into())
    }

    async fn get_form(&self, form_id: &str) -> Result<ApiResponse<FormResponse>, ServiceError> {
        let tracing_ctx = self.observer.start(
            "GetForm",
            vec![
                KeyValue::new("component", "registration"),
                KeyValue::new("form.id", form_id.to_string()),
            ],
        );

        let lookup = self.forms.find_by_id(form_id).await;
        self.respond(
            &tracing_ctx,
            lookup,
            format!("Registration form {form_id} was not found"),
        )
    }
}
