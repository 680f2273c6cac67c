use crate::{
    abstract_trait::{DynFormRepository, DynRegistrationRepository, RegisterServiceTrait},
    domain::{
        requests::RegistrationRequest,
        response::{ApiResponse, RegistrationResponse},
    },
    model::Registration,
    service::observe::Observer,
    validation::RegistrationValidator,
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{DynClock, Operation, Status},
};
use tracing::info;
use uuid::Uuid;

pub const REGISTERED_MESSAGE: &str =
    "Thank you for registering! You will receive a confirmation by email.";

const DUPLICATE_EMAIL_MESSAGE: &str =
    "A registration with this email already exists for this form";

pub struct RegisterServiceDeps {
    pub forms: DynFormRepository,
    pub registrations: DynRegistrationRepository,
    pub clock: DynClock,
}

#[derive(Clone)]
pub struct RegisterService {
    forms: DynFormRepository,
    registrations: DynRegistrationRepository,
    clock: DynClock,
    observer: Observer,
}

impl RegisterService {
    pub fn new(deps: RegisterServiceDeps, registry: &mut Registry) -> Self {
        let RegisterServiceDeps {
            forms,
            registrations,
            clock,
        } = deps;

        Self {
            forms,
            registrations,
            clock,
            observer: Observer::new(
                "register-service",
                "register_service",
                "RegisterService",
                registry,
            ),
        }
    }

    fn generate_registration_id() -> String {
        Uuid::new_v4().simple().to_string().to_uppercase()
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn register(
        &self,
        form_id: &str,
        request: &RegistrationRequest,
    ) -> Result<ApiResponse<RegistrationResponse>, ServiceError> {
        info!("📝 [REGISTER] Starting member registration | Form: {form_id}");

        let operation = Operation::Register;
        let tracing_ctx = self.observer.start(
            "RegisterMember",
            vec![
                KeyValue::new("component", "registration"),
                KeyValue::new("form.id", form_id.to_string()),
            ],
        );

        let form = match self.forms.find_by_id(form_id).await {
            Ok(Some(form)) => form,
            Ok(None) => {
                let message = format!("Registration form {form_id} was not found");
                self.observer
                    .complete(&tracing_ctx, operation, Status::Rejected, &message);
                return Err(ServiceError::NotFound(message));
            }
            Err(err) => {
                self.observer.complete(
                    &tracing_ctx,
                    operation,
                    Status::Error,
                    &format!("Form lookup failed: {err}"),
                );
                return Err(err.into());
            }
        };

        let today = self.clock.today();
        let validator = RegistrationValidator::new(form.member_types(), today);

        let validated = match validator.validate(request) {
            Ok(validated) => validated,
            Err(errors) => {
                self.observer.complete(
                    &tracing_ctx,
                    operation,
                    Status::Rejected,
                    &format!("Validation failed: {errors}"),
                );
                return Err(errors.into());
            }
        };

        match self
            .registrations
            .exists_by_email(&form.form_id, validated.email())
            .await
        {
            Ok(false) => {}
            Ok(true) => {
                self.observer.complete(
                    &tracing_ctx,
                    operation,
                    Status::Rejected,
                    "Email already registered for this form",
                );
                return Err(ServiceError::Conflict(DUPLICATE_EMAIL_MESSAGE.into()));
            }
            Err(err) => {
                self.observer.complete(
                    &tracing_ctx,
                    operation,
                    Status::Error,
                    &format!("Duplicate check failed: {err}"),
                );
                return Err(err.into());
            }
        }

        let registration = Registration {
            registration_id: Self::generate_registration_id(),
            form_id: form.form_id.clone(),
            registration: validated,
            created_at: Utc::now(),
        };

        let saved = match self.registrations.save(registration).await {
            Ok(saved) => saved,
            Err(RepositoryError::Duplicate(detail)) => {
                self.observer.complete(
                    &tracing_ctx,
                    operation,
                    Status::Rejected,
                    &format!("Store refused registration: {detail}"),
                );
                return Err(ServiceError::Conflict(DUPLICATE_EMAIL_MESSAGE.into()));
            }
            Err(err) => {
                self.observer.complete(
                    &tracing_ctx,
                    operation,
                    Status::Error,
                    &format!("Failed to store registration: {err}"),
                );
                return Err(err.into());
            }
        };

        self.observer.complete(
            &tracing_ctx,
            operation,
            Status::Success,
            &format!("Registration {} stored", saved.registration_id),
        );

        Ok(ApiResponse::success(
            REGISTERED_MESSAGE,
            RegistrationResponse {
                registration_id: saved.registration_id,
                member_name: saved.registration.full_name().to_string(),
            },
        ))
    }
}
