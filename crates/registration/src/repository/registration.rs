use crate::abstract_trait::RegistrationRepositoryTrait;
use crate::model::Registration;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistrationRepository {
    registrations: Arc<RwLock<Vec<Registration>>>,
}

impl InMemoryRegistrationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.registrations.read().await.len()
    }
}

#[async_trait]
impl RegistrationRepositoryTrait for InMemoryRegistrationRepository {
    async fn exists_by_email(&self, form_id: &str, email: &str) -> Result<bool, RepositoryError> {
        let registrations = self.registrations.read().await;

        Ok(registrations.iter().any(|r| {
            r.form_id == form_id && r.registration.email().eq_ignore_ascii_case(email)
        }))
    }

    async fn save(&self, registration: Registration) -> Result<Registration, RepositoryError> {
        let mut registrations = self.registrations.write().await;

        // Checked under the write lock so two concurrent submissions cannot
        // both pass the service's pre-check and land.
        let email_taken = registrations.iter().any(|r| {
            r.form_id == registration.form_id
                && r.registration
                    .email()
                    .eq_ignore_ascii_case(registration.registration.email())
        });

        if email_taken {
            return Err(RepositoryError::Duplicate(format!(
                "email already registered for form {}",
                registration.form_id
            )));
        }

        if registrations
            .iter()
            .any(|r| r.registration_id == registration.registration_id)
        {
            return Err(RepositoryError::Custom(format!(
                "registration id {} already stored",
                registration.registration_id
            )));
        }

        info!(
            "Stored registration {} for form {}",
            registration.registration_id, registration.form_id
        );

        registrations.push(registration.clone());
        Ok(registration)
    }
}
