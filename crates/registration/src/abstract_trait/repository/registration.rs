use crate::model::Registration;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynRegistrationRepository = Arc<dyn RegistrationRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RegistrationRepositoryTrait {
    /// Case-insensitive on `email`, scoped to one form.
    async fn exists_by_email(&self, form_id: &str, email: &str) -> Result<bool, RepositoryError>;
    async fn save(&self, registration: Registration) -> Result<Registration, RepositoryError>;
}
