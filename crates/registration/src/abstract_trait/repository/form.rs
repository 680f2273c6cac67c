use crate::model::RegistrationForm;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynFormRepository = Arc<dyn FormRepositoryTrait + Send + Sync>;

/// Read-only access to form reference data.
#[async_trait]
pub trait FormRepositoryTrait {
    async fn find_by_id(&self, form_id: &str) -> Result<Option<RegistrationForm>, RepositoryError>;
    async fn find_default(&self) -> Result<Option<RegistrationForm>, RepositoryError>;
}
