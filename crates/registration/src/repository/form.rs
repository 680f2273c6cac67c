use crate::abstract_trait::FormRepositoryTrait;
use crate::config::FormCatalog;
use crate::model::RegistrationForm;
use async_trait::async_trait;
use shared::errors::RepositoryError;

/// Serves forms from a catalog fixed at construction.
#[derive(Debug, Clone)]
pub struct InMemoryFormRepository {
    forms: Vec<RegistrationForm>,
}

impl InMemoryFormRepository {
    pub fn new(catalog: FormCatalog) -> Self {
        Self {
            forms: catalog.forms,
        }
    }
}

#[async_trait]
impl FormRepositoryTrait for InMemoryFormRepository {
    async fn find_by_id(&self, form_id: &str) -> Result<Option<RegistrationForm>, RepositoryError> {
        Ok(self.forms.iter().find(|f| f.form_id == form_id).cloned())
    }

    async fn find_default(&self) -> Result<Option<RegistrationForm>, RepositoryError> {
        Ok(self.forms.first().cloned())
    }
}
