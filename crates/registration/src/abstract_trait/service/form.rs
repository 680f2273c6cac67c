use crate::domain::response::{ApiResponse, FormResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynFormService = Arc<dyn FormServiceTrait + Send + Sync>;

#[async_trait]
pub trait FormServiceTrait {
    async fn get_default_form(&self) -> Result<ApiResponse<FormResponse>, ServiceError>;
    async fn get_form(&self, form_id: &str) -> Result<ApiResponse<FormResponse>, ServiceError>;
}
