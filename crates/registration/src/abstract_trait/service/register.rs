use crate::domain::{
    requests::RegistrationRequest,
    response::{ApiResponse, RegistrationResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynRegisterService = Arc<dyn RegisterServiceTrait + Send + Sync>;

#[async_trait]
pub trait RegisterServiceTrait {
    async fn register(
        &self,
        form_id: &str,
        request: &RegistrationRequest,
    ) -> Result<ApiResponse<RegistrationResponse>, ServiceError>;
}
