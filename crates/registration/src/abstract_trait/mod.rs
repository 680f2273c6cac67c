pub mod repository;
pub mod service;

pub use self::repository::{
    DynFormRepository, DynRegistrationRepository, FormRepositoryTrait,
    RegistrationRepositoryTrait,
};
pub use self::service::{
    DynFormService, DynRegisterService, FormServiceTrait, RegisterServiceTrait,
};
