mod form;
mod registration;

pub use self::form::{DynFormRepository, FormRepositoryTrait};
pub use self::registration::{DynRegistrationRepository, RegistrationRepositoryTrait};
