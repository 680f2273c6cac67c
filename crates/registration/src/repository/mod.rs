mod form;
mod registration;

pub use self::form::InMemoryFormRepository;
pub use self::registration::InMemoryRegistrationRepository;
