mod registration;

pub use self::registration::RegistrationRequest;
