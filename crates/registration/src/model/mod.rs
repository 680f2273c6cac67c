mod member_type;
mod registration;
mod registration_form;

pub use self::member_type::MemberType;
pub use self::registration::{Registration, ValidatedRegistration};
pub use self::registration_form::RegistrationForm;
