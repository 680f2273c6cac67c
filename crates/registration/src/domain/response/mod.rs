mod api;
mod form;
mod registration;

pub use self::api::ApiResponse;
pub use self::form::{FormResponse, MemberTypeResponse};
pub use self::registration::RegistrationResponse;
