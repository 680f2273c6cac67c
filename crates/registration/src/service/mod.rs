mod form;
mod observe;
mod register;

pub use self::form::{FormService, FormServiceDeps};
pub use self::register::{REGISTERED_MESSAGE, RegisterService, RegisterServiceDeps};
