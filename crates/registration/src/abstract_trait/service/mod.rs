mod form;
mod register;

pub use self::form::{DynFormService, FormServiceTrait};
pub use self::register::{DynRegisterService, RegisterServiceTrait};
