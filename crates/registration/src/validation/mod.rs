mod birth_date;
mod fields;
mod registration;

pub use self::birth_date::{BIRTH_DATE_MESSAGE, parse_birth_date};
pub use self::fields::{
    validate_email, validate_full_name, validate_member_type, validate_phone_number,
};
pub use self::registration::{RegistrationValidator, field};
