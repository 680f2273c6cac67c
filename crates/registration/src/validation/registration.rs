use crate::domain::requests::RegistrationRequest;
use crate::model::{MemberType, ValidatedRegistration};
use crate::validation::{
    parse_birth_date, validate_email, validate_full_name, validate_member_type,
    validate_phone_number,
};
use chrono::NaiveDate;
use shared::errors::FieldErrors;

/// Keys used in the field error map.
pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const BIRTH_DATE: &str = "birthDate";
    pub const MEMBER_TYPE_ID: &str = "memberTypeId";
}

/// Runs every field rule over a submission and collects all failures.
///
/// `today` is read once by the caller so every check in a pass agrees on it.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationValidator<'a> {
    member_types: &'a [MemberType],
    today: NaiveDate,
}

impl<'a> RegistrationValidator<'a> {
    pub fn new(member_types: &'a [MemberType], today: NaiveDate) -> Self {
        Self {
            member_types,
            today,
        }
    }

    pub fn validate(
        &self,
        request: &RegistrationRequest,
    ) -> Result<ValidatedRegistration, FieldErrors> {
        let mut errors = FieldErrors::new();

        let full_name = errors.check(field::NAME, validate_full_name(request.full_name.as_deref()));
        let email = errors.check(field::EMAIL, validate_email(request.email.as_deref()));
        let phone_number = errors.check(
            field::PHONE_NUMBER,
            validate_phone_number(request.phone_number.as_deref()),
        );
        let birth_date = errors.check(
            field::BIRTH_DATE,
            parse_birth_date(request.birth_date.as_deref(), self.today),
        );
        let member_type_id = errors.check(
            field::MEMBER_TYPE_ID,
            validate_member_type(request.member_type_id.as_deref(), self.member_types),
        );

        match (full_name, email, phone_number, birth_date, member_type_id) {
            (Some(full_name), Some(email), Some(phone_number), Some(birth_date), Some(member_type_id))
                if errors.is_empty() =>
            {
                Ok(ValidatedRegistration::new(
                    full_name,
                    email,
                    phone_number,
                    birth_date,
                    member_type_id,
                ))
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<MemberType> {
        vec![
            MemberType::new("8FE4113D4E4020E0DCF887803A886981", "Active Member"),
            MemberType::new("4237C55C5CC3B4B082CBF2540612778E", "Social Member"),
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn valid_request() -> RegistrationRequest {
        RegistrationRequest {
            full_name: Some("John Doe".into()),
            email: Some("john.doe@example.com".into()),
            phone_number: Some("12345678".into()),
            birth_date: Some("15.06.1990".into()),
            member_type_id: Some("8FE4113D4E4020E0DCF887803A886981".into()),
        }
    }

    #[test]
    fn valid_request_is_normalized() {
        let types = catalog();
        let validator = RegistrationValidator::new(&types, today());

        let validated = validator.validate(&valid_request()).unwrap();

        assert_eq!(validated.full_name(), "John Doe");
        assert_eq!(validated.email(), "john.doe@example.com");
        assert_eq!(validated.phone_number(), "12345678");
        assert_eq!(
            validated.birth_date(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
        assert_eq!(validated.member_type_id(), "8FE4113D4E4020E0DCF887803A886981");
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let types = catalog();
        let validator = RegistrationValidator::new(&types, today());
        let request = RegistrationRequest {
            full_name: Some("".into()),
            email: Some("invalid-email".into()),
            phone_number: Some("123".into()),
            birth_date: Some("invalid-date".into()),
            member_type_id: Some("invalid-id".into()),
        };

        let errors = validator.validate(&request).unwrap_err();

        assert_eq!(errors.len(), 5);
        for key in [
            field::NAME,
            field::EMAIL,
            field::PHONE_NUMBER,
            field::BIRTH_DATE,
            field::MEMBER_TYPE_ID,
        ] {
            assert!(errors.contains(key), "missing {key}");
        }
    }

    #[test]
    fn missing_fields_are_reported_like_blank_ones() {
        let types = catalog();
        let validator = RegistrationValidator::new(&types, today());

        let errors = validator
            .validate(&RegistrationRequest::default())
            .unwrap_err();

        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(field::NAME), Some("Full name is required"));
    }

    #[test]
    fn only_failing_fields_appear() {
        let types = catalog();
        let validator = RegistrationValidator::new(&types, today());
        let request = RegistrationRequest {
            full_name: Some("   ".into()),
            birth_date: Some("31.04.1990".into()),
            ..valid_request()
        };

        let errors = validator.validate(&request).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.contains(field::NAME));
        assert!(errors.contains(field::BIRTH_DATE));
    }

    #[test]
    fn alternate_catalog_can_be_substituted() {
        let types = vec![MemberType::new("JUNIOR", "Junior Member")];
        let validator = RegistrationValidator::new(&types, today());

        let errors = validator.validate(&valid_request()).unwrap_err();
        assert_eq!(errors.get(field::MEMBER_TYPE_ID), Some("Unknown member type"));

        let request = RegistrationRequest {
            member_type_id: Some("JUNIOR".into()),
            ..valid_request()
        };
        assert!(validator.validate(&request).is_ok());
    }

    #[test]
    fn birth_date_is_judged_against_supplied_today() {
        let types = catalog();
        let request = RegistrationRequest {
            birth_date: Some("01.06.2025".into()),
            ..valid_request()
        };

        let on_the_day = RegistrationValidator::new(&types, today());
        assert!(on_the_day.validate(&request).is_err());

        let next_day = RegistrationValidator::new(&types, today().succ_opt().unwrap());
        assert!(next_day.validate(&request).is_ok());
    }
}
