use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A submission that passed every field rule.
///
/// Only the validator constructs it; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedRegistration {
    full_name: String,
    email: String,
    phone_number: String,
    birth_date: NaiveDate,
    member_type_id: String,
}

impl ValidatedRegistration {
    pub(crate) fn new(
        full_name: String,
        email: String,
        phone_number: String,
        birth_date: NaiveDate,
        member_type_id: String,
    ) -> Self {
        Self {
            full_name,
            email,
            phone_number,
            birth_date,
            member_type_id,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn member_type_id(&self) -> &str {
        &self.member_type_id
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub registration_id: String,
    pub form_id: String,
    pub registration: ValidatedRegistration,
    pub created_at: DateTime<Utc>,
}
