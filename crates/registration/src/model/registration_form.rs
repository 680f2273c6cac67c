use crate::model::MemberType;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Descriptive context a registration is submitted against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub club_id: String,
    pub form_id: String,
    pub title: String,
    pub description: String,
    pub registration_opens: NaiveDateTime,
    pub member_types: Vec<MemberType>,
}

impl RegistrationForm {
    pub fn member_types(&self) -> &[MemberType] {
        &self.member_types
    }
}
