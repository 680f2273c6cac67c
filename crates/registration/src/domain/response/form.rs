use crate::model::{MemberType, RegistrationForm};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct MemberTypeResponse {
    pub id: String,
    pub name: String,
}

impl From<&MemberType> for MemberTypeResponse {
    fn from(value: &MemberType) -> Self {
        MemberTypeResponse {
            id: value.id.clone(),
            name: value.name.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub club_id: String,
    pub form_id: String,
    pub title: String,
    pub description: String,
    pub registration_opens: NaiveDateTime,
    pub member_types: Vec<MemberTypeResponse>,
}

impl From<&RegistrationForm> for FormResponse {
    fn from(value: &RegistrationForm) -> Self {
        FormResponse {
            club_id: value.club_id.clone(),
            form_id: value.form_id.clone(),
            title: value.title.clone(),
            description: value.description.clone(),
            registration_opens: value.registration_opens,
            member_types: value.member_types.iter().map(Into::into).collect(),
        }
    }
}
