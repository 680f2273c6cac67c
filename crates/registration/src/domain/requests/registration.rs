use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw sign-up submission. Every field may be missing or malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRequest {
    #[schema(example = "John Doe")]
    pub full_name: Option<String>,

    #[schema(example = "john.doe@example.com")]
    pub email: Option<String>,

    #[schema(example = "12345678")]
    pub phone_number: Option<String>,

    /// `DD.MM.YYYY`
    #[schema(example = "15.06.1990")]
    pub birth_date: Option<String>,

    #[schema(example = "8FE4113D4E4020E0DCF887803A886981")]
    pub member_type_id: Option<String>,
}
