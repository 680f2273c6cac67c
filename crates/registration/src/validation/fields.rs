use crate::model::MemberType;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8,11}$").expect("phone pattern is valid"));

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Returns the trimmed name.
pub fn validate_full_name(value: Option<&str>) -> Result<String, ValidationError> {
    present(value)
        .map(|v| v.trim().to_string())
        .ok_or_else(|| failure("required", "Full name is required"))
}

pub fn validate_email(value: Option<&str>) -> Result<String, ValidationError> {
    let value = present(value)
        .map(str::trim)
        .ok_or_else(|| failure("required", "Email is required"))?;

    if !EMAIL_PATTERN.is_match(value) {
        return Err(failure("email", "Email must be a valid email address"));
    }

    Ok(value.to_string())
}

/// Digits only, no separators or country prefix.
pub fn validate_phone_number(value: Option<&str>) -> Result<String, ValidationError> {
    let value = present(value).ok_or_else(|| failure("required", "Phone number is required"))?;

    if !PHONE_PATTERN.is_match(value) {
        return Err(failure("phone", "Phone number must be 8 to 11 digits"));
    }

    Ok(value.to_string())
}

pub fn validate_member_type(
    value: Option<&str>,
    member_types: &[MemberType],
) -> Result<String, ValidationError> {
    let value =
        present(value).ok_or_else(|| failure("required", "Member type must be selected"))?;

    member_types
        .iter()
        .find(|member_type| member_type.id == value)
        .map(|member_type| member_type.id.clone())
        .ok_or_else(|| failure("member_type", "Unknown member type"))
}
