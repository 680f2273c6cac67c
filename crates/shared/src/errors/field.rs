use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use validator::ValidationError;

/// Per-field validation failures collected over a single validation pass.
///
/// Each field keeps only its first failure, so a submission produces at most
/// one message per field no matter how many checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the failure of `result` under `field` and hands back the
    /// accepted value, if any.
    pub fn check<T>(&mut self, field: &str, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.add(field, &error);
                None
            }
        }
    }

    pub fn add(&mut self, field: &str, error: &ValidationError) {
        let message = error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| match error.code.as_ref() {
                "required" => format!("{field} is required"),
                "email" => "Invalid email format".to_string(),
                "length" => "Invalid length".to_string(),
                _ => format!("Invalid {field}"),
            });

        self.add_message(field, message);
    }

    pub fn add_message(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "{joined}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn failure(code: &'static str, message: &'static str) -> ValidationError {
        ValidationError::new(code).with_message(Cow::Borrowed(message))
    }

    #[test]
    fn check_passes_accepted_values_through() {
        let mut errors = FieldErrors::new();

        let value = errors.check::<u32>("age", Ok(42));

        assert_eq!(value, Some(42));
        assert!(errors.is_empty());
    }

    #[test]
    fn first_failure_per_field_wins() {
        let mut errors = FieldErrors::new();

        errors.check::<()>("email", Err(failure("required", "Email is required")));
        errors.check::<()>("email", Err(failure("email", "Email is malformed")));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn code_is_used_when_message_is_missing() {
        let mut errors = FieldErrors::new();

        errors.add("phoneNumber", &ValidationError::new("pattern"));
        errors.add("name", &ValidationError::new("required"));

        assert_eq!(errors.get("phoneNumber"), Some("Invalid phoneNumber"));
        assert_eq!(errors.get("name"), Some("name is required"));
    }

    #[test]
    fn display_lists_fields_in_order() {
        let mut errors = FieldErrors::new();
        errors.add_message("phoneNumber", "bad phone");
        errors.add_message("email", "bad email");

        assert_eq!(errors.to_string(), "email: bad email; phoneNumber: bad phone");
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut errors = FieldErrors::new();
        errors.add_message("birthDate", "bad date");

        let json = serde_json::to_value(&errors).unwrap();

        assert_eq!(json, serde_json::json!({ "birthDate": "bad date" }));
    }
}
