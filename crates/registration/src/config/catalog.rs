use crate::model::{MemberType, RegistrationForm};
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_FORM_ID: &str = "B171388180BC457D9887AD92B6CCFC86";

/// Forms available for sign-up. The first entry is the default form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormCatalog {
    pub forms: Vec<RegistrationForm>,
}

impl Default for FormCatalog {
    fn default() -> Self {
        let registration_opens = NaiveDate::from_ymd_opt(2024, 12, 16)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or(NaiveDateTime::MIN);

        Self {
            forms: vec![RegistrationForm {
                club_id: "britsport".into(),
                form_id: DEFAULT_FORM_ID.into(),
                title: "Coding camp summer 2025".into(),
                description: "Join us for an exciting coding camp this summer! Learn \
                    programming, build projects and make new friends."
                    .into(),
                registration_opens,
                member_types: vec![
                    MemberType::new("8FE4113D4E4020E0DCF887803A886981", "Active Member"),
                    MemberType::new("4237C55C5CC3B4B082CBF2540612778E", "Social Member"),
                ],
            }],
        }
    }
}

impl FormCatalog {
    pub fn new(forms: Vec<RegistrationForm>) -> Self {
        Self { forms }
    }

    /// Loads `{ "forms": [...] }` from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read form catalog {}", path.display()))?;

        let catalog: FormCatalog = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse form catalog {}", path.display()))?;

        if catalog.forms.is_empty() {
            anyhow::bail!("form catalog {} contains no forms", path.display());
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_catalog_holds_the_camp_form() {
        let catalog = FormCatalog::default();

        assert_eq!(catalog.forms.len(), 1);
        let form = &catalog.forms[0];
        assert_eq!(form.form_id, DEFAULT_FORM_ID);
        assert_eq!(form.club_id, "britsport");
        assert_eq!(form.member_types().len(), 2);
        assert_eq!(
            form.registration_opens,
            NaiveDate::from_ymd_opt(2024, 12, 16)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn loads_catalog_from_json() {
        let path = std::env::temp_dir().join(format!(
            "form-catalog-{}.json",
            uuid::Uuid::new_v4().simple()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "forms": [{{
                    "clubId": "chess",
                    "formId": "F1",
                    "title": "Winter league",
                    "description": "Weekly games",
                    "registrationOpens": "2025-01-10T09:00:00",
                    "memberTypes": [{{ "id": "J", "name": "Junior" }}]
                }}]
            }}"#
        )
        .unwrap();

        let catalog = FormCatalog::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.forms[0].form_id, "F1");
        assert_eq!(catalog.forms[0].member_types()[0].name, "Junior");
    }

    #[test]
    fn missing_or_empty_catalog_is_an_error() {
        assert!(FormCatalog::from_json_file("/nonexistent/catalog.json").is_err());

        let path = std::env::temp_dir().join(format!(
            "form-catalog-{}.json",
            uuid::Uuid::new_v4().simple()
        ));
        std::fs::write(&path, r#"{ "forms": [] }"#).unwrap();
        let result = FormCatalog::from_json_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }
}
