use serde::{Deserialize, Serialize};

use super::aggregate::Profile;
use crate::shared::validation::{FormModel, SubmitError, ValidationSchema, PROFILE_SCHEMA};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub title: String,
    pub department: String,
    pub phone: String,
    pub bio: String,
}

impl From<&Profile> for ProfileForm {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            title: profile.title.clone().unwrap_or_default(),
            department: profile.department.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl FormModel for ProfileForm {
    type Output = Profile;

    fn schema() -> &'static ValidationSchema {
        &PROFILE_SCHEMA
    }

    fn field_names() -> &'static [&'static str] {
        &["name", "email", "title", "department", "phone", "bio"]
    }

    fn field(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "title" => self.title.clone(),
            "department" => self.department.clone(),
            "phone" => self.phone.clone(),
            "bio" => self.bio.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "title" => self.title = value,
            "department" => self.department = value,
            "phone" => self.phone = value,
            "bio" => self.bio = value,
            _ => {}
        }
    }

    fn build(&self) -> Result<Profile, SubmitError> {
        Ok(Profile {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            title: optional(&self.title),
            department: optional(&self.department),
            phone: optional(&self.phone),
            bio: optional(&self.bio),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile_is_valid() {
        let form = ProfileForm::from(&Profile::demo());
        assert!(form.validate().is_empty());
        assert_eq!(form.submit(), Ok(Profile::demo()));
    }

    #[test]
    fn test_fields_outside_schema_are_not_validated() {
        let mut form = ProfileForm::from(&Profile::demo());
        form.title = "x".repeat(1_000);
        form.department = "!!!".into();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let mut form = ProfileForm::from(&Profile::demo());
        form.phone.clear();
        form.bio = "   ".into();
        let profile = form.submit().unwrap();
        assert_eq!(profile.phone, None);
        assert_eq!(profile.bio, None);
    }
}
