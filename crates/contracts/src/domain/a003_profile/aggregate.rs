use serde::{Deserialize, Serialize};

/// Signed-in user's profile as saved from the settings page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub title: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

impl Profile {
    pub fn demo() -> Self {
        Self {
            name: "John Smith".into(),
            email: "john.smith@novacrm.com".into(),
            title: Some("CRM Administrator".into()),
            department: Some("IT".into()),
            phone: Some("+1 (555) 123-4567".into()),
            bio: Some(
                "Experienced CRM administrator with 8+ years in system management and user support."
                    .into(),
            ),
        }
    }
}
