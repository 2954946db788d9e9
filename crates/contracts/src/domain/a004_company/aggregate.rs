use serde::{Deserialize, Serialize};

/// Company details as saved from the settings page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub website: String,
    pub industry: String,
}

impl Company {
    pub fn demo() -> Self {
        Self {
            name: "NovaCRM Inc.".into(),
            address: "123 Business Ave, Suite 100".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip: "94105".into(),
            country: "United States".into(),
            website: "https://novacrm.com".into(),
            industry: "Technology".into(),
        }
    }

    /// Single-line postal address, skipping empty parts
    pub fn postal_address(&self) -> String {
        let state_zip = [self.state.as_str(), self.zip.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        [
            self.address.as_str(),
            self.city.as_str(),
            state_zip.as_str(),
            self.country.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_address() {
        assert_eq!(
            Company::demo().postal_address(),
            "123 Business Ave, Suite 100, San Francisco, CA 94105, United States"
        );

        let mut company = Company::demo();
        company.address.clear();
        company.state.clear();
        assert_eq!(company.postal_address(), "San Francisco, 94105, United States");
    }
}
