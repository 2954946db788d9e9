use serde::{Deserialize, Serialize};

use super::aggregate::Company;
use crate::shared::validation::{FormModel, SubmitError, ValidationSchema, COMPANY_SCHEMA};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyForm {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub website: String,
    pub industry: String,
}

impl From<&Company> for CompanyForm {
    fn from(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            address: company.address.clone(),
            city: company.city.clone(),
            state: company.state.clone(),
            zip: company.zip.clone(),
            country: company.country.clone(),
            website: company.website.clone(),
            industry: company.industry.clone(),
        }
    }
}

impl FormModel for CompanyForm {
    type Output = Company;

    fn schema() -> &'static ValidationSchema {
        &COMPANY_SCHEMA
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "name", "address", "city", "state", "zip", "country", "website", "industry",
        ]
    }

    fn field(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "address" => self.address.clone(),
            "city" => self.city.clone(),
            "state" => self.state.clone(),
            "zip" => self.zip.clone(),
            "country" => self.country.clone(),
            "website" => self.website.clone(),
            "industry" => self.industry.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "address" => self.address = value,
            "city" => self.city = value,
            "state" => self.state = value,
            "zip" => self.zip = value,
            "country" => self.country = value,
            "website" => self.website = value,
            "industry" => self.industry = value,
            _ => {}
        }
    }

    fn build(&self) -> Result<Company, SubmitError> {
        Ok(Company {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            zip: self.zip.trim().to_string(),
            country: self.country.trim().to_string(),
            website: self.website.trim().to_string(),
            industry: self.industry.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_company_round_trips() {
        let form = CompanyForm::from(&Company::demo());
        assert_eq!(form.submit(), Ok(Company::demo()));
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let form = CompanyForm {
            name: "Acme".into(),
            ..CompanyForm::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_long_city_is_rejected() {
        let mut form = CompanyForm::from(&Company::demo());
        form.set_field("city", "C".repeat(51));
        assert_eq!(
            form.validate().get("city"),
            Some("Must be no more than 50 characters")
        );
    }
}
