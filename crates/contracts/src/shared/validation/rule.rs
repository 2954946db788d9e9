//! Declarative validation rules and schemas

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

use super::value::FieldValue;

/// Semantic check run after the built-in ones. Returns the error message, if any.
pub type CustomValidator = fn(&FieldValue) -> Option<String>;

/// Constraints for a single field
#[derive(Clone, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub custom: Option<CustomValidator>,
}

impl ValidationRule {
    /// No constraints at all
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            custom: None,
        }
    }

    /// Only the required flag set
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
            pattern: None,
            custom: None,
        }
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Shorthand for `min_length(min).max_length(max)`
    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    pub fn pattern(mut self, pattern: &Regex) -> Self {
        self.pattern = Some(pattern.clone());
        self
    }

    pub fn custom(mut self, check: CustomValidator) -> Self {
        self.custom = Some(check);
        self
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

/// Named collection of per-field rules. One rule set per field.
#[derive(Debug, Clone, Default)]
pub struct ValidationSchema {
    rules: BTreeMap<String, ValidationRule>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the rules for `name`, replacing any earlier declaration
    pub fn field(mut self, name: impl Into<String>, rule: ValidationRule) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ValidationRule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_constraints() {
        let rule = ValidationRule::required().length(2, 50);
        assert!(rule.is_required());
        assert_eq!(rule.min_length, Some(2));
        assert_eq!(rule.max_length, Some(50));
        assert!(rule.pattern.is_none());
        assert!(rule.custom.is_none());
    }

    #[test]
    fn test_schema_redeclaring_field_replaces_rule() {
        let schema = ValidationSchema::new()
            .field("bio", ValidationRule::none().max_length(500))
            .field("bio", ValidationRule::none().max_length(100));

        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("bio").and_then(|r| r.max_length), Some(100));
    }
}
