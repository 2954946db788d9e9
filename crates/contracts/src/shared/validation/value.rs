//! Field values and records under validation

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// A primitive value entered into a form field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Blank means "nothing was entered": an empty or whitespace-only string
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// Empty means the empty string. Whitespace still counts as input.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    /// Numeric reading of the value.
    ///
    /// Text is trimmed and read the way a browser coerces form input:
    /// decimal and exponent notation, `0x`/`0o`/`0b` integers and
    /// `Infinity`. Out-of-range exponents overflow to infinity. Blank text and
    /// anything else unreadable (including `NaN`) yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_number(s)?,
            Self::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Date(_) => return None,
        };
        (!n.is_nan()).then_some(n)
    }

    /// Date reading of the value: `YYYY-MM-DD` or an RFC 3339 timestamp
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Text(s) => parse_date(s),
            _ => None,
        }
    }
}

pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    match raw {
        "" => return None,
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match raw.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &raw[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    // `f64::from_str` also takes "inf" and "nan" spellings
    if raw
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return None;
    }
    raw.parse::<f64>().ok()
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// Field values of a form being edited, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormRecord {
    values: BTreeMap<String, FieldValue>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.values.remove(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Build a record from a JSON object.
    ///
    /// Nulls are treated as missing fields; arrays and nested objects are
    /// not form values and are skipped. Non-objects give an empty record.
    pub fn from_json(json: &serde_json::Value) -> Self {
        let mut record = Self::new();
        if let Some(map) = json.as_object() {
            for (key, value) in map {
                let field_value = match value {
                    serde_json::Value::String(s) => FieldValue::Text(s.clone()),
                    serde_json::Value::Bool(b) => FieldValue::Bool(*b),
                    serde_json::Value::Number(n) => match n.as_f64() {
                        Some(f) => FieldValue::Number(f),
                        None => continue,
                    },
                    _ => continue,
                };
                record.set(key.clone(), field_value);
            }
        }
        record
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.set(k, v);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_and_empty() {
        assert!(FieldValue::from("").is_blank());
        assert!(FieldValue::from("  \t").is_blank());
        assert!(FieldValue::from("").is_empty());
        assert!(!FieldValue::from("   ").is_empty());
        assert!(!FieldValue::Number(0.0).is_blank());
        assert!(!FieldValue::Bool(false).is_empty());
    }

    #[test]
    fn test_as_number() {
        assert_eq!(FieldValue::from(" 20000 ").as_number(), Some(20000.0));
        assert_eq!(FieldValue::from("1e3").as_number(), Some(1000.0));
        assert_eq!(FieldValue::from("abc").as_number(), None);
        assert_eq!(FieldValue::from("NaN").as_number(), None);
        assert_eq!(FieldValue::from("inf").as_number(), None);
        assert_eq!(FieldValue::from("").as_number(), None);
        assert_eq!(FieldValue::Number(42.5).as_number(), Some(42.5));
        assert_eq!(FieldValue::Bool(true).as_number(), Some(1.0));
    }

    #[test]
    fn test_as_number_follows_browser_coercion() {
        assert_eq!(FieldValue::from("Infinity").as_number(), Some(f64::INFINITY));
        assert_eq!(FieldValue::from("-Infinity").as_number(), Some(f64::NEG_INFINITY));
        assert_eq!(FieldValue::from("1e309").as_number(), Some(f64::INFINITY));
        assert_eq!(FieldValue::from("0x4E20").as_number(), Some(20000.0));
        assert_eq!(FieldValue::from("0b101").as_number(), Some(5.0));
        assert_eq!(FieldValue::from("0o17").as_number(), Some(15.0));
        assert_eq!(FieldValue::from(".5").as_number(), Some(0.5));
        assert_eq!(FieldValue::from("0x").as_number(), None);
        assert_eq!(FieldValue::from("0xZZ").as_number(), None);
        assert_eq!(FieldValue::from("-0x10").as_number(), None);
        assert_eq!(FieldValue::from("infinity").as_number(), None);
        assert_eq!(FieldValue::Number(f64::NAN).as_number(), None);
    }

    #[test]
    fn test_as_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 15);
        assert_eq!(FieldValue::from("2024-02-15").as_date(), expected);
        assert_eq!(FieldValue::from("2024-02-15T10:30:00Z").as_date(), expected);
        assert_eq!(FieldValue::from("15.02.2024").as_date(), None);
    }

    #[test]
    fn test_record_from_json() {
        let record = FormRecord::from_json(&json!({
            "name": "Jane",
            "salary": 50000,
            "active": true,
            "manager": null,
            "tags": ["a", "b"],
        }));

        assert_eq!(record.len(), 3);
        assert_eq!(record.get("name"), Some(&FieldValue::from("Jane")));
        assert_eq!(record.get("salary"), Some(&FieldValue::Number(50000.0)));
        assert_eq!(record.get("active"), Some(&FieldValue::Bool(true)));
        assert!(record.get("manager").is_none());
        assert!(record.get("tags").is_none());
    }
}
