//! Common validation patterns
//!
//! Compiled once on first use.

use once_cell::sync::Lazy;
use regex::Regex;

pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

pub static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[1-9]\d{0,15}$").expect("phone pattern"));

pub static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+\..+").expect("url pattern"));

pub static ZIP_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("zip code pattern"));

pub static LETTERS_AND_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern"));

const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// At least 8 characters drawn from letters, digits and `@$!%*?&`, with at
/// least one lowercase, one uppercase, one digit and one special character.
pub fn is_strong_password(value: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c);

    value.chars().count() >= 8
        && value.chars().all(allowed)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Drop the punctuation people type into phone numbers: whitespace,
/// hyphens and parentheses.
pub fn strip_phone_formatting(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(EMAIL.is_match("a@b.com"));
        assert!(EMAIL.is_match("john.smith@novacrm.com"));
        assert!(!EMAIL.is_match("not-an-email"));
        assert!(!EMAIL.is_match("a b@c.com"));
        assert!(!EMAIL.is_match("a@bcom"));
    }

    #[test]
    fn test_phone_after_stripping() {
        assert!(PHONE.is_match(&strip_phone_formatting("+1 (555) 123-4567")));
        assert!(PHONE.is_match(&strip_phone_formatting("123-456-7890")));
        assert!(!PHONE.is_match(&strip_phone_formatting("0123")));
        assert!(!PHONE.is_match(&strip_phone_formatting("555-CALL-NOW")));
    }

    #[test]
    fn test_url_and_zip() {
        assert!(URL.is_match("https://novacrm.com"));
        assert!(URL.is_match("http://example.org/path"));
        assert!(!URL.is_match("novacrm.com"));
        assert!(!URL.is_match("ftp://novacrm.com"));

        assert!(ZIP_CODE.is_match("94105"));
        assert!(ZIP_CODE.is_match("94105-1234"));
        assert!(!ZIP_CODE.is_match("9410"));
        assert!(!ZIP_CODE.is_match("94105-12"));
    }

    #[test]
    fn test_strong_password() {
        assert!(is_strong_password("Passw0rd!"));
        assert!(!is_strong_password("Pw0!"));
        assert!(!is_strong_password("password1!"));
        assert!(!is_strong_password("PASSWORD1!"));
        assert!(!is_strong_password("Password!"));
        assert!(!is_strong_password("Password1"));
        assert!(!is_strong_password("Passw0rd! "));
    }
}
