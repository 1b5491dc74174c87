//! Reusable field rules. Each returns the first violation as a [`ValidationError`].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::model::fields::FormFields;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Password must have at least [`MIN_PASSWORD_LEN`] characters. A missing password counts
/// as empty.
pub fn password_length(fields: &FormFields, name: &'static str) -> Result<(), ValidationError> {
    let len = fields.get(name).map_or(0, |p| p.chars().count());
    if len < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            name,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters long"),
        ));
    }
    Ok(())
}

/// Case-insensitive `local@domain.tld` shape check.
pub fn email_format(fields: &FormFields, name: &'static str) -> Result<(), ValidationError> {
    let valid = fields
        .get(name)
        .map(|email| EMAIL_RE.is_match(&email.trim().to_lowercase()))
        .unwrap_or(false);
    if !valid {
        return Err(ValidationError::new(
            name,
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs.iter().copied().collect()
    }

    #[test]
    fn every_short_password_is_rejected() {
        for password in ["", "a", "abc", "abcde", "ñññññ"] {
            let err = password_length(&fields(&[("password", password)]), "password")
                .unwrap_err();
            assert_eq!(err.reason, "Password must be at least 6 characters long");
        }
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        assert!(password_length(&fields(&[("password", "ññññññ")]), "password").is_ok());
        assert!(password_length(&fields(&[("password", "secret")]), "password").is_ok());
    }

    #[test]
    fn email_shapes() {
        assert!(email_format(&fields(&[("email", "ana@example.com")]), "email").is_ok());
        assert!(email_format(&fields(&[("email", "Ana@Example.COM")]), "email").is_ok());
        for bad in ["ana", "ana@", "ana@example", "a na@example.com"] {
            assert!(email_format(&fields(&[("email", bad)]), "email").is_err(), "{bad}");
        }
        assert!(email_format(&fields(&[]), "email").is_err());
    }
}
