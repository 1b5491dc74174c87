//! The key/value view of an HTML form.
//!
//! Built from the `(name, value)` pairs of a `FormData`. Empty values are dropped on the
//! way in, so an untouched optional input never reaches the request body. Whitespace-only
//! values are kept here and rejected by the required-field checks instead.

use std::collections::BTreeMap;

use serde::Serialize;
use url::form_urlencoded;

use crate::error::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `name` unless it is empty. A later value replaces an earlier one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.0.insert(name.into(), value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the owned value of `name`, if present.
    pub fn take(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    /// Returns the trimmed value of `name`, or `reason` as a [`ValidationError`] when the
    /// field is missing or blank.
    pub fn required(&self, name: &'static str, reason: &str) -> Result<&str, ValidationError> {
        match self.get(name).map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ValidationError::new(name, reason)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the fields as an `application/x-www-form-urlencoded` body.
    pub fn to_urlencoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut fields = FormFields::new();
        for (name, value) in pairs {
            fields.insert(name, value);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_dropped() {
        let fields: FormFields = [("patient_name", ""), ("uhid", "U-7"), ("tat", "")]
            .into_iter()
            .collect();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("uhid"), Some("U-7"));
        assert_eq!(fields.get("patient_name"), None);
    }

    #[test]
    fn whitespace_values_are_kept_but_fail_required() {
        let fields: FormFields = [("token", "   ")].into_iter().collect();
        assert_eq!(fields.get("token"), Some("   "));
        let err = fields
            .required("token", "Please enter a payment token")
            .unwrap_err();
        assert_eq!(err.field, "token");
    }

    #[test]
    fn required_returns_trimmed_value() {
        let fields: FormFields = [("patient_name", "  Ana Ruiz ")].into_iter().collect();
        assert_eq!(fields.required("patient_name", "x").unwrap(), "Ana Ruiz");
    }

    #[test]
    fn urlencoded_body_escapes_reserved_characters() {
        let fields: FormFields = [("email", "a+b@example.com"), ("full_name", "Ana Ruiz")]
            .into_iter()
            .collect();
        assert_eq!(
            fields.to_urlencoded(),
            "email=a%2Bb%40example.com&full_name=Ana+Ruiz"
        );
    }

    #[test]
    fn serializes_as_flat_json_object() {
        let fields: FormFields = [("patient_name", "Ana")].into_iter().collect();
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            serde_json::json!({ "patient_name": "Ana" })
        );
    }
}
