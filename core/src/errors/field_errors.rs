//! Field-scoped validation errors.
//!
//! Validation never aborts on the first problem: every field collects its
//! own messages and the whole map is returned to the caller as
//! `{"error": {field: [messages]}}`. Message order within a field follows
//! insertion order; fields themselves serialize in stable (sorted) order.

use std::collections::BTreeMap;
use std::fmt;

use wn_shared::types::FieldErrorMap;

/// Accumulated validation errors, field name → ordered messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map holding a single message for a single field.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Append a message to a field's error list.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Messages recorded for one field, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(|v| v.as_slice())
    }

    /// Consume into the serializable wire map.
    pub fn into_map(self) -> FieldErrorMap {
        self.fields
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, messages.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_in_order() {
        let mut errors = FieldErrors::new();
        errors.add("code", "first");
        errors.add("code", "second");
        assert_eq!(errors.get("code"), Some(&["first".to_string(), "second".to_string()][..]));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn single_builds_one_entry() {
        let errors = FieldErrors::single("username", "taken");
        assert!(errors.contains("username"));
        assert!(!errors.contains("email"));
        assert!(!errors.is_empty());
    }

    #[test]
    fn display_joins_fields_and_messages() {
        let mut errors = FieldErrors::new();
        errors.add("a", "x");
        errors.add("b", "y");
        assert_eq!(errors.to_string(), "a: x; b: y");
    }

    #[test]
    fn into_map_keeps_contents() {
        let errors = FieldErrors::single("mobile_phone", "手机号格式错误");
        let map = errors.into_map();
        assert_eq!(map["mobile_phone"], vec!["手机号格式错误".to_string()]);
    }
}
