//! Explicit form field schema.
//!
//! The original UI decorated every widget dynamically (`form-control` class,
//! `请输入<label>` placeholder). The schema makes those display hints an
//! explicit record per field, serialized by the GET form endpoints so any
//! client can render the form.

use serde::Serialize;

/// Input widget a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Plain text input
    Text,
    /// Masked password input
    Password,
}

/// Declarative description of one form field
#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
    /// Submission key
    pub name: &'static str,

    /// Human-facing label
    pub label: &'static str,

    /// Widget to render
    pub kind: FieldKind,

    /// Placeholder text (`请输入<label>`)
    pub placeholder: String,

    /// CSS class applied to the widget
    pub css_class: &'static str,

    /// Whether the field must be filled
    pub required: bool,
}

impl FieldSchema {
    /// A required field with the standard display hints.
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            placeholder: format!("请输入{}", label),
            css_class: "form-control",
            required: true,
        }
    }
}

/// Ordered field list for one form
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSchema>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_derives_placeholder() {
        let field = FieldSchema::new("mobile_phone", "手机号", FieldKind::Text);
        assert_eq!(field.placeholder, "请输入手机号");
        assert_eq!(field.css_class, "form-control");
        assert!(field.required);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_value(FieldKind::Password).unwrap();
        assert_eq!(json, serde_json::json!("password"));
    }
}
