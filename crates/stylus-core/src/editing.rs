//! Field-edit contract between the canvas and a property editor.
//!
//! Double activation on an element emits one [`EditRequest`] per editable
//! field. The editor answers asynchronously by building the updated record
//! with [`Element::with_field`] and passing it to `update_element`.

use crate::element::{Content, Element, ElementFamily, ElementId, ElementType};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A type-specific field a property editor can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditableField {
    Text,
    Label,
    Href,
    Src,
    Alt,
    Placeholder,
    Value,
    Options,
    Checked,
    Max,
}

impl fmt::Display for EditableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditableField::Text => "text",
            EditableField::Label => "label",
            EditableField::Href => "href",
            EditableField::Src => "src",
            EditableField::Alt => "alt",
            EditableField::Placeholder => "placeholder",
            EditableField::Value => "value",
            EditableField::Options => "options",
            EditableField::Checked => "checked",
            EditableField::Max => "max",
        };
        f.write_str(name)
    }
}

/// Value of an editable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "bool",
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "text",
            FieldValue::List(_) => "list",
        }
    }
}

/// Request for the property editor to edit one field of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    pub element_id: ElementId,
    pub field: EditableField,
    pub current: FieldValue,
}

/// Error building an edited element.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("Element type {kind} has no {field} field")]
    UnsupportedField {
        kind: ElementType,
        field: EditableField,
    },
    #[error("Field {field} expects a {expected} value, got {actual}")]
    TypeMismatch {
        field: EditableField,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Fields a property editor may edit for a type.
pub fn editable_fields(kind: ElementType) -> &'static [EditableField] {
    use EditableField::*;
    match kind.family() {
        ElementFamily::Text => &[Text],
        ElementFamily::Button => &[Label],
        ElementFamily::Link => &[Text, Href],
        ElementFamily::Image => &[Src, Alt],
        ElementFamily::Media => &[Src],
        ElementFamily::Input => &[Placeholder, Value],
        ElementFamily::Dropdown => &[Options],
        ElementFamily::Toggle => &[Label, Checked],
        ElementFamily::Meter => &[Value, Max],
        ElementFamily::Container => &[],
    }
}

impl Element {
    /// Current value of a field, if the element's type has it.
    pub fn field_value(&self, field: EditableField) -> Option<FieldValue> {
        let text = |s: &String| Some(FieldValue::Text(s.clone()));
        match (&self.content, field) {
            (Content::Text { text: t }, EditableField::Text)
            | (Content::Link { text: t, .. }, EditableField::Text) => text(t),
            (Content::Link { href, .. }, EditableField::Href) => text(href),
            (Content::Button { label }, EditableField::Label)
            | (Content::Toggle { label, .. }, EditableField::Label) => text(label),
            (Content::Image { src, .. }, EditableField::Src)
            | (Content::Media { src, .. }, EditableField::Src) => text(src),
            (Content::Image { alt, .. }, EditableField::Alt) => text(alt),
            (Content::Input { placeholder, .. }, EditableField::Placeholder) => text(placeholder),
            (Content::Input { value, .. }, EditableField::Value) => text(value),
            (Content::Dropdown { options }, EditableField::Options) => {
                Some(FieldValue::List(options.clone()))
            }
            (Content::Toggle { checked, .. }, EditableField::Checked) => {
                Some(FieldValue::Bool(*checked))
            }
            (Content::Meter { value, .. }, EditableField::Value) => Some(FieldValue::Number(*value)),
            (Content::Meter { max, .. }, EditableField::Max) => Some(FieldValue::Number(*max)),
            _ => None,
        }
    }

    /// Edit requests for every editable field of this element.
    pub fn edit_requests(&self) -> Vec<EditRequest> {
        editable_fields(self.kind)
            .iter()
            .filter_map(|field| {
                self.field_value(*field).map(|current| EditRequest {
                    element_id: self.id(),
                    field: *field,
                    current,
                })
            })
            .collect()
    }

    /// Copy of this element with one field replaced.
    ///
    /// Text fields accept a list of lines for `options`; number fields accept
    /// numeric text the way a form input would deliver it.
    pub fn with_field(&self, field: EditableField, value: FieldValue) -> Result<Element, EditError> {
        let mut updated = self.clone();
        let kind = self.kind;
        let unsupported = || EditError::UnsupportedField { kind, field };

        match (&mut updated.content, field) {
            (Content::Text { text }, EditableField::Text)
            | (Content::Link { text, .. }, EditableField::Text)
            | (Content::Link { href: text, .. }, EditableField::Href)
            | (Content::Button { label: text }, EditableField::Label)
            | (Content::Toggle { label: text, .. }, EditableField::Label)
            | (Content::Image { src: text, .. }, EditableField::Src)
            | (Content::Media { src: text, .. }, EditableField::Src)
            | (Content::Image { alt: text, .. }, EditableField::Alt)
            | (Content::Input { placeholder: text, .. }, EditableField::Placeholder)
            | (Content::Input { value: text, .. }, EditableField::Value) => {
                *text = expect_text(field, value)?;
            }
            (Content::Dropdown { options }, EditableField::Options) => {
                *options = match value {
                    FieldValue::List(list) => list,
                    FieldValue::Text(lines) => lines
                        .split(',')
                        .map(str::trim)
                        .filter(|option| !option.is_empty())
                        .map(str::to_string)
                        .collect(),
                    other => return Err(mismatch(field, "list", &other)),
                };
            }
            (Content::Toggle { checked, .. }, EditableField::Checked) => {
                *checked = match value {
                    FieldValue::Bool(flag) => flag,
                    other => return Err(mismatch(field, "bool", &other)),
                };
            }
            (Content::Meter { value: number, .. }, EditableField::Value)
            | (Content::Meter { max: number, .. }, EditableField::Max) => {
                *number = expect_number(field, value)?;
            }
            _ => return Err(unsupported()),
        }

        updated.content.sanitize();
        Ok(updated)
    }
}

fn mismatch(field: EditableField, expected: &'static str, actual: &FieldValue) -> EditError {
    EditError::TypeMismatch {
        field,
        expected,
        actual: actual.kind_name(),
    }
}

fn expect_text(field: EditableField, value: FieldValue) -> Result<String, EditError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        other => Err(mismatch(field, "text", &other)),
    }
}

fn expect_number(field: EditableField, value: FieldValue) -> Result<f64, EditError> {
    match value {
        FieldValue::Number(number) => Ok(number),
        // Form inputs deliver numbers as text; unparsable text reads as 0
        FieldValue::Text(text) => Ok(text.trim().parse().unwrap_or(0.0)),
        other => Err(mismatch(field, "number", &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;
    use kurbo::Rect;

    fn make(kind: ElementType) -> Element {
        factory::create(kind, Rect::new(0.0, 0.0, 100.0, 40.0), 0)
    }

    #[test]
    fn test_editable_fields_per_family() {
        assert_eq!(editable_fields(ElementType::Paragraph), &[EditableField::Text]);
        assert_eq!(editable_fields(ElementType::Dropdown), &[EditableField::Options]);
        assert_eq!(
            editable_fields(ElementType::Checkbox),
            &[EditableField::Label, EditableField::Checked]
        );
        assert!(editable_fields(ElementType::Section).is_empty());
    }

    #[test]
    fn test_edit_requests_carry_current_values() {
        let element = make(ElementType::Progress);
        let requests = element.edit_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].field, EditableField::Value);
        assert_eq!(requests[0].current, FieldValue::Number(50.0));
        assert_eq!(requests[1].current, FieldValue::Number(100.0));
        assert!(requests.iter().all(|r| r.element_id == element.id()));
    }

    #[test]
    fn test_with_field_updates_payload_only() {
        let element = make(ElementType::Button);
        let updated = element
            .with_field(EditableField::Label, FieldValue::Text("Submit".to_string()))
            .unwrap();
        assert_eq!(updated.id(), element.id());
        assert_eq!(updated.bounds(), element.bounds());
        assert_eq!(
            updated.content,
            Content::Button {
                label: "Submit".to_string()
            }
        );
    }

    #[test]
    fn test_options_from_comma_separated_text() {
        let element = make(ElementType::Dropdown);
        let updated = element
            .with_field(EditableField::Options, FieldValue::Text("Red, Green,,Blue".to_string()))
            .unwrap();
        assert_eq!(
            updated.field_value(EditableField::Options),
            Some(FieldValue::List(vec![
                "Red".to_string(),
                "Green".to_string(),
                "Blue".to_string()
            ]))
        );
    }

    #[test]
    fn test_meter_value_parsed_and_clamped() {
        let element = make(ElementType::Range);
        let updated = element
            .with_field(EditableField::Value, FieldValue::Text("250".to_string()))
            .unwrap();
        assert_eq!(updated.field_value(EditableField::Value), Some(FieldValue::Number(100.0)));

        let updated = element
            .with_field(EditableField::Value, FieldValue::Text("abc".to_string()))
            .unwrap();
        assert_eq!(updated.field_value(EditableField::Value), Some(FieldValue::Number(0.0)));
    }

    #[test]
    fn test_errors() {
        let element = make(ElementType::Div);
        assert_eq!(
            element.with_field(EditableField::Text, FieldValue::Text("x".to_string())),
            Err(EditError::UnsupportedField {
                kind: ElementType::Div,
                field: EditableField::Text
            })
        );

        let toggle = make(ElementType::Radio);
        assert!(matches!(
            toggle.with_field(EditableField::Checked, FieldValue::Text("yes".to_string())),
            Err(EditError::TypeMismatch { expected: "bool", .. })
        ));
    }

    #[test]
    fn test_field_value_serde_is_untagged() {
        let value: FieldValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, FieldValue::Bool(true));
        let value: FieldValue = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(value, FieldValue::Text("hello".to_string()));
        let value: FieldValue = serde_json::from_str("[\"a\"]").unwrap();
        assert_eq!(value, FieldValue::List(vec!["a".to_string()]));
    }
}
