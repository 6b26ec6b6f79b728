//! Field value and field type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value read from an entity field, as seen by the search engine
///
/// Serialized untagged for introspection only; values are never read back.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Reference(i64),
    Enum(String),
    Null,
}

impl FieldValue {
    /// Build a text value from anything string-like
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Build a text value from an optional column, mapping `None` to `Null`
    pub fn optional_text(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::text)
    }

    /// Build a reference value from an optional foreign key
    pub fn optional_reference(value: Option<i64>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Reference)
    }

    /// Get the value as a string if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Semantic type of a searchable field
///
/// The type decides which filter operators are valid on the field and how
/// the raw filter value is coerced before comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    /// Free text column, matched with "contains"
    Text,

    /// Numeric column (primary keys, counters, ordering)
    NumericIdentifier,

    /// Foreign key to another entity
    ReferenceIdentifier,

    /// Coded column restricted to a fixed set of member names
    Enumerated { members: Vec<String> },
}

impl FieldType {
    /// Shorthand for an enumerated field over the given members
    pub fn enumerated<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldType::Enumerated {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Stable name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::NumericIdentifier => "numeric_identifier",
            FieldType::ReferenceIdentifier => "reference_identifier",
            FieldType::Enumerated { .. } => "enumerated",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_text() {
        let value = FieldValue::text("john");
        assert_eq!(value.as_text(), Some("john"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_optional_helpers() {
        assert!(FieldValue::optional_text(None).is_null());
        assert_eq!(
            FieldValue::optional_text(Some("x")),
            FieldValue::Text("x".to_string())
        );
        assert!(FieldValue::optional_reference(None).is_null());
        assert_eq!(FieldValue::optional_reference(Some(7)), FieldValue::Reference(7));
    }

    #[test]
    fn test_integer_and_reference_are_distinct() {
        assert_ne!(FieldValue::Integer(1), FieldValue::Reference(1));
    }

    #[test]
    fn test_field_type_yaml_shape() {
        let yaml = r#"
- type: text
- type: numeric_identifier
- type: reference_identifier
- type: enumerated
  members: [OPEN, CLOSED]
"#;
        let types: Vec<FieldType> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            types,
            vec![
                FieldType::Text,
                FieldType::NumericIdentifier,
                FieldType::ReferenceIdentifier,
                FieldType::enumerated(["OPEN", "CLOSED"]),
            ]
        );
    }

    #[test]
    fn test_field_type_display() {
        assert_eq!(FieldType::Text.to_string(), "text");
        assert_eq!(FieldType::enumerated(["A"]).kind(), "enumerated");
    }
}
