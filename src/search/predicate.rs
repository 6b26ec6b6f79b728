//! Single-field predicates built from criteria
//!
//! Dispatch is driven by the field's [`FieldType`]:
//!
//! | type                 | `:`                | `<`          | `>`          |
//! |----------------------|--------------------|--------------|--------------|
//! | text                 | substring contains | unsupported  | unsupported  |
//! | numeric identifier   | equality           | `<=`         | `>=`         |
//! | reference identifier | equality           | unsupported  | unsupported  |
//! | enumerated           | member equality    | unsupported  | unsupported  |
//!
//! Text `:` is a "search as you type" contains match, not strict equality.

use super::criterion::{Criterion, Operator};
use super::error::FilterError;
use crate::core::entity::Searchable;
use crate::core::field::{FieldType, FieldValue};
use serde::Serialize;

/// Comparison applied to one field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Comparison {
    /// Case-sensitive substring match on a text value
    Contains(String),
    /// Exact equality, including the value variant
    Equals(FieldValue),
    /// Integer `<=`
    AtMost(i64),
    /// Integer `>=`
    AtLeast(i64),
}

impl Comparison {
    /// Evaluate against a field value; `Null` never matches
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (_, FieldValue::Null) => false,
            (Comparison::Contains(needle), FieldValue::Text(text)) => text.contains(needle.as_str()),
            (Comparison::Contains(_), _) => false,
            (Comparison::Equals(expected), actual) => expected == actual,
            (Comparison::AtMost(bound), FieldValue::Integer(n)) => n <= bound,
            (Comparison::AtLeast(bound), FieldValue::Integer(n)) => n >= bound,
            (Comparison::AtMost(_) | Comparison::AtLeast(_), _) => false,
        }
    }
}

/// Boolean test over a single named field of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    field: String,
    comparison: Comparison,
}

impl Predicate {
    pub fn new(field: impl Into<String>, comparison: Comparison) -> Self {
        Self {
            field: field.into(),
            comparison,
        }
    }

    /// Build the predicate for `criterion` on a field of type `field_type`
    pub fn build(criterion: &Criterion, field_type: &FieldType) -> Result<Self, FilterError> {
        let field = criterion.key();
        let raw = criterion.value();
        let operator = criterion.operator();

        let unsupported = || FilterError::UnsupportedOperator {
            field: field.to_string(),
            operator,
            field_type: field_type.kind(),
        };

        let comparison = match (field_type, operator) {
            (FieldType::Text, Operator::Equals) => Comparison::Contains(raw.to_string()),

            (FieldType::NumericIdentifier, Operator::Equals) => {
                Comparison::Equals(FieldValue::Integer(parse_number(field, raw)?))
            }
            (FieldType::NumericIdentifier, Operator::LessOrEqual) => {
                Comparison::AtMost(parse_number(field, raw)?)
            }
            (FieldType::NumericIdentifier, Operator::GreaterOrEqual) => {
                Comparison::AtLeast(parse_number(field, raw)?)
            }

            (FieldType::ReferenceIdentifier, Operator::Equals) => {
                Comparison::Equals(FieldValue::Reference(parse_number(field, raw)?))
            }

            (FieldType::Enumerated { members }, Operator::Equals) => {
                if !members.iter().any(|m| m == raw) {
                    return Err(FilterError::InvalidEnumValue {
                        field: field.to_string(),
                        value: raw.to_string(),
                        allowed: members.clone(),
                    });
                }
                Comparison::Equals(FieldValue::Enum(raw.to_string()))
            }

            (
                FieldType::Text | FieldType::ReferenceIdentifier | FieldType::Enumerated { .. },
                Operator::LessOrEqual | Operator::GreaterOrEqual,
            ) => return Err(unsupported()),
        };

        Ok(Self::new(field, comparison))
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    /// Test an entity; a field the entity does not expose never matches
    pub fn matches<T: Searchable>(&self, entity: &T) -> bool {
        entity
            .field_value(&self.field)
            .is_some_and(|value| self.comparison.accepts(&value))
    }
}

fn parse_number(field: &str, raw: &str) -> Result<i64, FilterError> {
    raw.parse::<i64>()
        .map_err(|_| FilterError::InvalidNumericValue {
            field: field.to_string(),
            value: raw.to_string(),
        })
}
