//! Entity schemas and field type resolution

use super::error::FilterError;
use crate::core::field::FieldType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Searchable fields of one entity type, keyed by filter field name
///
/// Supplied by the entity (see [`crate::core::Searchable::schema`]) or by
/// configuration. Only fields listed here can appear in a filter.
///
/// # Example
/// ```rust,ignore
/// let schema = EntitySchema::new("deal")
///     .field("name", FieldType::Text)
///     .field("stage", FieldType::ReferenceIdentifier);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Singular entity name (e.g., "person")
    pub entity: String,

    /// Field name -> semantic type, in declaration order
    #[serde(default)]
    pub fields: IndexMap<String, FieldType>,
}

impl EntitySchema {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            fields: IndexMap::new(),
        }
    }

    /// Declare a field, replacing any earlier declaration with the same name
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.insert(name.into(), field_type);
        self
    }

    /// Resolve the semantic type of `key`
    ///
    /// An empty key never resolves, even if a schema declares one.
    pub fn resolve_type(&self, key: &str) -> Result<&FieldType, FilterError> {
        self.fields
            .get(key)
            .filter(|_| !key.is_empty())
            .ok_or_else(|| FilterError::UnknownField {
                field: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
