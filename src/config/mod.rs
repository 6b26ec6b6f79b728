//! Configuration loading and management

use crate::core::error::{ConfigError, CrmResult};
use crate::search::EntitySchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pagination limits applied to search endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size when the request does not give one
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Largest page size a client may request
    #[serde(default = "max_limit")]
    pub max_limit: usize,
}

fn default_limit() -> usize {
    20
}

fn max_limit() -> usize {
    100
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: max_limit(),
        }
    }
}

/// Complete configuration for the search layer
///
/// # Example
/// ```yaml
/// pagination:
///   default_limit: 25
///   max_limit: 200
/// entities:
///   - entity: person
///     fields:
///       name: { type: text }
///       organization: { type: reference_identifier }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Schema overrides; an entity listed here is searchable only on these fields
    #[serde(default)]
    pub entities: Vec<EntitySchema>,
}

impl SearchConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> CrmResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str::<Self>(&content)
            .map_err(|e| ConfigError::ParseError {
                file: Some(path.display().to_string()),
                message: e.to_string(),
            })?
            .validated()
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> CrmResult<Self> {
        serde_yaml::from_str::<Self>(yaml)?.validated()
    }

    /// Schema override configured for `entity`, if any
    pub fn schema_for(&self, entity: &str) -> Option<&EntitySchema> {
        self.entities.iter().find(|schema| schema.entity == entity)
    }

    /// Create a default configuration (built-in schemas, default limits)
    pub fn default_config() -> Self {
        Self::default()
    }

    fn validated(self) -> CrmResult<Self> {
        let PaginationConfig {
            default_limit,
            max_limit,
        } = self.pagination;

        if default_limit == 0 || default_limit > max_limit {
            return Err(ConfigError::InvalidValue {
                field: "pagination.default_limit".to_string(),
                value: default_limit.to_string(),
                message: format!("must be between 1 and max_limit ({})", max_limit),
            }
            .into());
        }

        for (index, schema) in self.entities.iter().enumerate() {
            if self.entities[..index]
                .iter()
                .any(|other| other.entity == schema.entity)
            {
                return Err(ConfigError::InvalidValue {
                    field: "entities".to_string(),
                    value: schema.entity.clone(),
                    message: "entity declared more than once".to_string(),
                }
                .into());
            }
            if schema.contains("") {
                return Err(ConfigError::InvalidValue {
                    field: format!("entities.{}.fields", schema.entity),
                    value: String::new(),
                    message: "field name must not be empty".to_string(),
                }
                .into());
            }
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CrmError;
    use crate::core::field::FieldType;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default_config();
        assert_eq!(config.pagination.default_limit, 20);
        assert_eq!(config.pagination.max_limit, 100);
        assert!(config.entities.is_empty());
    }

    #[test]
    fn test_yaml_schema_override() {
        let yaml = r#"
pagination:
  default_limit: 10
entities:
  - entity: person
    fields:
      name: { type: text }
      organization: { type: reference_identifier }
"#;
        let config = SearchConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.pagination.default_limit, 10);
        assert_eq!(config.pagination.max_limit, 100);

        let schema = config.schema_for("person").unwrap();
        assert_eq!(schema.resolve_type("name").unwrap(), &FieldType::Text);
        assert!(schema.resolve_type("email").is_err());
        assert!(config.schema_for("deal").is_none());
    }

    #[test]
    fn test_yaml_serialization() {
        let mut config = SearchConfig::default_config();
        config.entities.push(
            EntitySchema::new("deal").field("stage", FieldType::ReferenceIdentifier),
        );
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = SearchConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.entities, config.entities);
    }

    #[test]
    fn test_invalid_limits_rejected() {
        let yaml = "pagination:\n  default_limit: 500\n  max_limit: 100\n";
        let err = SearchConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, CrmError::Config(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_duplicate_entity_rejected() {
        let yaml = r#"
entities:
  - entity: person
  - entity: person
"#;
        assert!(SearchConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = SearchConfig::from_yaml_file("/nonexistent/crm.yaml").unwrap_err();
        assert!(matches!(err, CrmError::Config(ConfigError::FileNotFound { .. })));
    }
}
