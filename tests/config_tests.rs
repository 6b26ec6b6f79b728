//! Integration tests for loading the search configuration from YAML files

use crm::core::error::ConfigError;
use crm::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config_from_file() {
    let file = write_config(
        r#"
pagination:
  default_limit: 25
  max_limit: 200

entities:
  - entity: deal
    fields:
      name: { type: text }
      order: { type: numeric_identifier }
      owner: { type: reference_identifier }
  - entity: activity
    fields:
      type: { type: enumerated, members: [CALL, MEETING] }
"#,
    );

    let config = SearchConfig::from_yaml_file(file.path()).unwrap();

    assert_eq!(config.pagination.default_limit, 25);
    assert_eq!(config.pagination.max_limit, 200);

    let deal = config.schema_for("deal").unwrap();
    assert_eq!(deal.field_names().collect::<Vec<_>>(), vec!["name", "order", "owner"]);
    assert_eq!(deal.resolve_type("order").unwrap(), &FieldType::NumericIdentifier);

    let activity = config.schema_for("activity").unwrap();
    assert_eq!(
        activity.resolve_type("type").unwrap(),
        &FieldType::enumerated(["CALL", "MEETING"])
    );
    assert!(config.schema_for("person").is_none());
}

#[test]
fn test_missing_sections_use_defaults() {
    let file = write_config("entities: []\n");
    let config = SearchConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.pagination, PaginationConfig::default());
    assert!(config.entities.is_empty());
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = SearchConfig::from_yaml_file(&path).unwrap_err();
    assert!(matches!(err, CrmError::Config(ConfigError::FileNotFound { .. })));
}

#[test]
fn test_parse_error_names_the_file() {
    let file = write_config("pagination:\n  default_limit: many\n");

    let err = SearchConfig::from_yaml_file(file.path()).unwrap_err();
    match err {
        CrmError::Config(ConfigError::ParseError {
            file: Some(name), ..
        }) => assert!(name.ends_with(&*file.path().file_name().unwrap().to_string_lossy())),
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_unknown_field_type_is_rejected() {
    let file = write_config(
        r#"
entities:
  - entity: deal
    fields:
      value: { type: decimal }
"#,
    );
    assert!(SearchConfig::from_yaml_file(file.path()).is_err());
}

#[test]
fn test_inconsistent_limits_are_rejected() {
    let err = SearchConfig::from_yaml_str("pagination:\n  default_limit: 50\n  max_limit: 10\n")
        .unwrap_err();
    assert!(matches!(
        err,
        CrmError::Config(ConfigError::InvalidValue { ref field, .. }) if field == "pagination.default_limit"
    ));
}

#[test]
fn test_duplicate_entity_overrides_are_rejected() {
    let yaml = r#"
entities:
  - entity: person
    fields:
      name: { type: text }
  - entity: person
    fields:
      email: { type: text }
"#;
    assert!(SearchConfig::from_yaml_str(yaml).is_err());
}

#[test]
fn test_empty_field_name_is_rejected() {
    let yaml = r#"
entities:
  - entity: deal
    fields:
      "": { type: text }
"#;
    let err = SearchConfig::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(
        err,
        CrmError::Config(ConfigError::InvalidValue { ref field, .. }) if field == "entities.deal.fields"
    ));
}

#[test]
fn test_override_drives_filtering() {
    let config = SearchConfig::from_yaml_str(
        r#"
entities:
  - entity: contact
    fields:
      gender: { type: enumerated, members: [FEMALE] }
"#,
    )
    .unwrap();
    let schema = config.schema_for("contact").unwrap();

    let spec = Specification::<Contact>::compose(
        FilterExpression::parse(Some("gender:FEMALE")).unwrap().criteria(),
        schema,
    )
    .unwrap();
    assert!(spec.is_satisfied_by(&Contact::new(1, "Maria").with_gender(Gender::Female)));
    assert!(!spec.is_satisfied_by(&Contact::new(1, "Alex").with_gender(Gender::Male)));

    let rejected = Specification::<Contact>::compose(
        FilterExpression::parse(Some("gender:MALE")).unwrap().criteria(),
        schema,
    );
    assert!(matches!(rejected, Err(FilterError::InvalidEnumValue { .. })));
}
