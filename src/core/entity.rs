//! Entity traits defining the core abstraction for all CRM records

use crate::core::field::FieldValue;
use crate::search::EntitySchema;

/// Identifier type of every persisted record
pub type EntityId = i64;

/// Identifier of the tenant (application account) owning a record
pub type TenantId = i64;

/// Base trait for all tenant-owned CRM records.
///
/// Every record has a numeric id and belongs to exactly one tenant. Storage
/// and services use [`Entity::tenant_id`] to keep tenants isolated.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "persons", "deals")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "person", "deal")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record (0 when not yet saved)
    fn id(&self) -> EntityId;

    /// Assign the identifier chosen by the repository on first save
    fn set_id(&mut self, id: EntityId);

    /// Get the owning tenant
    fn tenant_id(&self) -> TenantId;

    /// Check whether the record was already saved
    fn is_persisted(&self) -> bool {
        self.id() != 0
    }
}

/// Records that can be filtered with the search engine.
///
/// The schema lists the filterable fields and their semantic types;
/// `field_value` reads those fields from an instance. The two must agree on
/// field names: a schema field the entity cannot read never matches.
pub trait Searchable: Entity {
    /// Filterable fields of this entity type
    fn schema() -> &'static EntitySchema;

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldType;
    use std::sync::OnceLock;

    #[derive(Clone, Debug)]
    struct Note {
        id: EntityId,
        tenant: TenantId,
        body: String,
    }

    impl Entity for Note {
        fn resource_name() -> &'static str {
            "notes"
        }

        fn resource_name_singular() -> &'static str {
            "note"
        }

        fn id(&self) -> EntityId {
            self.id
        }

        fn set_id(&mut self, id: EntityId) {
            self.id = id;
        }

        fn tenant_id(&self) -> TenantId {
            self.tenant
        }
    }

    impl Searchable for Note {
        fn schema() -> &'static EntitySchema {
            static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
            SCHEMA.get_or_init(|| EntitySchema::new("note").field("body", FieldType::Text))
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "body" => Some(FieldValue::text(self.body.as_str())),
                _ => None,
            }
        }
    }

    #[test]
    fn test_entity_is_persisted() {
        let mut note = Note {
            id: 0,
            tenant: 1,
            body: "call back".to_string(),
        };
        assert!(!note.is_persisted());
        note.set_id(5);
        assert!(note.is_persisted());
        assert_eq!(note.tenant_id(), 1);
    }

    #[test]
    fn test_entity_metadata() {
        assert_eq!(Note::resource_name(), "notes");
        assert_eq!(Note::resource_name_singular(), "note");
        assert!(Note::schema().contains("body"));
    }

    #[test]
    fn test_field_value_lookup() {
        let note = Note {
            id: 1,
            tenant: 1,
            body: "hello".to_string(),
        };
        assert_eq!(note.field_value("body"), Some(FieldValue::text("hello")));
        assert_eq!(note.field_value("missing"), None);
    }
}
