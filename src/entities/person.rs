//! Person records (individual contacts attached to organizations)

use crate::core::entity::{EntityId, Searchable, TenantId};
use crate::core::field::{FieldType, FieldValue};
use crate::search::EntitySchema;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    pub address: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub organization: Option<EntityId>,
    pub app_account: TenantId,
}

crate::impl_entity!(Person, "person", "persons", tenant = app_account);

impl Person {
    /// New unsaved person with only the required columns set
    pub fn new(app_account: TenantId, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            address: None,
            title: None,
            email: None,
            organization: None,
            app_account,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_organization(mut self, organization: EntityId) -> Self {
        self.organization = Some(organization);
        self
    }
}

impl Searchable for Person {
    fn schema() -> &'static EntitySchema {
        static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            EntitySchema::new("person")
                .field("id", FieldType::NumericIdentifier)
                .field("name", FieldType::Text)
                .field("address", FieldType::Text)
                .field("title", FieldType::Text)
                .field("email", FieldType::Text)
                .field("organization", FieldType::ReferenceIdentifier)
                .field("app_account", FieldType::ReferenceIdentifier)
        })
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::Integer(self.id),
            "name" => FieldValue::text(self.name.as_str()),
            "address" => FieldValue::optional_text(self.address.as_deref()),
            "title" => FieldValue::optional_text(self.title.as_deref()),
            "email" => FieldValue::optional_text(self.email.as_deref()),
            "organization" => FieldValue::optional_reference(self.organization),
            "app_account" => FieldValue::Reference(self.app_account),
            _ => return None,
        };
        Some(value)
    }
}
