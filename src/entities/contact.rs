//! Contact records

use crate::core::entity::{EntityId, Searchable, TenantId};
use crate::core::field::{FieldType, FieldValue};
use crate::search::EntitySchema;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

crate::coded_enum!(
    /// Gender of a contact
    Gender { Male => "MALE", Female => "FEMALE" }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    pub address: Option<String>,
    pub login: Option<String>,
    pub email: Option<String>,
    pub gender: Option<Gender>,
    pub app_account: TenantId,
}

crate::impl_entity!(Contact, "contact", "contacts", tenant = app_account);

impl Contact {
    pub fn new(app_account: TenantId, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            address: None,
            login: None,
            email: None,
            gender: None,
            app_account,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}

impl Searchable for Contact {
    fn schema() -> &'static EntitySchema {
        static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            EntitySchema::new("contact")
                .field("id", FieldType::NumericIdentifier)
                .field("name", FieldType::Text)
                .field("address", FieldType::Text)
                .field("login", FieldType::Text)
                .field("email", FieldType::Text)
                .field("gender", Gender::field_type())
        })
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::Integer(self.id),
            "name" => FieldValue::text(self.name.as_str()),
            "address" => FieldValue::optional_text(self.address.as_deref()),
            "login" => FieldValue::optional_text(self.login.as_deref()),
            "email" => FieldValue::optional_text(self.email.as_deref()),
            "gender" => self.gender.map_or(FieldValue::Null, Gender::field_value),
            _ => return None,
        };
        Some(value)
    }
}
