//! Deal records (opportunities moving through a pipeline)

use crate::core::entity::{EntityId, Searchable, TenantId};
use crate::core::field::{FieldType, FieldValue};
use crate::search::EntitySchema;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    /// Position of the deal inside its stage
    pub order: i64,
    pub potential_value: Option<f64>,
    pub currency: Option<String>,
    pub stage: EntityId,
    pub person: Option<EntityId>,
    pub organization: Option<EntityId>,
    pub owner: Option<EntityId>,
    pub possible_close_date: Option<DateTime<Utc>>,
    pub created_date: DateTime<Utc>,
    pub app_account: TenantId,
}

crate::impl_entity!(Deal, "deal", "deals", tenant = app_account);

impl Deal {
    pub fn new(app_account: TenantId, name: impl Into<String>, stage: EntityId, order: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            order,
            potential_value: None,
            currency: None,
            stage,
            person: None,
            organization: None,
            owner: None,
            possible_close_date: None,
            created_date: Utc::now(),
            app_account,
        }
    }

    pub fn with_person(mut self, person: EntityId) -> Self {
        self.person = Some(person);
        self
    }

    pub fn with_value(mut self, value: f64, currency: impl Into<String>) -> Self {
        self.potential_value = Some(value);
        self.currency = Some(currency.into());
        self
    }
}

impl Searchable for Deal {
    fn schema() -> &'static EntitySchema {
        static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            EntitySchema::new("deal")
                .field("id", FieldType::NumericIdentifier)
                .field("name", FieldType::Text)
                .field("order", FieldType::NumericIdentifier)
                .field("currency", FieldType::Text)
                .field("stage", FieldType::ReferenceIdentifier)
                .field("person", FieldType::ReferenceIdentifier)
                .field("organization", FieldType::ReferenceIdentifier)
                .field("owner", FieldType::ReferenceIdentifier)
        })
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::Integer(self.id),
            "name" => FieldValue::text(self.name.as_str()),
            "order" => FieldValue::Integer(self.order),
            "currency" => FieldValue::optional_text(self.currency.as_deref()),
            "stage" => FieldValue::Reference(self.stage),
            "person" => FieldValue::optional_reference(self.person),
            "organization" => FieldValue::optional_reference(self.organization),
            "owner" => FieldValue::optional_reference(self.owner),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Specification;

    #[test]
    fn test_stage_and_order_filter() {
        let deals = [
            Deal::new(1, "Website redesign", 1, 0),
            Deal::new(1, "Support contract", 1, 3),
            Deal::new(1, "Hardware", 2, 1),
        ];
        let spec = Specification::<Deal>::from_filter(Some("stage:1,order>1")).unwrap();
        let names: Vec<&str> = deals
            .iter()
            .filter(|d| spec.is_satisfied_by(d))
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Support contract"]);
    }

    #[test]
    fn test_value_is_not_filterable() {
        assert!(Specification::<Deal>::from_filter(Some("potential_value>100")).is_err());
    }
}
