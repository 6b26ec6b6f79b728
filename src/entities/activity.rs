//! Activity records (calls, meetings, tasks scheduled against deals/persons)

use crate::core::entity::{EntityId, Searchable, TenantId};
use crate::core::field::{FieldType, FieldValue};
use crate::search::EntitySchema;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

crate::coded_enum!(
    /// Kind of activity
    ActivityType {
        Call => "CALL",
        Meeting => "MEETING",
        Task => "TASK",
        Deadline => "DEADLINE",
        Email => "EMAIL",
        Lunch => "LUNCH",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub id: EntityId,
    pub title: String,
    pub memo: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub deal: Option<EntityId>,
    pub person: Option<EntityId>,
    pub organization: Option<EntityId>,
    pub agent: Option<EntityId>,
    #[serde(default)]
    pub done: bool,
    pub closed_date: Option<DateTime<Utc>>,
    pub app_account: TenantId,
}

crate::impl_entity!(Activity, "activity", "activities", tenant = app_account);

impl Activity {
    pub fn new(app_account: TenantId, title: impl Into<String>, activity_type: ActivityType) -> Self {
        Self {
            id: 0,
            title: title.into(),
            memo: None,
            activity_type,
            start: None,
            end: None,
            deal: None,
            person: None,
            organization: None,
            agent: None,
            done: false,
            closed_date: None,
            app_account,
        }
    }

    pub fn for_deal(mut self, deal: EntityId) -> Self {
        self.deal = Some(deal);
        self
    }

    /// Mark the activity as done now
    pub fn complete(&mut self) {
        self.done = true;
        self.closed_date = Some(Utc::now());
    }
}

impl Searchable for Activity {
    fn schema() -> &'static EntitySchema {
        static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            EntitySchema::new("activity")
                .field("id", FieldType::NumericIdentifier)
                .field("title", FieldType::Text)
                .field("memo", FieldType::Text)
                .field("type", ActivityType::field_type())
                .field("deal", FieldType::ReferenceIdentifier)
                .field("person", FieldType::ReferenceIdentifier)
                .field("organization", FieldType::ReferenceIdentifier)
                .field("agent", FieldType::ReferenceIdentifier)
        })
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => FieldValue::Integer(self.id),
            "title" => FieldValue::text(self.title.as_str()),
            "memo" => FieldValue::optional_text(self.memo.as_deref()),
            "type" => self.activity_type.field_value(),
            "deal" => FieldValue::optional_reference(self.deal),
            "person" => FieldValue::optional_reference(self.person),
            "organization" => FieldValue::optional_reference(self.organization),
            "agent" => FieldValue::optional_reference(self.agent),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{FilterError, Specification};

    #[test]
    fn test_filter_by_type() {
        let call = Activity::new(1, "Intro call", ActivityType::Call).for_deal(4);
        let lunch = Activity::new(1, "Team lunch", ActivityType::Lunch);

        let spec = Specification::<Activity>::from_filter(Some("type:CALL,deal:4")).unwrap();
        assert!(spec.is_satisfied_by(&call));
        assert!(!spec.is_satisfied_by(&lunch));
    }

    #[test]
    fn test_unknown_type_member() {
        let err = Specification::<Activity>::from_filter(Some("type:call")).unwrap_err();
        assert!(matches!(err, FilterError::InvalidEnumValue { ref allowed, .. } if allowed.len() == 6));
    }

    #[test]
    fn test_complete_sets_closed_date() {
        let mut task = Activity::new(1, "Send quote", ActivityType::Task);
        task.complete();
        assert!(task.done);
        assert!(task.closed_date.is_some());
    }
}
