//! Conjunctive composition of predicates

use super::criterion::{Criterion, Operator};
use super::error::FilterError;
use super::parser::FilterExpression;
use super::predicate::Predicate;
use super::schema::EntitySchema;
use crate::core::entity::Searchable;
use std::fmt;
use std::marker::PhantomData;

/// AND of every predicate of one search request, typed by its entity
///
/// An empty specification accepts every entity.
pub struct Specification<T> {
    predicates: Vec<Predicate>,
    _entity: PhantomData<fn(&T) -> bool>,
}

impl<T> Specification<T> {
    /// The specification that accepts everything
    pub fn always() -> Self {
        Self {
            predicates: Vec::new(),
            _entity: PhantomData,
        }
    }

    /// Compose criteria against `schema`
    ///
    /// Either every criterion becomes a predicate or the whole composition
    /// fails with the first error; a partial specification is never returned.
    pub fn compose(criteria: &[Criterion], schema: &EntitySchema) -> Result<Self, FilterError> {
        criteria.iter().try_fold(Self::always(), |spec, criterion| {
            let field_type = schema.resolve_type(criterion.key())?;
            Ok(spec.and(Predicate::build(criterion, field_type)?))
        })
    }

    /// Add one more predicate to the conjunction
    pub fn and(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// True when no predicate restricts the result
    pub fn is_unrestricted(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<T: Searchable> Specification<T> {
    /// Parse `raw` and compose it against the entity's own schema
    pub fn from_filter(raw: Option<&str>) -> Result<Self, FilterError> {
        let expression = FilterExpression::parse(raw)?;
        Self::compose(expression.criteria(), T::schema())
    }

    /// Evaluate the conjunction against one entity
    pub fn is_satisfied_by(&self, entity: &T) -> bool {
        self.predicates.iter().all(|p| p.matches(entity))
    }
}

impl<T> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T> Default for Specification<T> {
    fn default() -> Self {
        Self::always()
    }
}

impl<T> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("entity", &std::any::type_name::<T>())
            .field("predicates", &self.predicates)
            .finish()
    }
}

/// Fluent accumulator of criteria, composed in one step
///
/// # Example
/// ```rust,ignore
/// let spec: Specification<Person> = SpecificationBuilder::new()
///     .with("name", Operator::Equals, "john")
///     .with("id", Operator::GreaterOrEqual, "30")
///     .build(Person::schema())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpecificationBuilder {
    criteria: Vec<Criterion>,
}

impl SpecificationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        self.with_criterion(Criterion::new(key, operator, value))
    }

    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Append every criterion of a parsed expression
    pub fn with_expression(mut self, expression: FilterExpression) -> Self {
        self.criteria.extend(expression);
        self
    }

    pub fn build<T>(&self, schema: &EntitySchema) -> Result<Specification<T>, FilterError> {
        Specification::compose(&self.criteria, schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::{FieldType, FieldValue};
    use std::sync::OnceLock;

    #[derive(Debug, Clone)]
    struct Ticket {
        id: i64,
        tenant: i64,
        title: String,
        status: &'static str,
    }

    crate::impl_entity!(Ticket, "ticket", "tickets", tenant = tenant);

    impl Searchable for Ticket {
        fn schema() -> &'static EntitySchema {
            static SCHEMA: OnceLock<EntitySchema> = OnceLock::new();
            SCHEMA.get_or_init(|| {
                EntitySchema::new("ticket")
                    .field("id", FieldType::NumericIdentifier)
                    .field("title", FieldType::Text)
                    .field("status", FieldType::enumerated(["OPEN", "CLOSED"]))
            })
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "id" => Some(FieldValue::Integer(self.id)),
                "title" => Some(FieldValue::text(self.title.as_str())),
                "status" => Some(FieldValue::Enum(self.status.to_string())),
                _ => None,
            }
        }
    }

    fn tickets() -> Vec<Ticket> {
        vec![
            Ticket { id: 1, tenant: 1, title: "printer broken".into(), status: "OPEN" },
            Ticket { id: 2, tenant: 1, title: "broken screen".into(), status: "CLOSED" },
            Ticket { id: 3, tenant: 1, title: "new laptop".into(), status: "OPEN" },
        ]
    }

    fn ids(spec: &Specification<Ticket>) -> Vec<i64> {
        tickets()
            .iter()
            .filter(|t| spec.is_satisfied_by(t))
            .map(|t| t.id)
            .collect()
    }

    #[test]
    fn test_empty_composition_accepts_all() {
        let spec = Specification::<Ticket>::compose(&[], Ticket::schema()).unwrap();
        assert!(spec.is_unrestricted());
        assert_eq!(ids(&spec), vec![1, 2, 3]);
        assert_eq!(ids(&Specification::from_filter(None).unwrap()), vec![1, 2, 3]);
    }

    #[test]
    fn test_conjunction_of_criteria() {
        let spec = Specification::<Ticket>::from_filter(Some("title:broken,status:OPEN")).unwrap();
        assert_eq!(spec.predicates().len(), 2);
        assert_eq!(ids(&spec), vec![1]);
    }

    #[test]
    fn test_composition_is_order_independent() {
        let forward = vec![
            Criterion::new("id", Operator::GreaterOrEqual, "2"),
            Criterion::new("status", Operator::Equals, "OPEN"),
        ];
        let reversed: Vec<Criterion> = forward.iter().rev().cloned().collect();

        let a = Specification::<Ticket>::compose(&forward, Ticket::schema()).unwrap();
        let b = Specification::<Ticket>::compose(&reversed, Ticket::schema()).unwrap();
        for ticket in tickets() {
            assert_eq!(a.is_satisfied_by(&ticket), b.is_satisfied_by(&ticket));
        }
        assert_eq!(ids(&a), vec![3]);
    }

    #[test]
    fn test_any_failure_aborts_composition() {
        let criteria = vec![
            Criterion::new("title", Operator::Equals, "broken"),
            Criterion::new("unknownField", Operator::Equals, "x"),
        ];
        let err = Specification::<Ticket>::compose(&criteria, Ticket::schema()).unwrap_err();
        assert!(matches!(err, FilterError::UnknownField { ref field } if field == "unknownField"));
    }

    #[test]
    fn test_builder_matches_parsed_filter() {
        let built: Specification<Ticket> = SpecificationBuilder::new()
            .with("title", Operator::Equals, "broken")
            .build(Ticket::schema())
            .unwrap();
        let parsed = Specification::<Ticket>::from_filter(Some("title:broken")).unwrap();
        assert_eq!(built.predicates(), parsed.predicates());
    }

    #[test]
    fn test_builder_accepts_parsed_expression() {
        let expression: FilterExpression = "id<2".parse().unwrap();
        let spec: Specification<Ticket> = SpecificationBuilder::new()
            .with_expression(expression)
            .with("status", Operator::Equals, "OPEN")
            .build(Ticket::schema())
            .unwrap();
        assert_eq!(ids(&spec), vec![1]);
    }
}
