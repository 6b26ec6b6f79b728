//! Filter-to-predicate engine
//!
//! Turns a textual filter such as `name:john,id>30` into a typed
//! [`Specification`] over an entity, using the entity's [`EntitySchema`] to
//! pick a comparison per field:
//!
//! 1. [`FilterExpression`] splits the raw string into [`Criterion`]s
//! 2. [`EntitySchema::resolve_type`] finds each field's [`FieldType`](crate::core::FieldType)
//! 3. [`Predicate::build`] turns a criterion into a typed comparison
//! 4. [`Specification::compose`] AND-s the predicates together
//!
//! The engine performs no I/O and holds no state between calls. Applying the
//! specification (and tenant scoping, and pagination) is the repository's job.

pub mod criterion;
pub mod error;
pub mod parser;
pub mod predicate;
pub mod schema;
pub mod specification;

pub use criterion::{Criterion, Operator};
pub use error::FilterError;
pub use parser::FilterExpression;
pub use predicate::{Comparison, Predicate};
pub use schema::EntitySchema;
pub use specification::{Specification, SpecificationBuilder};
