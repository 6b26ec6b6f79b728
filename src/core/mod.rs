//! Core module containing fundamental traits and types

pub mod entity;
pub mod error;
pub mod extractors;
pub mod field;
pub mod query;
pub mod service;
pub mod store;

pub use entity::{Entity, EntityId, Searchable, TenantId};
pub use error::{CrmError, CrmResult};
pub use extractors::{TENANT_HEADER, Tenant};
pub use field::{FieldType, FieldValue};
pub use query::{Page, Pageable, PaginatedResponse, PaginationMeta, QueryParams};
pub use service::EntitySearchService;
pub use store::SearchRepository;
