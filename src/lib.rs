//! # CRM Search
//!
//! A multi-tenant CRM search backend built around a typed filter-to-predicate engine.
//!
//! ## Features
//!
//! - **Compact filter syntax**: `name:john,order>5` parsed into ordered criteria
//! - **Schema-driven typing**: every searchable field declares its type once
//! - **Type-aware predicates**: text contains, numeric ranges, enum membership
//! - **All-or-nothing composition**: one bad criterion rejects the whole filter
//! - **Tenant isolation**: repositories scope every query to the caller's tenant
//! - **Configuration-Based**: override schemas and pagination via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crm::prelude::*;
//!
//! let deals = InMemoryRepository::<Deal>::new();
//! deals.save(Deal::new(1, "Big Deal", 3, 7)).await?;
//!
//! let spec = Specification::<Deal>::from_filter(Some("name:Big,order>5"))?;
//! let page = deals.find_all(&spec, 1, Pageable::default()).await?;
//!
//! ServerBuilder::new()
//!     .register::<Deal>(deals)
//!     .serve("127.0.0.1:3000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod search;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        CrmError, CrmResult, Entity, EntityId, EntitySearchService, FieldType, FieldValue, Page,
        Pageable, PaginatedResponse, QueryParams, SearchRepository, Searchable, TENANT_HEADER,
        Tenant, TenantId,
    };

    // === Filter Engine ===
    pub use crate::search::{
        Comparison, Criterion, EntitySchema, FilterError, FilterExpression, Operator, Predicate,
        Specification, SpecificationBuilder,
    };

    // === Macros ===
    pub use crate::{coded_enum, impl_entity};

    // === Entities ===
    pub use crate::entities::{Activity, ActivityType, Contact, Deal, Gender, Person};

    // === Storage ===
    pub use crate::storage::InMemoryRepository;

    // === Config ===
    pub use crate::config::{PaginationConfig, SearchConfig};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, State},
        routing::get,
    };
}
