//! Server module for building HTTP servers with auto-registered routes
//!
//! This module provides a `ServerBuilder` that automatically registers:
//! - Search routes for every registered entity
//! - Lookup-by-id routes scoped to the calling tenant
//! - An introspection route listing entities and their filterable fields

pub mod builder;
pub mod entity_registry;
pub mod handlers;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry, EntitySummary, SearchDescriptor};
