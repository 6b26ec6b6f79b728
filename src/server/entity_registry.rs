//! Entity registry for managing entity descriptors and auto-generating search routes

use crate::core::{EntitySearchService, Searchable};
use crate::server::handlers::{get_entity, search_entities};
use axum::Router;
use axum::routing::get;
use indexmap::IndexMap;
use serde::Serialize;

/// Trait that describes how to build routes for an entity
///
/// Each searchable entity (Person, Deal, Activity, etc.) is registered through
/// a descriptor that provides its routes and its filterable fields.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "deal")
    fn entity_type(&self) -> &str;

    /// The plural form (e.g., "deals")
    fn plural(&self) -> &str;

    /// Fields accepted in `filter` for this entity
    fn searchable_fields(&self) -> Vec<String>;

    /// Build the routes for this entity
    ///
    /// Should return a Router with routes like:
    /// - GET /{plural}/search
    /// - GET /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Descriptor backed by an [`EntitySearchService`]
pub struct SearchDescriptor<T: Searchable> {
    service: EntitySearchService<T>,
}

impl<T: Searchable> SearchDescriptor<T> {
    pub fn new(service: EntitySearchService<T>) -> Self {
        Self { service }
    }
}

impl<T: Searchable + Serialize> EntityDescriptor for SearchDescriptor<T> {
    fn entity_type(&self) -> &str {
        T::resource_name_singular()
    }

    fn plural(&self) -> &str {
        T::resource_name()
    }

    fn searchable_fields(&self) -> Vec<String> {
        self.service.schema().field_names().map(String::from).collect()
    }

    fn build_routes(&self) -> Router {
        let plural = T::resource_name();
        Router::new()
            .route(&format!("/{}/search", plural), get(search_entities::<T>))
            .route(&format!("/{}/{{id}}", plural), get(get_entity::<T>))
            .with_state(self.service.clone())
    }
}

/// Summary of a registered entity, served by the introspection route
#[derive(Debug, Clone, Serialize)]
pub struct EntitySummary {
    pub entity: String,
    pub plural: String,
    pub search_path: String,
    pub fields: Vec<String>,
}

/// Registry for all entities in the application
///
/// Collects entity descriptors and generates a router with all their routes.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: IndexMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: IndexMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// The entity type name will be used as the key.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Get all registered entity types, in registration order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Describe every registered entity
    pub fn summaries(&self) -> Vec<EntitySummary> {
        self.descriptors
            .values()
            .map(|d| EntitySummary {
                entity: d.entity_type().to_string(),
                plural: d.plural().to_string(),
                search_path: format!("/{}/search", d.plural()),
                fields: d.searchable_fields(),
            })
            .collect()
    }
}
