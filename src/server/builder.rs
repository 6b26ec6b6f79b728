//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::{EntityDescriptor, EntityRegistry, EntitySummary, SearchDescriptor};
use crate::config::SearchConfig;
use crate::core::{EntitySearchService, SearchRepository, Searchable};
use anyhow::Result;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

type DescriptorFactory = Box<dyn FnOnce(Arc<SearchConfig>) -> Box<dyn EntityDescriptor> + Send>;

/// Builder for creating HTTP servers with auto-registered search routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(SearchConfig::from_yaml_file("crm.yaml")?)
///     .register::<Person>(InMemoryRepository::new())
///     .register::<Deal>(InMemoryRepository::new())
///     .build();
/// ```
pub struct ServerBuilder {
    config: SearchConfig,
    factories: Vec<DescriptorFactory>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default_config(),
            factories: Vec::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Replace the search configuration (schemas overrides, pagination)
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Add custom routes to the server
    ///
    /// Use this for endpoints outside the search surface, such as health
    /// checks or entity-specific business operations.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register an entity type backed by `repository`
    ///
    /// This mounts `GET /{plural}/search` and `GET /{plural}/{id}`.
    pub fn register<T>(self, repository: impl SearchRepository<T> + 'static) -> Self
    where
        T: Searchable + Serialize,
    {
        self.register_repository::<T>(Arc::new(repository))
    }

    /// Register an entity type with a shared repository handle
    pub fn register_repository<T>(mut self, repository: Arc<dyn SearchRepository<T>>) -> Self
    where
        T: Searchable + Serialize,
    {
        self.factories.push(Box::new(move |config| {
            let service = EntitySearchService::new(repository, config);
            Box::new(SearchDescriptor::new(service))
        }));
        self
    }

    /// Build the entity registry from everything registered so far
    pub fn build_registry(self) -> (EntityRegistry, Vec<Router>) {
        let config = Arc::new(self.config);
        let mut registry = EntityRegistry::new();
        for factory in self.factories {
            registry.register(factory(config.clone()));
        }
        (registry, self.custom_routes)
    }

    /// Build the final REST router
    ///
    /// This generates:
    /// - Search and get routes for all registered entities
    /// - `GET /entities` introspection route
    /// - Custom routes
    pub fn build(self) -> Router {
        let (registry, custom_routes) = self.build_registry();

        let summaries: Arc<Vec<EntitySummary>> = Arc::new(registry.summaries());
        let introspection = Router::new().route(
            "/entities",
            get(move || {
                let summaries = summaries.clone();
                async move { Json(summaries.as_ref().clone()) }
            }),
        );

        let router = custom_routes
            .into_iter()
            .fold(registry.build_routes().merge(introspection), |router, routes| {
                router.merge(routes)
            });

        router.layer(TraceLayer::new_for_http())
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
