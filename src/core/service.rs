//! Entity services: filter composition, tenant checks and pagination

use crate::config::SearchConfig;
use crate::core::entity::{EntityId, Searchable, TenantId};
use crate::core::error::{CrmResult, EntityError};
use crate::core::query::{PaginatedResponse, QueryParams};
use crate::core::store::SearchRepository;
use crate::search::{EntitySchema, FilterExpression, Specification};
use std::sync::Arc;

/// Service for one entity type on top of its repository
///
/// `search` is the entry point used by the REST layer: it parses the filter,
/// composes it against the entity schema (or the configured override) and
/// runs it scoped to the caller's tenant.
pub struct EntitySearchService<T: Searchable> {
    repository: Arc<dyn SearchRepository<T>>,
    config: Arc<SearchConfig>,
}

impl<T: Searchable> Clone for EntitySearchService<T> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T: Searchable> EntitySearchService<T> {
    pub fn new(repository: Arc<dyn SearchRepository<T>>, config: Arc<SearchConfig>) -> Self {
        Self { repository, config }
    }

    /// Schema used for filters on `T`
    pub fn schema(&self) -> &EntitySchema {
        self.config
            .schema_for(T::resource_name_singular())
            .unwrap_or_else(|| T::schema())
    }

    /// Parse and compose a filter without running it
    pub fn specification(&self, filter: Option<&str>) -> CrmResult<Specification<T>> {
        let expression = FilterExpression::parse(filter)?;
        let spec = Specification::compose(expression.criteria(), self.schema())?;
        Ok(spec)
    }

    /// Search the tenant's records matching `params.filter`
    pub async fn search(
        &self,
        tenant: TenantId,
        params: &QueryParams,
    ) -> CrmResult<PaginatedResponse<T>> {
        let entity = T::resource_name_singular();
        tracing::debug!(entity, tenant, filter = ?params.filter(), "Request to search");

        let spec = self.specification(params.filter()).inspect_err(|e| {
            tracing::warn!(entity, tenant, error = %e, "Rejected search filter");
        })?;

        let pageable = params.pageable(&self.config.pagination);
        let page = self.repository.find_all(&spec, tenant, pageable).await?;

        tracing::debug!(
            entity,
            tenant,
            criteria = spec.predicates().len(),
            total = page.total,
            "Search completed"
        );
        Ok(page.into())
    }

    /// Get one record of the tenant
    pub async fn find_one(&self, id: EntityId, tenant: TenantId) -> CrmResult<T> {
        tracing::debug!(entity = T::resource_name_singular(), id, tenant, "Request to get");
        self.repository
            .find_one(id, tenant)
            .await?
            .ok_or_else(|| self.not_found(id))
    }

    /// Save a record owned by `tenant`
    ///
    /// Updating an id that the tenant does not own fails as not found.
    pub async fn save(&self, entity: T, tenant: TenantId) -> CrmResult<T> {
        if entity.tenant_id() != tenant {
            return Err(self.not_found(entity.id()));
        }
        if entity.is_persisted() && self.repository.find_one(entity.id(), tenant).await?.is_none() {
            return Err(self.not_found(entity.id()));
        }
        tracing::debug!(entity = T::resource_name_singular(), tenant, "Request to save");
        self.repository.save(entity).await
    }

    /// Delete a record of the tenant
    pub async fn delete(&self, id: EntityId, tenant: TenantId) -> CrmResult<()> {
        tracing::debug!(entity = T::resource_name_singular(), id, tenant, "Request to delete");
        if self.repository.delete(id, tenant).await? {
            Ok(())
        } else {
            Err(self.not_found(id))
        }
    }

    fn not_found(&self, id: EntityId) -> crate::core::error::CrmError {
        EntityError::NotFound {
            entity_type: T::resource_name_singular().to_string(),
            id,
        }
        .into()
    }
}
