//! Repository trait for tenant-scoped, filtered queries

use crate::core::entity::{EntityId, Searchable, TenantId};
use crate::core::error::CrmResult;
use crate::core::query::{Page, Pageable};
use crate::search::Specification;
use async_trait::async_trait;

/// Query executor for one entity type
///
/// Implementations apply a [`Specification`] together with tenant scoping
/// and pagination. Every read and delete is restricted to the given tenant;
/// records of other tenants behave as if they did not exist.
#[async_trait]
pub trait SearchRepository<T: Searchable>: Send + Sync {
    /// Insert or replace a record, assigning an id on first save
    async fn save(&self, entity: T) -> CrmResult<T>;

    /// Get a record by id within a tenant
    async fn find_one(&self, id: EntityId, tenant: TenantId) -> CrmResult<Option<T>>;

    /// Get one page of the tenant's records satisfying `spec`
    ///
    /// # Parameters
    /// - `spec`: Composed filter (an unrestricted spec matches everything)
    /// - `tenant`: Owning tenant; other tenants' records are never returned
    /// - `pageable`: Page window over the matching records, in id order
    async fn find_all(
        &self,
        spec: &Specification<T>,
        tenant: TenantId,
        pageable: Pageable,
    ) -> CrmResult<Page<T>>;

    /// Delete a record; returns whether a record of this tenant was removed
    async fn delete(&self, id: EntityId, tenant: TenantId) -> CrmResult<bool>;
}
