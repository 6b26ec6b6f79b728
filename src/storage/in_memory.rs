//! In-memory implementation of SearchRepository for testing and development

use crate::core::entity::{EntityId, Searchable, TenantId};
use crate::core::error::{CrmResult, StorageError};
use crate::core::query::{Page, Pageable};
use crate::core::store::SearchRepository;
use crate::search::Specification;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

const BACKEND: &str = "in-memory";

/// In-memory repository implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Records are kept in id order so pages are stable.
pub struct InMemoryRepository<T> {
    records: Arc<RwLock<BTreeMap<EntityId, T>>>,
    next_id: Arc<AtomicI64>,
}

impl<T> InMemoryRepository<T> {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn poisoned() -> StorageError {
        StorageError::LockPoisoned {
            backend: BACKEND.to_string(),
        }
    }
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Searchable> SearchRepository<T> for InMemoryRepository<T> {
    async fn save(&self, mut entity: T) -> CrmResult<T> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        if entity.is_persisted() {
            self.next_id
                .fetch_max(entity.id().saturating_add(1), Ordering::SeqCst);
        } else {
            entity.set_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        }

        records.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn find_one(&self, id: EntityId, tenant: TenantId) -> CrmResult<Option<T>> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;

        Ok(records
            .get(&id)
            .filter(|record| record.tenant_id() == tenant)
            .cloned())
    }

    async fn find_all(
        &self,
        spec: &Specification<T>,
        tenant: TenantId,
        pageable: Pageable,
    ) -> CrmResult<Page<T>> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;

        let mut total = 0;
        let mut items = Vec::with_capacity(pageable.limit.min(records.len()));
        for record in records
            .values()
            .filter(|record| record.tenant_id() == tenant && spec.is_satisfied_by(record))
        {
            if total >= pageable.offset() && items.len() < pageable.limit {
                items.push(record.clone());
            }
            total += 1;
        }

        Ok(Page {
            items,
            total,
            pageable,
        })
    }

    async fn delete(&self, id: EntityId, tenant: TenantId) -> CrmResult<bool> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        if records.get(&id).is_some_and(|record| record.tenant_id() == tenant) {
            records.remove(&id);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Person;

    fn person(tenant: TenantId, name: &str) -> Person {
        Person::new(tenant, name)
    }

    #[tokio::test]
    async fn test_save_assigns_ids() {
        let repo = InMemoryRepository::new();
        let a = repo.save(person(1, "Alice")).await.unwrap();
        let b = repo.save(person(1, "Bob")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_save_with_explicit_id_moves_sequence() {
        let repo = InMemoryRepository::new();
        let mut seeded = person(1, "Seeded");
        seeded.id = 10;
        repo.save(seeded).await.unwrap();
        let next = repo.save(person(1, "Next")).await.unwrap();
        assert_eq!(next.id, 11);
    }

    #[tokio::test]
    async fn test_save_with_largest_id() {
        let repo = InMemoryRepository::new();
        let mut last = person(1, "Last");
        last.id = i64::MAX;
        let saved = repo.save(last).await.unwrap();
        assert_eq!(saved.id, i64::MAX);
        assert!(repo.find_one(i64::MAX, 1).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let repo = InMemoryRepository::new();
        repo.save(person(1, "Alice")).await.unwrap();

        let spec = Specification::always();
        let page = repo
            .find_all(&spec, 1, Pageable::new(usize::MAX, usize::MAX))
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_find_one_is_tenant_scoped() {
        let repo = InMemoryRepository::new();
        let saved = repo.save(person(1, "Alice")).await.unwrap();
        assert!(repo.find_one(saved.id, 1).await.unwrap().is_some());
        assert!(repo.find_one(saved.id, 2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_pages_in_id_order() {
        let repo = InMemoryRepository::new();
        for name in ["a", "b", "c", "d", "e"] {
            repo.save(person(1, name)).await.unwrap();
        }
        repo.save(person(2, "other")).await.unwrap();

        let spec = Specification::always();
        let page = repo.find_all(&spec, 1, Pageable::new(2, 2)).await.unwrap();
        assert_eq!(page.total, 5);
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["c", "d"]);
    }

    #[tokio::test]
    async fn test_find_all_applies_specification() {
        let repo = InMemoryRepository::new();
        repo.save(person(1, "john smith")).await.unwrap();
        repo.save(person(1, "jane doe")).await.unwrap();

        let spec = Specification::<Person>::from_filter(Some("name:john")).unwrap();
        let page = repo.find_all(&spec, 1, Pageable::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "john smith");
    }

    #[tokio::test]
    async fn test_delete_is_tenant_scoped() {
        let repo = InMemoryRepository::new();
        let saved = repo.save(person(1, "Alice")).await.unwrap();
        assert!(!repo.delete(saved.id, 2).await.unwrap());
        assert!(repo.delete(saved.id, 1).await.unwrap());
        assert!(repo.find_one(saved.id, 1).await.unwrap().is_none());
    }
}
