//! HTTP handlers for entity search
//!
//! Handlers are generic over the entity type; one instance of each is mounted
//! per registered entity by its descriptor.

use crate::core::error::{CrmResult, RequestError};
use crate::core::{EntityId, EntitySearchService, PaginatedResponse, QueryParams, Searchable, Tenant};
use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Serialize;

/// `GET /{plural}/search?filter=...&page=...&limit=...`
pub async fn search_entities<T: Searchable + Serialize>(
    State(service): State<EntitySearchService<T>>,
    Tenant(tenant): Tenant,
    Query(params): Query<QueryParams>,
) -> CrmResult<Json<PaginatedResponse<T>>> {
    let page = service.search(tenant, &params).await?;
    Ok(Json(page))
}

/// `GET /{plural}/{id}`
pub async fn get_entity<T: Searchable + Serialize>(
    State(service): State<EntitySearchService<T>>,
    Tenant(tenant): Tenant,
    Path(id): Path<String>,
) -> CrmResult<Json<T>> {
    let id = id
        .parse::<EntityId>()
        .map_err(|_| RequestError::InvalidEntityId { id: id.clone() })?;
    let entity = service.find_one(id, tenant).await?;
    Ok(Json(entity))
}
