//! Axum extractors for request-scoped context
//!
//! Tenant resolution itself (authentication, account lookup) happens upstream;
//! by the time a request reaches these handlers the resolved tenant id is
//! carried in the `X-Tenant-ID` header.

use crate::core::entity::TenantId;
use crate::core::error::{CrmError, RequestError};
use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

/// Header carrying the resolved tenant (application account) id
pub const TENANT_HEADER: &str = "x-tenant-id";

/// Read the tenant id from request headers
pub fn extract_tenant_id(headers: &HeaderMap) -> Result<TenantId, RequestError> {
    let raw = headers
        .get(TENANT_HEADER)
        .ok_or_else(|| RequestError::MissingHeader {
            header: TENANT_HEADER.to_string(),
        })?;

    raw.to_str()
        .ok()
        .and_then(|value| value.trim().parse::<TenantId>().ok())
        .ok_or_else(|| RequestError::InvalidHeader {
            header: TENANT_HEADER.to_string(),
            value: String::from_utf8_lossy(raw.as_bytes()).into_owned(),
        })
}

/// Extractor for the calling tenant
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn search(Tenant(tenant): Tenant, Query(params): Query<QueryParams>) { ... }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenant(pub TenantId);

impl<S> FromRequestParts<S> for Tenant
where
    S: Send + Sync,
{
    type Rejection = CrmError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Tenant(extract_tenant_id(&parts.headers)?))
    }
}
