//! Typed error handling for the CRM backend
//!
//! This module provides the error hierarchy surfaced by services and HTTP
//! handlers so that clients can react to specific failures instead of a
//! generic `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`FilterError`]: Rejected search filters (bad syntax, unknown field, ...)
//! - [`EntityError`]: Errors related to entity lookups
//! - [`ConfigError`]: Errors related to configuration parsing and validation
//! - [`RequestError`]: Errors related to the HTTP request itself
//! - [`StorageError`]: Errors related to storage backends
//!
//! # Example
//!
//! ```rust,ignore
//! match service.search(tenant, Some("name<x"), &params).await {
//!     Ok(page) => println!("{} results", page.pagination.total),
//!     Err(CrmError::Filter(FilterError::UnsupportedOperator { field, .. })) => {
//!         println!("cannot range-compare {}", field);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use crate::core::entity::EntityId;
use crate::search::FilterError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type of the CRM backend
#[derive(Debug)]
pub enum CrmError {
    /// Search filter rejected by the filter engine
    Filter(FilterError),

    /// Entity-related errors
    Entity(EntityError),

    /// Configuration errors
    Config(ConfigError),

    /// HTTP/Request errors
    Request(RequestError),

    /// Storage backend errors
    Storage(StorageError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for CrmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrmError::Filter(e) => write!(f, "{}", e),
            CrmError::Entity(e) => write!(f, "{}", e),
            CrmError::Config(e) => write!(f, "{}", e),
            CrmError::Request(e) => write!(f, "{}", e),
            CrmError::Storage(e) => write!(f, "{}", e),
            CrmError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CrmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrmError::Filter(e) => Some(e),
            CrmError::Entity(e) => Some(e),
            CrmError::Config(e) => Some(e),
            CrmError::Request(e) => Some(e),
            CrmError::Storage(e) => Some(e),
            CrmError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CrmError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CrmError::Filter(_) => StatusCode::BAD_REQUEST,
            CrmError::Entity(e) => e.status_code(),
            CrmError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CrmError::Request(e) => e.status_code(),
            CrmError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CrmError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CrmError::Filter(e) => e.error_code(),
            CrmError::Entity(e) => e.error_code(),
            CrmError::Config(_) => "CONFIG_ERROR",
            CrmError::Request(e) => e.error_code(),
            CrmError::Storage(_) => "STORAGE_ERROR",
            CrmError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CrmError::Filter(FilterError::MalformedFilter {
                token, position, ..
            }) => Some(serde_json::json!({
                "token": token,
                "position": position
            })),
            CrmError::Filter(FilterError::InvalidEnumValue {
                field, allowed, ..
            }) => Some(serde_json::json!({
                "field": field,
                "allowed": allowed
            })),
            CrmError::Filter(e) => e.field().map(|field| serde_json::json!({ "field": field })),
            CrmError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for CrmError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<FilterError> for CrmError {
    fn from(err: FilterError) -> Self {
        CrmError::Filter(err)
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity operations
#[derive(Debug)]
pub enum EntityError {
    /// Entity was not found (or belongs to another tenant)
    NotFound { entity_type: String, id: EntityId },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, id } => {
                write!(f, "{} with id '{}' not found", entity_type, id)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

impl From<EntityError> for CrmError {
    fn from(err: EntityError) -> Self {
        CrmError::Entity(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for CrmError {
    fn from(err: ConfigError) -> Self {
        CrmError::Config(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug)]
pub enum StorageError {
    /// A lock guarding shared storage was poisoned by a panicking writer
    LockPoisoned { backend: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned { backend } => {
                write!(f, "{} storage lock poisoned", backend)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for CrmError {
    fn from(err: StorageError) -> Self {
        CrmError::Storage(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug)]
pub enum RequestError {
    /// Missing required header
    MissingHeader { header: String },

    /// Header present but unusable
    InvalidHeader { header: String, value: String },

    /// Invalid entity ID format in the path
    InvalidEntityId { id: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MissingHeader { header } => {
                write!(f, "Missing required header: {}", header)
            }
            RequestError::InvalidHeader { header, value } => {
                write!(f, "Invalid value '{}' for header {}", value, header)
            }
            RequestError::InvalidEntityId { id } => {
                write!(f, "Invalid entity ID format: '{}'", id)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MissingHeader { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidHeader { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidEntityId { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MissingHeader { .. } => "MISSING_HEADER",
            RequestError::InvalidHeader { .. } => "INVALID_HEADER",
            RequestError::InvalidEntityId { .. } => "INVALID_ENTITY_ID",
        }
    }
}

impl From<RequestError> for CrmError {
    fn from(err: RequestError) -> Self {
        CrmError::Request(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<std::io::Error> for CrmError {
    fn from(err: std::io::Error) -> Self {
        CrmError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for CrmError {
    fn from(err: serde_yaml::Error) -> Self {
        CrmError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<anyhow::Error> for CrmError {
    fn from(err: anyhow::Error) -> Self {
        CrmError::Internal(err.to_string())
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for CRM operations
pub type CrmResult<T> = Result<T, CrmError>;

// =============================================================================
// Tests
// =============================================================================
