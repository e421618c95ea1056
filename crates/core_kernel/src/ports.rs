//! Port seam between the record service and its stores
//!
//! Domain crates declare port traits that extend [`DomainPort`] and
//! [`HealthCheckable`]; each store (PostgreSQL, in-memory) is an adapter
//! implementing them and reporting failures as [`PortError`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure reported by any store adapter
#[derive(Debug, Error)]
pub enum PortError {
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// The store rejected a value
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A unique key is already taken
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The store could not be reached; retrying later may succeed
    #[error("Connection error: {message}")]
    Connection { message: String },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
        }
    }

    /// Wraps an adapter error that has no better classification
    pub fn internal<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        PortError::Internal {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::Connection { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Marker for port traits; adapters are shared across request tasks
pub trait DomainPort: Send + Sync + 'static {}

/// Whether an adapter can currently serve requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    Unhealthy,
}

impl AdapterHealth {
    pub fn is_operational(&self) -> bool {
        matches!(self, AdapterHealth::Healthy)
    }
}

/// Outcome of one adapter health probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub adapter_id: String,
    pub status: AdapterHealth,
    /// Round trip of the probe in milliseconds
    pub latency_ms: u64,
    pub message: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl HealthCheckResult {
    pub fn healthy(adapter_id: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            latency_ms,
            message: None,
            checked_at: Utc::now(),
        }
    }

    pub fn unhealthy(
        adapter_id: impl Into<String>,
        latency_ms: u64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Unhealthy,
            latency_ms,
            message: Some(message.into()),
            checked_at: Utc::now(),
        }
    }
}

/// Adapters that can probe their backing store
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_entity_and_id() {
        let error = PortError::not_found("InsurancePolicy", 123);
        assert!(error.is_not_found());
        assert!(!error.is_transient());
        assert_eq!(error.to_string(), "Not found: InsurancePolicy with id 123");
    }

    #[test]
    fn test_conflict() {
        let error = PortError::conflict("policy number 'P-1' already exists");
        assert!(error.is_conflict());
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_only_connection_errors_are_transient() {
        assert!(PortError::connection("pool closed").is_transient());
        assert!(!PortError::validation("bad premium").is_transient());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert!(!PortError::internal(io).is_transient());
    }

    #[test]
    fn test_internal_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let error = PortError::internal(io);
        assert_eq!(error.to_string(), "Internal error: disk full");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_health_results() {
        let ok = HealthCheckResult::healthy("db", 3);
        assert!(ok.status.is_operational());
        assert!(ok.message.is_none());

        let down = HealthCheckResult::unhealthy("db", 30_000, "timed out");
        assert!(!down.status.is_operational());
        assert_eq!(down.message.as_deref(), Some("timed out"));
    }
}
