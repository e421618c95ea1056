//! Insurance Policy Records Domain
//!
//! This crate holds the record model and the record service for insurance
//! policies. It is infrastructure-agnostic: persistence is reached through
//! the [`InsurancePolicyPort`] trait, implemented by `infra_db` for
//! PostgreSQL and by [`ports::memory::InMemoryPolicyPort`] for tests and
//! local runs.
//!
//! # Record Lifecycle
//!
//! ```text
//! create (id, createdAt, updatedAt stamped)
//!    -> update* (all mutable fields replaced, updatedAt refreshed)
//!    -> delete (hard delete)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{PolicyService, PolicyDraft};
//! use domain_policy::ports::memory::InMemoryPolicyPort;
//!
//! let service = PolicyService::new(Arc::new(InMemoryPolicyPort::new()));
//! let created = service.create(draft).await?;
//! let found = service.get_by_id(created.id).await?;
//! ```

pub mod policy;
pub mod validation;
pub mod ports;
pub mod error;
pub mod services;

pub use policy::{InsurancePolicy, PolicyDraft, DEFAULT_STATUS, DESCRIPTION_MAX_LEN};
pub use ports::InsurancePolicyPort;
pub use error::PolicyError;
pub use services::PolicyService;
