//! Port adapters over the repositories
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresPolicyAdapter;
//! use domain_policy::InsurancePolicyPort;
//!
//! let adapter = PostgresPolicyAdapter::new(pool);
//! let policy = adapter.find_by_id(policy_id).await?;
//! ```

pub mod policy;

pub use policy::PostgresPolicyAdapter;
