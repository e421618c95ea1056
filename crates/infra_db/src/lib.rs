//! Infrastructure Database Layer
//!
//! This crate provides PostgreSQL persistence for insurance policy records
//! using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: `InsuranceRepository` owns the
//! SQL and row mapping for the `insurances` table, and
//! `PostgresPolicyAdapter` exposes it to the domain through the
//! `InsurancePolicyPort` trait.
//!
//! Policy number uniqueness is a table constraint. A violating insert or
//! update surfaces as `DatabaseError::DuplicateEntry`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, adapters::PostgresPolicyAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/insurance")).await?;
//! let adapter = PostgresPolicyAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
