//! Repository implementations for domain entities
//!
//! Repositories encapsulate SQL queries and map between database rows and
//! domain types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - Runtime-checked queries with explicit column lists
//! - One statement per operation; the store's transaction is the unit of work
//! - SQLx errors classified into `DatabaseError` variants

pub mod insurance;

pub use insurance::InsuranceRepository;
