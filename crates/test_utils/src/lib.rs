//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! insurance records test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for policy records
//! - `builders`: Builder for policy drafts with sensible defaults
//! - `database`: PostgreSQL container management for repository tests
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use generators::*;
