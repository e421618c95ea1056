//! Core Kernel - Foundational types shared by every layer of the records service
//!
//! This crate provides the building blocks used across the workspace:
//! - Strongly-typed record identifiers
//! - Port error and health-check types for the ports and adapters seam
//! - Calendar date and timestamp handling

pub mod identifiers;
pub mod ports;
pub mod temporal;

pub use identifiers::PolicyId;
pub use ports::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
pub use temporal::{format_date, format_timestamp, advance_past, now_micros};
