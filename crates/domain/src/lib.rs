//! Domain layer for the surveillance fixture backend.
//!
//! This crate contains:
//! - Domain models (Device, Group, Event, AuditLogEntry, Bookmark, analytics)
//! - Fixture services: identifier classification, deterministic layout,
//!   query filtering and record synthesis
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;

pub use error::DomainError;
