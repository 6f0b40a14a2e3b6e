//! Shared utilities and common types for the surveillance fixture backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Stable seed derivation (SHA-256 based)
//! - Query parameter parsing (comma lists, optional values, date/time bounds)

pub mod crypto;
pub mod params;
