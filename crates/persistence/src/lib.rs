//! Persistence layer for the surveillance fixture API.
//!
//! This crate contains:
//! - Bundled seed datasets
//! - The in-memory fixture store and its search criteria
//! - Store metrics

pub mod error;
pub mod fixtures;
pub mod metrics;
pub mod search;
pub mod store;

pub use error::StoreError;
pub use fixtures::{Dataset, DatasetKind, SeedOptions};
pub use search::{AuditSearch, BookmarkSearch, EventSearch};
pub use store::{FixtureStore, SharedStore};
