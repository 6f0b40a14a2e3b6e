//! Fixture store metrics collection.
//!
//! Provides functions for recording store mutation and search metrics.

use metrics::{counter, gauge, histogram};
use std::time::Instant;

/// Record the outcome of a store mutation.
///
/// `operation` is one of `device_activation`, `counter_reset`,
/// `bookmark_insert` or `bookmark_delete`.
pub fn record_mutation(operation: &'static str, outcome: &'static str) {
    counter!(
        "fixture_store_mutations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}

/// Record the current size of a collection.
pub fn record_collection_size(collection: &'static str, size: usize) {
    gauge!("fixture_store_records", "collection" => collection).set(size as f64);
}

/// Record search duration.
pub fn record_search_duration(collection: &str, duration_secs: f64) {
    histogram!(
        "fixture_search_duration_seconds",
        "collection" => collection.to_string()
    )
    .record(duration_secs);
}

/// A helper to time searches and record metrics.
///
/// Usage:
/// ```ignore
/// let timer = SearchTimer::new("events");
/// let found = query.apply(&events);
/// timer.record();
/// ```
pub struct SearchTimer {
    collection: String,
    start: Instant,
}

impl SearchTimer {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_search_duration(&self.collection, duration);
    }
}
