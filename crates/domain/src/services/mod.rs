//! Domain services for the surveillance fixture API.
//!
//! Services contain the decision logic that operates on domain models:
//! classification, layout, filtering and synthesis.

pub mod classifier;
pub mod layout;
pub mod query;
pub mod synthesizer;

pub use classifier::{classify, Category, Classification, Site};
pub use layout::{LayoutGenerator, Placement};
pub use query::{Query, TagSet, TextField, TimeField, TimeWindow};
pub use synthesizer::{
    simulate_system_status, synthesize_audit_logs, synthesize_chart, synthesize_events, uuid_from,
};
