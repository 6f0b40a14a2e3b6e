//! Custom extractors for request handling.

pub mod field_set;

pub use field_set::FieldSet;
