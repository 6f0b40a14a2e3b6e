//! Search criteria for the fixture collections.
//!
//! Each criteria struct holds already-parsed parameters and knows which record
//! fields they constrain. Leaving a field `None` leaves it unconstrained.

use chrono::NaiveDateTime;
use domain::models::{AuditLogEntry, Bookmark, Event};
use domain::services::{Query, TagSet, TimeWindow};

fn event_camera(e: &Event) -> Option<&str> {
    Some(e.camera.as_str())
}

fn event_type(e: &Event) -> Option<&str> {
    Some(e.event_type.as_str())
}

fn event_zone(e: &Event) -> Option<&str> {
    e.zone.as_deref()
}

fn event_object_class(e: &Event) -> Option<&str> {
    Some(e.object_class.as_str())
}

fn event_rule_name(e: &Event) -> Option<&str> {
    e.rule_name.as_deref()
}

fn event_time(e: &Event) -> Option<NaiveDateTime> {
    Some(e.timestamp.naive_utc())
}

fn audit_category(l: &AuditLogEntry) -> Option<&str> {
    Some(l.category.as_str())
}

fn audit_action(l: &AuditLogEntry) -> Option<&str> {
    Some(l.action.as_str())
}

fn audit_details(l: &AuditLogEntry) -> Option<&str> {
    Some(l.details.as_str())
}

fn audit_user(l: &AuditLogEntry) -> Option<&str> {
    l.user.as_deref()
}

fn audit_time(l: &AuditLogEntry) -> Option<NaiveDateTime> {
    Some(l.timestamp.naive_utc())
}

fn bookmark_title(b: &Bookmark) -> Option<&str> {
    Some(b.title.as_str())
}

fn bookmark_remarks(b: &Bookmark) -> Option<&str> {
    b.remarks.as_deref()
}

fn bookmark_color(b: &Bookmark) -> Option<&str> {
    Some(b.color.as_str())
}

fn bookmark_start(b: &Bookmark) -> Option<NaiveDateTime> {
    b.starts_at()
}

/// Analytics event search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSearch {
    pub cameras: Option<Vec<String>>,
    pub event_types: Option<Vec<String>>,
    pub zones: Option<Vec<String>>,
    pub object_classes: Option<Vec<String>>,
    pub rule_names: Option<Vec<String>>,
    pub window: Option<TimeWindow>,
}

impl EventSearch {
    pub fn query(&self) -> Query<'static, Event> {
        Query::new()
            .member_of(event_camera, self.cameras.clone())
            .member_of(event_type, self.event_types.clone())
            .member_of(event_zone, self.zones.clone())
            .member_of(event_object_class, self.object_classes.clone())
            .member_of(event_rule_name, self.rule_names.clone())
            .within(event_time, self.window)
    }
}

/// Audit log search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditSearch {
    pub category: Option<String>,
    /// Matched against action, details and user.
    pub keyword: Option<String>,
    pub window: Option<TimeWindow>,
}

impl AuditSearch {
    pub fn query(&self) -> Query<'static, AuditLogEntry> {
        Query::new()
            .equals(audit_category, self.category.as_deref())
            .keyword(
                &[audit_action, audit_details, audit_user],
                self.keyword.as_deref().map(str::trim),
            )
            .within(audit_time, self.window)
    }
}

/// Bookmark search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkSearch {
    /// Matched against title and remarks.
    pub keyword: Option<String>,
    pub colors: Option<TagSet>,
    /// Applied to the bookmark start.
    pub window: Option<TimeWindow>,
}

impl BookmarkSearch {
    pub fn query(&self) -> Query<'static, Bookmark> {
        Query::new()
            .keyword(
                &[bookmark_title, bookmark_remarks],
                self.keyword.as_deref().map(str::trim),
            )
            .tagged(bookmark_color, self.colors.clone())
            .within(bookmark_start, self.window)
    }
}
