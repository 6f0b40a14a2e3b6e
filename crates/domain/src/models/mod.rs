//! Domain models for the surveillance fixture API.

pub mod analytics;
pub mod audit_log;
pub mod bookmark;
pub mod dashboard;
pub mod device;
pub mod event;
pub mod group;

pub use analytics::{AnalyticsConfiguration, AnalyticsStatus, Counter};
pub use audit_log::{AuditCategory, AuditLogEntry};
pub use bookmark::{Bookmark, BookmarkColor, NewBookmark};
pub use dashboard::{ChartPoint, DashboardStats, ServerStatus, SystemStatus};
pub use device::{ActivationAction, Device, DeviceSeed, DeviceStatus};
pub use event::{Event, EventType};
pub use group::Group;
