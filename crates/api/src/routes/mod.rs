//! HTTP route handlers.

pub mod analytics;
pub mod audit;
pub mod bookmarks;
pub mod cameras;
pub mod dashboard;
pub mod health;
pub mod index;

use domain::services::TimeWindow;

use crate::extractors::FieldSet;

/// Date range from `StartDate`/`StartTime`/`EndDate`/`EndTime`.
///
/// Returns `None` unless `enabled`, so the parameters are accepted but ignored
/// by default.
pub(crate) fn date_window(fields: &FieldSet, enabled: bool) -> Option<TimeWindow> {
    if !enabled {
        return None;
    }
    TimeWindow::from_params(
        fields.text("StartDate"),
        fields.text("StartTime"),
        fields.text("EndDate"),
        fields.text("EndTime"),
    )
}
