//! Multi-criteria filtering over in-memory collections.
//!
//! A [`Query`] is a conjunction of optional predicates. A predicate built from
//! an absent or blank parameter is never added, so it cannot eliminate records.
//! [`Query::apply`] keeps the relative order of its input.

use chrono::NaiveDateTime;
use shared::params::{combine_date_time, non_empty, split_list, DayBound};
use std::collections::HashSet;

/// Accessor for an optional text field of a record.
pub type TextField<T> = fn(&T) -> Option<&str>;

/// Accessor for an optional timestamp of a record.
pub type TimeField<T> = fn(&T) -> Option<NaiveDateTime>;

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + Send + Sync + 'a>;

/// Normalized set of tags parsed from a comma-delimited parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet(HashSet<String>);

impl TagSet {
    /// Parses `red, blue,,` into `{red, blue}`.
    ///
    /// Returns `None` when no non-empty tag remains.
    pub fn parse(value: Option<&str>) -> Option<Self> {
        let tags: HashSet<String> = split_list(non_empty(value)?)
            .into_iter()
            .map(|t| t.to_lowercase())
            .collect();
        if tags.is_empty() {
            None
        } else {
            Some(Self(tags))
        }
    }

    pub fn from_values<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags: HashSet<String> = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();
        if tags.is_empty() {
            None
        } else {
            Some(Self(tags))
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(&tag.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Inclusive time range. Either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl TimeWindow {
    /// Builds a window from platform date/time parameters.
    ///
    /// A date-only start covers the whole first day, a date-only end covers the
    /// whole last day. Returns `None` if neither date parses.
    pub fn from_params(
        start_date: Option<&str>,
        start_time: Option<&str>,
        end_date: Option<&str>,
        end_time: Option<&str>,
    ) -> Option<Self> {
        let start = combine_date_time(start_date, start_time, DayBound::Start);
        let end = combine_date_time(end_date, end_time, DayBound::End);
        if start.is_none() && end.is_none() {
            return None;
        }
        Some(Self { start, end })
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start.map_or(true, |s| at >= s) && self.end.map_or(true, |e| at <= e)
    }
}

/// Conjunction of optional predicates over records of type `T`.
pub struct Query<'a, T> {
    predicates: Vec<Predicate<'a, T>>,
}

impl<'a, T: 'a> Default for Query<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: 'a> Query<'a, T> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Number of active predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    fn push(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Field value must be one of `values`. Exact, case-sensitive.
    pub fn member_of(self, field: TextField<T>, values: Option<Vec<String>>) -> Self {
        let set: HashSet<String> = values.unwrap_or_default().into_iter().collect();
        if set.is_empty() {
            return self;
        }
        self.push(move |item| field(item).is_some_and(|v| set.contains(v)))
    }

    /// Field value must equal `value` exactly.
    pub fn equals(self, field: TextField<T>, value: Option<&str>) -> Self {
        let Some(value) = non_empty(value).map(str::to_string) else {
            return self;
        };
        self.push(move |item| field(item) == Some(value.as_str()))
    }

    /// Any of `fields` must contain `keyword`, ignoring case.
    pub fn keyword(self, fields: &[TextField<T>], keyword: Option<&str>) -> Self {
        let Some(needle) = non_empty(keyword).map(str::to_lowercase) else {
            return self;
        };
        let fields = fields.to_vec();
        self.push(move |item| {
            fields
                .iter()
                .filter_map(|field| field(item))
                .any(|text| text.to_lowercase().contains(&needle))
        })
    }

    /// Field value must be in the tag set.
    pub fn tagged(self, field: TextField<T>, tags: Option<TagSet>) -> Self {
        let Some(tags) = tags else {
            return self;
        };
        self.push(move |item| field(item).is_some_and(|v| tags.contains(v)))
    }

    /// Timestamp must fall inside the window. Records without one are excluded.
    pub fn within(self, field: TimeField<T>, window: Option<TimeWindow>) -> Self {
        let Some(window) = window else {
            return self;
        };
        self.push(move |item| field(item).is_some_and(|at| window.contains(at)))
    }

    pub fn matches(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p(item))
    }

    /// Returns the matching records in input order.
    pub fn apply(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        name: &'static str,
        title: &'static str,
        remarks: Option<&'static str>,
        color: &'static str,
        at: Option<NaiveDateTime>,
    }

    fn name(n: &Note) -> Option<&str> {
        Some(n.name)
    }
    fn title(n: &Note) -> Option<&str> {
        Some(n.title)
    }
    fn remarks(n: &Note) -> Option<&str> {
        n.remarks
    }
    fn color(n: &Note) -> Option<&str> {
        Some(n.color)
    }
    fn at(n: &Note) -> Option<NaiveDateTime> {
        n.at
    }

    const TEXT: &[TextField<Note>] = &[title, remarks];

    fn ts(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn notes() -> Vec<Note> {
        vec![
            Note {
                name: "a",
                title: "Suspicious Activity - Main Entrance",
                remarks: Some("Person loitering"),
                color: "red",
                at: Some(ts(8, 14)),
            },
            Note {
                name: "b",
                title: "Vehicle Incident - Parking",
                remarks: None,
                color: "orange",
                at: Some(ts(7, 9)),
            },
            Note {
                name: "c",
                title: "Perimeter Check",
                remarks: Some("Morning patrol near the entrance gate"),
                color: "green",
                at: None,
            },
        ]
    }

    fn names(items: &[Note]) -> Vec<&'static str> {
        items.iter().map(|n| n.name).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let items = notes();
        let query = Query::<Note>::new();
        assert!(query.is_empty());
        assert_eq!(query.apply(&items), items);
    }

    #[test]
    fn test_blank_parameters_are_unconstrained() {
        let items = notes();
        let query = Query::<Note>::new()
            .keyword(TEXT, Some("   "))
            .keyword(TEXT, None)
            .equals(color, Some(""))
            .member_of(name, Some(vec![]))
            .member_of(name, None)
            .tagged(color, TagSet::parse(Some(",,")))
            .within(at, TimeWindow::from_params(None, Some("10:00"), None, None));
        assert!(query.is_empty());
        assert_eq!(query.apply(&items).len(), 3);
    }

    #[test]
    fn test_keyword_matches_any_field_case_insensitively() {
        let items = notes();
        let found = Query::<Note>::new().keyword(TEXT, Some("entrance")).apply(&items);
        assert_eq!(names(&found), vec!["a", "c"]);

        let found = Query::<Note>::new().keyword(TEXT, Some(" LOITERING ")).apply(&items);
        assert_eq!(names(&found), vec!["a"]);
    }

    #[test]
    fn test_member_of_is_exact() {
        let items = notes();
        let found = Query::<Note>::new()
            .member_of(name, Some(vec!["c".into(), "a".into(), "A".into()]))
            .apply(&items);
        assert_eq!(names(&found), vec!["a", "c"]);
    }

    #[test]
    fn test_equals_is_exact() {
        let items = notes();
        assert_eq!(Query::<Note>::new().equals(color, Some("red")).apply(&items).len(), 1);
        assert!(Query::<Note>::new().equals(color, Some("Red")).apply(&items).is_empty());
    }

    #[test]
    fn test_tag_set() {
        let tags = TagSet::parse(Some("Red, green,,")).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("red"));
        assert!(tags.contains("GREEN"));
        assert!(!tags.contains("blue"));

        let found = Query::<Note>::new().tagged(color, Some(tags)).apply(&notes());
        assert_eq!(names(&found), vec!["a", "c"]);
    }

    #[test]
    fn test_tag_set_from_values() {
        assert!(TagSet::from_values(Vec::<String>::new()).is_none());
        assert!(TagSet::from_values([" "]).is_none());
        assert!(TagSet::from_values(["blue"]).unwrap().contains("blue"));
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let items = notes();
        let found = Query::<Note>::new()
            .keyword(TEXT, Some("entrance"))
            .tagged(color, TagSet::parse(Some("green")))
            .apply(&items);
        assert_eq!(names(&found), vec!["c"]);
    }

    #[test]
    fn test_time_window_is_inclusive() {
        let window = TimeWindow::from_params(Some("2024-12-07"), Some("09:00"), Some("2024-12-08"), None)
            .unwrap();
        assert!(window.contains(ts(7, 9)));
        assert!(window.contains(ts(8, 23)));
        assert!(!window.contains(ts(7, 8)));
        assert!(!window.contains(ts(9, 0)));
    }

    #[test]
    fn test_within_excludes_records_without_timestamp() {
        let window = TimeWindow::from_params(Some("2024-12-01"), None, None, None);
        let found = Query::<Note>::new().within(at, window).apply(&notes());
        assert_eq!(names(&found), vec!["a", "b"]);
    }
}
