//! Bookmark domain models.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::params::{combine_date_time, DayBound};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

/// Color tag attached to a bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkColor {
    Red,
    Orange,
    Yellow,
    Green,
    #[default]
    Blue,
    Purple,
    Gray,
}

impl BookmarkColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookmarkColor::Red => "red",
            BookmarkColor::Orange => "orange",
            BookmarkColor::Yellow => "yellow",
            BookmarkColor::Green => "green",
            BookmarkColor::Blue => "blue",
            BookmarkColor::Purple => "purple",
            BookmarkColor::Gray => "gray",
        }
    }
}

impl FromStr for BookmarkColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(BookmarkColor::Red),
            "orange" => Ok(BookmarkColor::Orange),
            "yellow" => Ok(BookmarkColor::Yellow),
            "green" => Ok(BookmarkColor::Green),
            "blue" => Ok(BookmarkColor::Blue),
            "purple" => Ok(BookmarkColor::Purple),
            "gray" => Ok(BookmarkColor::Gray),
            _ => Err(DomainError::unknown("bookmark color", s)),
        }
    }
}

impl fmt::Display for BookmarkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A saved video bookmark spanning one or more cameras.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: Uuid,
    pub title: String,
    pub color: BookmarkColor,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub cameras: Vec<String>,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn from_new(new: NewBookmark, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            color: new.color,
            start_date: new.start_date,
            start_time: new.start_time,
            end_date: new.end_date,
            end_time: new.end_time,
            cameras: new.cameras,
            remarks: new.remarks,
            created_at,
        }
    }

    /// Start of the bookmarked span, if the start date parses.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        combine_date_time(
            self.start_date.as_deref(),
            self.start_time.as_deref(),
            DayBound::Start,
        )
    }
}

/// Fields supplied when creating a bookmark.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBookmark {
    pub title: String,
    pub color: BookmarkColor,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub cameras: Vec<String>,
    pub remarks: Option<String>,
}
