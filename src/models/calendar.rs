// src/models/calendar.rs

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

use super::post::Platform;

/// Day slots on the weekly planning grid.
///
/// Declaration order is the planning order (Monday first), which is what
/// the calendar listing sorts by. Never sort these lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Position within the planning week, Monday = 0.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// Lifecycle of a calendar item: planned, then posted, then analyzed.
///
/// The progression is not enforced; any value can be set directly through
/// the status patch endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Planned,
    Posted,
    Analyzed,
}

/// Column list matching the [`CalendarItem`] fields, for runtime `query_as`.
pub const CALENDAR_COLUMNS: &str =
    "id, day, time, title, content_type, platforms, priority, status, theme, notes";

/// Represents the 'calendar_items' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarItem {
    pub id: String,
    pub day: Day,

    /// Free-text schedule label (e.g. "09:00" or "morning").
    pub time: String,

    pub title: String,
    pub content_type: String,

    /// Target platforms.
    /// Stored as a JSON array in the database.
    /// `sqlx::types::Json` handles automatic serialization/deserialization.
    pub platforms: Json<Vec<Platform>>,

    pub priority: Priority,
    pub status: Status,

    pub theme: Option<String>,
    pub notes: Option<String>,
}

/// DTO for creating a new calendar item.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarItemRequest {
    /// Caller-supplied id; generated as `{day}-{timestamp}` when absent.
    pub id: Option<String>,

    pub day: Day,
    pub time: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Title length must be between 1 and 200 chars"
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Content type length must be between 1 and 100 chars"
    ))]
    pub content_type: String,

    pub platforms: Vec<Platform>,

    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,

    pub theme: Option<String>,
    pub notes: Option<String>,
}

/// DTO for a full calendar item update.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCalendarItemRequest {
    pub day: Day,
    pub time: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Title length must be between 1 and 200 chars"
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Content type length must be between 1 and 100 chars"
    ))]
    pub content_type: String,

    pub platforms: Vec<Platform>,
    pub priority: Priority,
    pub status: Status,

    pub theme: Option<String>,
    pub notes: Option<String>,
}

/// DTO for the status-only patch.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Status,
}
