// src/models/post.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Social network targets. Serialized and stored by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum Platform {
    LinkedIn,
    Instagram,
    X,
    Facebook,
}

/// Column list matching the [`PostRecord`] fields, for runtime `query_as`.
pub const POST_COLUMNS: &str = "id, date, platform, content_type, title, url, views, likes, \
     comments, shares, clicks, notes, calendar_item_id, engagement_rate";

/// Represents the 'posts' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub platform: Platform,
    pub content_type: String,
    pub title: String,
    pub url: Option<String>,

    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub clicks: i64,

    pub notes: Option<String>,

    /// Weak reference to the calendar item this post was planned as.
    /// Lookup only; no referential integrity at the data layer.
    pub calendar_item_id: Option<String>,

    /// Derived percentage, recomputed on every create and update.
    pub engagement_rate: f64,
}

/// DTO for creating a new post record.
///
/// Counters default to 0 when absent. A client-submitted `engagementRate`
/// is ignored; the stored value is always recomputed from the counters.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub date: NaiveDate,
    pub platform: Platform,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Content type length must be between 1 and 100 chars"
    ))]
    pub content_type: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Title length must be between 1 and 200 chars"
    ))]
    pub title: String,

    pub url: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub views: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub likes: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub comments: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub shares: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub clicks: i64,

    pub notes: Option<String>,
    pub calendar_item_id: Option<String>,
}

/// DTO for a full post update.
///
/// The calendar link is set at creation and is not rewritten here.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub date: NaiveDate,
    pub platform: Platform,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Content type length must be between 1 and 100 chars"
    ))]
    pub content_type: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Title length must be between 1 and 200 chars"
    ))]
    pub title: String,

    pub url: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub views: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub likes: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub comments: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub shares: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub clicks: i64,

    pub notes: Option<String>,
}

/// Query parameters for listing posts.
#[derive(Debug, Deserialize)]
pub struct PostListParams {
    /// Platform name, or "all" for no filter.
    pub platform: Option<String>,

    /// Week window filter.
    pub week: Option<WeekFilter>,

    /// Case-insensitive substring matched against title and content type.
    pub search: Option<String>,
}

/// Week window for the post list: the week starts on Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekFilter {
    All,
    Current,
    Last,
}
