// src/models/analytics.rs

use serde::Serialize;

use super::post::Platform;

/// Aggregate totals across a collection of post records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_posts: i64,
    pub total_views: i64,

    /// Sum of likes + comments + shares.
    pub total_engagement: i64,

    /// Mean of per-record engagement rates, over records with a rate > 0.
    pub avg_engagement_rate: f64,
}

/// One row of the per-platform breakdown, ordered by post count.
#[derive(Debug, Serialize)]
pub struct PlatformBreakdown {
    pub platform: Platform,
    pub posts: i64,
    pub views: i64,
    pub engagement: i64,
}

/// One row of the per-content-type breakdown.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeBreakdown {
    /// Chart label, truncated to 15 characters with an ellipsis.
    #[serde(rename = "type")]
    pub label: String,

    /// The untruncated content type.
    pub full_type: String,

    pub posts: i64,
    pub avg_engagement: f64,
}
