// src/handlers/analytics.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    metrics,
    models::{
        analytics::{ContentTypeBreakdown, PlatformBreakdown},
        post::{POST_COLUMNS, PostRecord},
    },
};

async fn fetch_all_posts(
    pool: &SqlitePool,
    context: &'static str,
) -> Result<Vec<PostRecord>, AppError> {
    let sql = format!("SELECT {POST_COLUMNS} FROM posts");
    sqlx::query_as::<_, PostRecord>(&sql)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            tracing::error!("{}: {:?}", context, e);
            AppError::Internal(context.to_string())
        })
}

/// Dashboard totals across all recorded posts.
pub async fn summary(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let posts = fetch_all_posts(&pool, "Failed to fetch summary").await?;
    Ok(Json(metrics::summary_stats(&posts)))
}

/// Per-platform post counts and totals, busiest platform first. Platforms
/// with no recorded posts do not appear.
pub async fn platform_breakdown(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let posts = fetch_all_posts(&pool, "Failed to fetch platform data").await?;

    let rows: Vec<PlatformBreakdown> = metrics::group_by(&posts, |p| p.platform)
        .into_iter()
        .map(|g| PlatformBreakdown {
            platform: g.key,
            posts: g.count,
            views: g.views,
            engagement: g.engagement,
        })
        .collect();

    Ok(Json(rows))
}

/// Per-content-type post counts and average engagement rate. Types with no
/// recorded posts are omitted.
pub async fn content_breakdown(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let posts = fetch_all_posts(&pool, "Failed to fetch content data").await?;

    let rows: Vec<ContentTypeBreakdown> = metrics::group_by(&posts, |p| p.content_type.clone())
        .into_iter()
        .map(|g| ContentTypeBreakdown {
            label: truncate_label(&g.key),
            full_type: g.key,
            posts: g.count,
            avg_engagement: g.avg_engagement_rate,
        })
        .collect();

    Ok(Json(rows))
}

/// Chart labels are capped at 15 characters; the full value is returned
/// alongside in `fullType`.
fn truncate_label(value: &str) -> String {
    if value.chars().count() > 15 {
        let mut label: String = value.chars().take(15).collect();
        label.push_str("...");
        label
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_pass_through() {
        assert_eq!(truncate_label("Quote Card"), "Quote Card");
    }

    #[test]
    fn long_labels_are_truncated_with_ellipsis() {
        assert_eq!(truncate_label("Implementation Tips"), "Implementation ...");
    }
}
