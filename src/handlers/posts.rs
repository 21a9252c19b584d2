// src/handlers/posts.rs

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde_json::json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use validator::Validate;

use crate::{
    error::AppError,
    metrics,
    models::{
        calendar::Status,
        post::{
            CreatePostRequest, POST_COLUMNS, PostListParams, PostRecord, UpdatePostRequest,
            WeekFilter,
        },
    },
};

/// Lists post records, optionally filtered by platform, week window and
/// free-text search. Newest first.
pub async fn list_posts(
    State(pool): State<SqlitePool>,
    Query(params): Query<PostListParams>,
) -> Result<impl IntoResponse, AppError> {
    let mut query =
        QueryBuilder::<Sqlite>::new(format!("SELECT {POST_COLUMNS} FROM posts WHERE 1=1"));

    if let Some(platform) = params.platform.filter(|p| p != "all") {
        query.push(" AND platform = ").push_bind(platform);
    }

    if let Some(search) = params.search.filter(|s| !s.is_empty()) {
        // SQLite LIKE is already case-insensitive for ASCII.
        let pattern = format!("%{}%", search);
        query
            .push(" AND (title LIKE ")
            .push_bind(pattern.clone())
            .push(" OR content_type LIKE ")
            .push_bind(pattern)
            .push(")");
    }

    match params.week {
        Some(WeekFilter::Current) => {
            query.push(" AND date >= ").push_bind(current_week_start());
        }
        Some(WeekFilter::Last) => {
            let start = current_week_start();
            query
                .push(" AND date >= ")
                .push_bind(start - Duration::days(7))
                .push(" AND date < ")
                .push_bind(start);
        }
        Some(WeekFilter::All) | None => {}
    }

    query.push(" ORDER BY date DESC");

    let posts: Vec<PostRecord> = query
        .build_query_as()
        .fetch_all(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list posts: {:?}", e);
            AppError::Internal("Failed to fetch posts".to_string())
        })?;

    Ok(Json(posts))
}

/// Creates a post record.
///
/// The engagement rate is always recomputed from the submitted counters.
/// When the post is linked to a calendar item, that item is moved to
/// `analyzed`; the link update is a separate statement and its failure
/// never rolls back the insert.
pub async fn create_post(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let engagement_rate =
        metrics::engagement_rate(payload.views, payload.likes, payload.comments, payload.shares);

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO posts
            (date, platform, content_type, title, url, views, likes, comments, shares, clicks,
             notes, calendar_item_id, engagement_rate)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(payload.date)
    .bind(payload.platform)
    .bind(&payload.content_type)
    .bind(&payload.title)
    .bind(&payload.url)
    .bind(payload.views)
    .bind(payload.likes)
    .bind(payload.comments)
    .bind(payload.shares)
    .bind(payload.clicks)
    .bind(&payload.notes)
    .bind(&payload.calendar_item_id)
    .bind(engagement_rate)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create post: {:?}", e);
        AppError::Internal("Failed to create post".to_string())
    })?;

    // Best-effort link update: a failure or a missing item leaves the
    // insert in place.
    if let Some(item_id) = &payload.calendar_item_id {
        let updated = sqlx::query(
            "UPDATE calendar_items SET status = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(Status::Analyzed)
        .bind(item_id)
        .execute(&pool)
        .await;

        if let Err(e) = updated {
            tracing::warn!("Failed to mark calendar item {} analyzed: {:?}", item_id, e);
        }
    }

    let record = PostRecord {
        id,
        date: payload.date,
        platform: payload.platform,
        content_type: payload.content_type,
        title: payload.title,
        url: payload.url,
        views: payload.views,
        likes: payload.likes,
        comments: payload.comments,
        shares: payload.shares,
        clicks: payload.clicks,
        notes: payload.notes,
        calendar_item_id: payload.calendar_item_id,
        engagement_rate,
    };

    Ok((StatusCode::CREATED, Json(record)))
}

/// Full update of a post record, recomputing the engagement rate.
///
/// An unknown id is a no-op that still succeeds; the store does not
/// distinguish zero affected rows.
pub async fn update_post(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let engagement_rate =
        metrics::engagement_rate(payload.views, payload.likes, payload.comments, payload.shares);

    sqlx::query(
        r#"
        UPDATE posts SET
            date = ?, platform = ?, content_type = ?, title = ?, url = ?,
            views = ?, likes = ?, comments = ?, shares = ?, clicks = ?,
            notes = ?, engagement_rate = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(payload.date)
    .bind(payload.platform)
    .bind(&payload.content_type)
    .bind(&payload.title)
    .bind(&payload.url)
    .bind(payload.views)
    .bind(payload.likes)
    .bind(payload.comments)
    .bind(payload.shares)
    .bind(payload.clicks)
    .bind(&payload.notes)
    .bind(engagement_rate)
    .bind(id)
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update post {}: {:?}", id, e);
        AppError::Internal("Failed to update post".to_string())
    })?;

    let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?");
    let stored = sqlx::query_as::<_, PostRecord>(&sql)
        .bind(id)
        .fetch_optional(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to re-read post {}: {:?}", id, e);
            AppError::Internal("Failed to update post".to_string())
        })?;

    // Unknown ids fall through as a no-op; the caller still gets an echo.
    let record = match stored {
        Some(record) => record,
        None => PostRecord {
            id,
            date: payload.date,
            platform: payload.platform,
            content_type: payload.content_type,
            title: payload.title,
            url: payload.url,
            views: payload.views,
            likes: payload.likes,
            comments: payload.comments,
            shares: payload.shares,
            clicks: payload.clicks,
            notes: payload.notes,
            calendar_item_id: None,
            engagement_rate,
        },
    };

    Ok(Json(record))
}

/// Deletes a post record. The linked calendar item, if any, keeps its
/// status.
pub async fn delete_post(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete post {}: {:?}", id, e);
            AppError::Internal("Failed to delete post".to_string())
        })?;

    Ok(Json(json!({ "success": true })))
}

/// Start of the current week window (Sunday) in UTC.
fn current_week_start() -> NaiveDate {
    let today = Utc::now().date_naive();
    today - Duration::days(today.weekday().num_days_from_sunday() as i64)
}
