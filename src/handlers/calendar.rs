// src/handlers/calendar.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::calendar::{
        CALENDAR_COLUMNS, CalendarItem, CreateCalendarItemRequest, UpdateCalendarItemRequest,
        UpdateStatusRequest,
    },
};

/// Lists all calendar items in planning order: Monday through Sunday, then
/// by the time label within a day.
pub async fn list_items(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let sql = format!("SELECT {CALENDAR_COLUMNS} FROM calendar_items");
    let mut items = sqlx::query_as::<_, CalendarItem>(&sql)
        .fetch_all(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list calendar items: {:?}", e);
            AppError::Internal("Failed to fetch calendar items".to_string())
        })?;

    items.sort_by(|a, b| {
        a.day
            .ordinal()
            .cmp(&b.day.ordinal())
            .then_with(|| a.time.cmp(&b.time))
    });

    Ok(Json(items))
}

/// Creates a calendar item. The id is caller-supplied or generated as
/// `{day}-{timestamp}`.
pub async fn create_item(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreateCalendarItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let id = payload
        .id
        .unwrap_or_else(|| format!("{}-{}", payload.day, Utc::now().timestamp_millis()));

    let item = CalendarItem {
        id,
        day: payload.day,
        time: payload.time,
        title: payload.title,
        content_type: payload.content_type,
        platforms: sqlx::types::Json(payload.platforms),
        priority: payload.priority,
        status: payload.status,
        theme: payload.theme,
        notes: payload.notes,
    };

    sqlx::query(
        r#"
        INSERT INTO calendar_items
            (id, day, time, title, content_type, platforms, priority, status, theme, notes)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&item.id)
    .bind(item.day)
    .bind(&item.time)
    .bind(&item.title)
    .bind(&item.content_type)
    .bind(&item.platforms)
    .bind(item.priority)
    .bind(item.status)
    .bind(&item.theme)
    .bind(&item.notes)
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create calendar item: {:?}", e);
        AppError::Internal("Failed to create calendar item".to_string())
    })?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Full update of a calendar item.
///
/// An unknown id is a no-op that still succeeds.
pub async fn update_item(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCalendarItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let item = CalendarItem {
        id,
        day: payload.day,
        time: payload.time,
        title: payload.title,
        content_type: payload.content_type,
        platforms: sqlx::types::Json(payload.platforms),
        priority: payload.priority,
        status: payload.status,
        theme: payload.theme,
        notes: payload.notes,
    };

    sqlx::query(
        r#"
        UPDATE calendar_items SET
            day = ?, time = ?, title = ?, content_type = ?, platforms = ?,
            priority = ?, status = ?, theme = ?, notes = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(item.day)
    .bind(&item.time)
    .bind(&item.title)
    .bind(&item.content_type)
    .bind(&item.platforms)
    .bind(item.priority)
    .bind(item.status)
    .bind(&item.theme)
    .bind(&item.notes)
    .bind(&item.id)
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update calendar item {}: {:?}", item.id, e);
        AppError::Internal("Failed to update calendar item".to_string())
    })?;

    Ok(Json(item))
}

/// Deletes a calendar item. Linked post records are not touched.
pub async fn delete_item(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query("DELETE FROM calendar_items WHERE id = ?")
        .bind(&id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete calendar item {}: {:?}", id, e);
            AppError::Internal("Failed to delete calendar item".to_string())
        })?;

    Ok(Json(json!({ "success": true })))
}

/// Status-only patch. Any valid status value is applied directly; the
/// planned to posted to analyzed progression is not enforced here.
pub async fn update_status(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    sqlx::query("UPDATE calendar_items SET status = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?")
        .bind(payload.status)
        .bind(&id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update status of {}: {:?}", id, e);
            AppError::Internal("Failed to update status".to_string())
        })?;

    Ok(Json(json!({ "success": true, "status": payload.status })))
}
