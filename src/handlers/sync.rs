// src/handlers/sync.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::{Value, json};

use crate::{
    error::AppError,
    metrics,
    models::{
        calendar::{CALENDAR_COLUMNS, CalendarItem},
        post::{POST_COLUMNS, PostRecord},
    },
    state::AppState,
    webhook::{self, SyncPayload},
};

/// Accepts an arbitrary JSON payload and acknowledges receipt. Nothing is
/// persisted. When a webhook URL is configured, a snapshot of the current
/// data set is pushed to it in the background.
pub async fn accept_sync(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(_payload) = payload.map_err(|_| AppError::BadRequest("Invalid JSON".to_string()))?;

    if let Some(url) = &state.config.webhook_url {
        match snapshot(&state).await {
            Ok(snapshot) => {
                webhook::deliver_in_background(state.http.clone(), url.clone(), snapshot);
            }
            Err(e) => tracing::warn!("Skipping webhook push: {:?}", e),
        }
    }

    Ok(Json(json!({ "success": true, "message": "Data received" })))
}

async fn snapshot(state: &AppState) -> Result<SyncPayload, sqlx::Error> {
    let sql = format!("SELECT {POST_COLUMNS} FROM posts ORDER BY date DESC");
    let posts: Vec<PostRecord> = sqlx::query_as(&sql).fetch_all(&state.pool).await?;

    let sql = format!("SELECT {CALENDAR_COLUMNS} FROM calendar_items");
    let calendar: Vec<CalendarItem> = sqlx::query_as(&sql).fetch_all(&state.pool).await?;

    let summary = metrics::summary_stats(&posts);

    Ok(SyncPayload {
        posts,
        calendar,
        timestamp: Utc::now(),
        summary,
    })
}
