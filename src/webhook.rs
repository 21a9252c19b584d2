// src/webhook.rs

//! Outbound sync push for external spreadsheet integrations.
//!
//! Delivery is fire-and-forget: it runs on a detached task, is never
//! retried, and a failure only produces a warning log.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{analytics::SummaryStats, calendar::CalendarItem, post::PostRecord};

/// Snapshot pushed to the configured webhook URL.
#[derive(Debug, Serialize)]
pub struct SyncPayload {
    pub posts: Vec<PostRecord>,
    pub calendar: Vec<CalendarItem>,
    pub timestamp: DateTime<Utc>,
    pub summary: SummaryStats,
}

/// POSTs the payload as JSON to `url` on a background task.
///
/// The caller is never blocked and never sees a delivery failure.
pub fn deliver_in_background(client: reqwest::Client, url: String, payload: SyncPayload) {
    tokio::spawn(async move {
        match deliver(&client, &url, &payload).await {
            Ok(()) => tracing::debug!("Webhook sync delivered to {}", url),
            Err(e) => tracing::warn!("Webhook sync to {} failed: {}", url, e),
        }
    });
}

async fn deliver(
    client: &reqwest::Client,
    url: &str,
    payload: &SyncPayload,
) -> Result<(), reqwest::Error> {
    client
        .post(url)
        .json(payload)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
