// src/metrics.rs

//! Pure engagement-rate and aggregation computations over post records.
//!
//! Everything here is side-effect free; the handlers fetch rows and feed
//! them through these functions.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{analytics::SummaryStats, post::PostRecord};

/// Engagement rate for a single record, as a percentage rounded to two
/// decimal places. Zero views yields 0 regardless of the other counters.
pub fn engagement_rate(views: i64, likes: i64, comments: i64, shares: i64) -> f64 {
    if views <= 0 {
        return 0.0;
    }
    round2((likes + comments + shares) as f64 / views as f64 * 100.0)
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Aggregate totals for a collection of records.
///
/// The average is taken over the stored per-record rates, skipping records
/// with a zero rate, and is 0 when no record qualifies.
pub fn summary_stats(records: &[PostRecord]) -> SummaryStats {
    let total_views = records.iter().map(|r| r.views).sum();
    let total_engagement = records
        .iter()
        .map(|r| r.likes + r.comments + r.shares)
        .sum();

    let rated: Vec<f64> = records
        .iter()
        .map(|r| r.engagement_rate)
        .filter(|rate| *rate > 0.0)
        .collect();
    let avg_engagement_rate = if rated.is_empty() {
        0.0
    } else {
        round2(rated.iter().sum::<f64>() / rated.len() as f64)
    };

    SummaryStats {
        total_posts: records.len() as i64,
        total_views,
        total_engagement,
        avg_engagement_rate,
    }
}

/// One aggregated group produced by [`group_by`].
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRow<K> {
    pub key: K,
    pub count: i64,
    pub views: i64,

    /// Sum of likes + comments + shares within the group.
    pub engagement: i64,

    /// Mean of the per-record stored rates in the group, two decimals.
    pub avg_engagement_rate: f64,
}

/// Groups records by a key and accumulates per-group totals.
///
/// Rows are ordered by descending count; ties keep the order in which the
/// keys were first encountered.
pub fn group_by<K, F>(records: &[PostRecord], key_fn: F) -> Vec<GroupRow<K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&PostRecord) -> K,
{
    struct Acc {
        count: i64,
        views: i64,
        engagement: i64,
        rate_total: f64,
    }

    let mut order: Vec<K> = Vec::new();
    let mut groups: HashMap<K, Acc> = HashMap::new();

    for record in records {
        let key = key_fn(record);
        let acc = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            Acc {
                count: 0,
                views: 0,
                engagement: 0,
                rate_total: 0.0,
            }
        });
        acc.count += 1;
        acc.views += record.views;
        acc.engagement += record.likes + record.comments + record.shares;
        acc.rate_total += record.engagement_rate;
    }

    let mut rows: Vec<GroupRow<K>> = order
        .into_iter()
        .map(|key| {
            let acc = &groups[&key];
            GroupRow {
                count: acc.count,
                views: acc.views,
                engagement: acc.engagement,
                avg_engagement_rate: round2(acc.rate_total / acc.count as f64),
                key,
            }
        })
        .collect();

    // Stable sort keeps first-encountered order within equal counts.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}
