//! Usage enrichment: left-join dashboard run counts onto new broken content.

use crate::id::ContentId;
use crate::record::NormalizedRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Run statistics for one dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub dashboard_id: ContentId,
    pub run_count: Option<u64>,
    pub last_run_date: Option<String>,
}

/// Run count column of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunCount {
    /// Number of dashboard runs (0 when never run)
    Runs(u64),
    /// Looks are not covered by the dashboard usage query
    NotApplicableLook,
}

impl fmt::Display for RunCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunCount::Runs(n) => write!(f, "{}", n),
            RunCount::NotApplicableLook => f.write_str("NA - Look"),
        }
    }
}

/// A new broken content record with its usage statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: NormalizedRecord,
    pub run_count: RunCount,
    pub last_run_date: Option<String>,
}

/// Ids of the dashboard records in a diff, in diff order.
pub fn dashboard_ids(diff: &[NormalizedRecord]) -> Vec<ContentId> {
    diff.iter()
        .filter(|r| r.is_dashboard())
        .map(|r| r.id.clone())
        .collect()
}

/// Left-join `usage` onto `diff` by dashboard id.
///
/// Looks always get [`RunCount::NotApplicableLook`]. Dashboards without a
/// matching usage row, or whose row has no run count, get zero runs. When the
/// usage rows contain an id twice the first row wins.
pub fn enrich(diff: Vec<NormalizedRecord>, usage: &[UsageRecord]) -> Vec<EnrichedRecord> {
    let mut by_dashboard: HashMap<&str, &UsageRecord> = HashMap::with_capacity(usage.len());
    for row in usage {
        by_dashboard.entry(row.dashboard_id.as_str()).or_insert(row);
    }

    diff.into_iter()
        .map(|record| {
            if !record.is_dashboard() {
                return EnrichedRecord {
                    record,
                    run_count: RunCount::NotApplicableLook,
                    last_run_date: None,
                };
            }

            let matched = by_dashboard.get(record.id.as_str());
            if matched.is_none() {
                log::debug!("No usage row for dashboard {}", record.id);
            }
            EnrichedRecord {
                run_count: RunCount::Runs(matched.and_then(|u| u.run_count).unwrap_or(0)),
                last_run_date: matched.and_then(|u| u.last_run_date.clone()),
                record,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "usage_test.rs"]
mod tests;
