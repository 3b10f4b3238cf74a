//! Snapshot differ: broken content present in development but not production.

use crate::record::NormalizedRecord;
use std::collections::HashSet;

/// Return the candidate records whose fingerprint is absent from the baseline,
/// in the candidate's original order.
pub fn diff_snapshots(
    baseline: &[NormalizedRecord],
    candidate: &[NormalizedRecord],
) -> Vec<NormalizedRecord> {
    let known: HashSet<&str> = baseline.iter().map(|r| r.unique_id.as_str()).collect();

    candidate
        .iter()
        .filter(|r| !known.contains(r.unique_id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "diff_test.rs"]
mod tests;
