use super::*;
use crate::content::ContentType;
use crate::id::ContentId;
use crate::record::Flag;

fn record(id: &str, unique_id: &str) -> NormalizedRecord {
    NormalizedRecord {
        unique_id: unique_id.to_string(),
        id: ContentId::new(id),
        content_type: ContentType::Dashboard,
        content_name: Some(format!("Dashboard {}", id)),
        url: format!("https://x.io/dashboards/{}", id),
        element: None,
        is_filter: Flag::No,
        has_alert: Flag::No,
        is_scheduled: Flag::No,
        folder_name: None,
        folder_url: "https://x.io/folders/1".to_string(),
        parent_folder_name: None,
        parent_folder_url: None,
        error_message: None,
        error_model: None,
        error_explore: None,
    }
}

fn ids(records: &[NormalizedRecord]) -> Vec<&str> {
    records.iter().map(|r| r.unique_id.as_str()).collect()
}

#[test]
fn test_diff_of_identical_snapshots_is_empty() {
    let a = vec![record("1", "h1"), record("2", "h2")];
    assert!(diff_snapshots(&a, &a).is_empty());
}

#[test]
fn test_diff_against_empty_baseline_returns_candidate() {
    let b = vec![record("3", "h3"), record("1", "h1")];
    assert_eq!(diff_snapshots(&[], &b), b);
}

#[test]
fn test_diff_keeps_candidate_order() {
    let a = vec![record("2", "h2")];
    let b = vec![
        record("5", "h5"),
        record("2", "h2"),
        record("1", "h1"),
        record("4", "h4"),
    ];
    assert_eq!(ids(&diff_snapshots(&a, &b)), vec!["h5", "h1", "h4"]);
}

#[test]
fn test_diff_compares_fingerprints_not_content_ids() {
    // Same dashboard, new breakage: a different fingerprint is a new record.
    let a = vec![record("1", "h1")];
    let b = vec![record("1", "h1-changed")];
    assert_eq!(ids(&diff_snapshots(&a, &b)), vec!["h1-changed"]);
}

#[test]
fn test_fixed_content_is_not_reported() {
    let a = vec![record("1", "h1"), record("2", "h2")];
    let b = vec![record("2", "h2")];
    assert!(diff_snapshots(&a, &b).is_empty());
}

#[test]
fn test_duplicate_candidates_are_all_kept() {
    let b = vec![record("1", "h1"), record("1", "h1")];
    assert_eq!(diff_snapshots(&[], &b).len(), 2);
}
