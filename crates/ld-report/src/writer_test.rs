use super::*;
use crate::row::RUN_COUNT_COLUMN;
use ld_core::{ContentId, ContentType, Flag, NormalizedRecord, RunCount};
use tempfile::tempdir;

fn enriched(id: &str, content_type: ContentType, run_count: RunCount) -> EnrichedRecord {
    EnrichedRecord {
        record: NormalizedRecord {
            unique_id: format!("hash-{}", id),
            id: ContentId::new(id),
            content_type,
            content_name: Some(format!("Content {}", id)),
            url: format!("https://x.io/{}/{}", content_type.url_segment(), id),
            element: None,
            is_filter: Flag::No,
            has_alert: Flag::No,
            is_scheduled: Flag::Yes,
            folder_name: Some("Marketing".to_string()),
            folder_url: "https://x.io/folders/7".to_string(),
            parent_folder_name: None,
            parent_folder_url: None,
            error_message: Some("Unknown field, check the explore".to_string()),
            error_model: Some("ecommerce".to_string()),
            error_explore: Some("orders".to_string()),
        },
        run_count,
        last_run_date: None,
    }
}

fn data_lines(content: &str) -> Vec<&str> {
    content.lines().skip(1).filter(|l| !l.is_empty()).collect()
}

fn leading_ids(content: &str) -> Vec<String> {
    data_lines(content)
        .iter()
        .map(|line| line.split(',').nth(1).unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_header_is_first_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");
    let records = vec![enriched("2", ContentType::Dashboard, RunCount::Runs(0))];

    let written = write_report(&records, ReportOptions::default(), &path).unwrap();
    assert_eq!(written, 1);

    let content = std::fs::read_to_string(&path).unwrap();
    let header = content.lines().next().unwrap();
    assert_eq!(
        header,
        "unique_id,id,content_type,content_name,url,element,is_filter,has_alert,is_scheduled,\
         folder_name,folder_url,parent_folder_name,parent_folder_url,error_message,error_explore,\
         error_model,history.dashboard_run_count"
    );
    assert_eq!(data_lines(&content).len(), 1);
}

#[test]
fn test_rows_sorted_by_numeric_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");
    let records = vec![
        enriched("10", ContentType::Dashboard, RunCount::Runs(4)),
        enriched("2", ContentType::Look, RunCount::NotApplicableLook),
        enriched("1", ContentType::Dashboard, RunCount::Runs(0)),
        enriched("300", ContentType::Look, RunCount::NotApplicableLook),
    ];

    write_report(&records, ReportOptions::default(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(leading_ids(&content), vec!["1", "2", "10", "300"]);
}

#[test]
fn test_values_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");
    let records = vec![
        enriched("2", ContentType::Look, RunCount::NotApplicableLook),
        enriched("3", ContentType::Dashboard, RunCount::Runs(0)),
    ];

    write_report(&records, ReportOptions::default(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines = data_lines(&content);
    assert!(lines[0].ends_with(",NA - Look"));
    assert!(lines[1].ends_with(",0"));
    assert!(lines[0].contains("\"Unknown field, check the explore\""));
    // Absent element and parent folder cells are empty.
    assert!(lines[0].contains("https://x.io/looks/2,,No,No,Yes,"));
}

#[test]
fn test_non_numeric_ids_sort_last() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");
    let records = vec![
        enriched("abc", ContentType::Dashboard, RunCount::Runs(0)),
        enriched("5", ContentType::Dashboard, RunCount::Runs(0)),
    ];

    write_report(&records, ReportOptions::default(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(leading_ids(&content), vec!["5", "abc"]);
}

#[test]
fn test_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");
    std::fs::write(&path, "stale content\nmore stale\nand more\n").unwrap();

    write_report(
        &[enriched("2", ContentType::Dashboard, RunCount::Runs(1))],
        ReportOptions::default(),
        &path,
    )
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale"));
    assert_eq!(data_lines(&content).len(), 1);
}

#[test]
fn test_no_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");
    let err = ReportWriter::new().unwrap().write(&[], &path).unwrap_err();
    assert!(matches!(err, ReportError::NoRows));
    assert!(!path.exists());
}

#[test]
fn test_inconsistent_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");
    let full = ReportRow::from_enriched(
        &enriched("1", ContentType::Dashboard, RunCount::Runs(0)),
        ReportOptions::default(),
    );
    let mut short = ReportRow::new();
    short.push("unique_id", Some("x".to_string()));
    short.push(RUN_COUNT_COLUMN, Some("0".to_string()));

    let err = ReportWriter::new()
        .unwrap()
        .write(&[full, short], &path)
        .unwrap_err();
    match err {
        ReportError::InconsistentColumns { row, .. } => assert_eq!(row, 1),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_unwritable_destination_is_recoverable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("report.csv");

    let err = write_report(
        &[enriched("1", ContentType::Dashboard, RunCount::Runs(0))],
        ReportOptions::default(),
        &path,
    )
    .unwrap_err();

    assert!(matches!(err, ReportError::Unwritable { .. }));
    assert!(err.is_recoverable());
}

#[test]
fn test_include_last_run_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");
    let mut record = enriched("4", ContentType::Dashboard, RunCount::Runs(9));
    record.last_run_date = Some("2026-09-30".to_string());

    write_report(
        &[record],
        ReportOptions {
            include_last_run: true,
        },
        &path,
    )
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content
        .lines()
        .next()
        .unwrap()
        .ends_with("history.dashboard_run_count,history.most_recent_run_at"));
    assert!(data_lines(&content)[0].ends_with(",9,2026-09-30"));
}
