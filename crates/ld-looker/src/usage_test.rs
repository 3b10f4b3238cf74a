use super::*;
use crate::error::LookerError;
use crate::testing::FakeLooker;
use serde_json::json;

fn template() -> QueryTemplate {
    serde_json::from_value(json!({
        "id": "881",
        "client_id": "saved",
        "model": "system__activity",
        "view": "history",
        "fields": ["dashboard.id", "history.dashboard_run_count"],
        "filters": {"history.created_date": "90 days"}
    }))
    .unwrap()
}

fn ids(raw: &[&str]) -> Vec<ContentId> {
    raw.iter().map(|id| ContentId::new(*id)).collect()
}

#[test]
fn test_prepare_usage_query() {
    let query = prepare_usage_query(&template(), &UsageConfig::default(), &ids(&["3", "12"]));
    assert!(query.id.is_none());
    assert!(query.client_id.is_none());
    assert_eq!(query.filter("dashboard.id"), Some("3,12"));
    assert_eq!(query.filter("history.created_date"), Some("90 days"));
}

#[test]
fn test_prepare_usage_query_custom_field() {
    let settings = UsageConfig {
        dashboard_id_field: "content.dashboard_id".to_string(),
        ..Default::default()
    };
    let query = prepare_usage_query(&template(), &settings, &ids(&["3"]));
    assert_eq!(query.filter("content.dashboard_id"), Some("3"));
    assert!(query.filter("dashboard.id").is_none());
}

#[tokio::test]
async fn test_fetch_usage_skips_query_without_ids() {
    let api = FakeLooker::new();
    let session = api.login().await.unwrap();
    let usage = fetch_usage(&api, &session, &UsageConfig::default(), &[])
        .await
        .unwrap();
    assert!(usage.is_empty());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_fetch_usage_runs_filtered_query() {
    let mut api = FakeLooker::new();
    api.usage_template = template();
    api.usage_rows = vec![
        json!({"dashboard.id": 3, "history.dashboard_run_count": 10})
            .as_object()
            .unwrap()
            .clone(),
        json!({"dashboard.id": null, "history.dashboard_run_count": 99})
            .as_object()
            .unwrap()
            .clone(),
    ];
    let session = api.login().await.unwrap();

    let usage = fetch_usage(&api, &session, &UsageConfig::default(), &ids(&["3", "4"]))
        .await
        .unwrap();

    assert_eq!(usage.len(), 1);
    assert_eq!(usage[0].dashboard_id, "3");
    assert_eq!(usage[0].run_count, Some(10));

    let executed = api.executed_queries();
    assert_eq!(executed.len(), 1);
    assert_eq!(executed[0].filter("dashboard.id"), Some("3,4"));
    assert!(executed[0].id.is_none());
}

#[tokio::test]
async fn test_fetch_usage_surfaces_query_failure() {
    let mut api = FakeLooker::new();
    api.fail_queries = true;
    let session = api.login().await.unwrap();

    let err = fetch_usage(&api, &session, &UsageConfig::default(), &ids(&["3"]))
        .await
        .unwrap_err();
    assert!(matches!(err, LookerError::Status { status: 422, .. }));
}
