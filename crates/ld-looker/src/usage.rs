//! Dashboard usage lookup through a saved look's query.

use crate::error::LookerResult;
use crate::models::{usage_from_row, QueryTemplate, UsageFields};
use crate::session::Session;
use crate::traits::LookerApi;
use ld_core::{ContentId, UsageConfig, UsageRecord};

/// Build the usage query: the saved query, detached from its identity, with
/// its dashboard id filter set to the given ids.
pub fn prepare_usage_query(
    template: &QueryTemplate,
    settings: &UsageConfig,
    dashboard_ids: &[ContentId],
) -> QueryTemplate {
    let ids: Vec<&str> = dashboard_ids.iter().map(|id| id.as_str()).collect();
    let mut query = template.detached();
    query.set_filter(&settings.dashboard_id_field, ids.join(","));
    query
}

/// Fetch run statistics for `dashboard_ids`.
///
/// Returns an empty set without calling the API when there are no ids.
/// Query failures are returned to the caller; silently treating them as "no
/// usage" would report every dashboard as never run.
pub async fn fetch_usage(
    api: &dyn LookerApi,
    session: &Session,
    settings: &UsageConfig,
    dashboard_ids: &[ContentId],
) -> LookerResult<Vec<UsageRecord>> {
    if dashboard_ids.is_empty() {
        log::debug!("No dashboards in the diff, skipping usage query");
        return Ok(Vec::new());
    }

    let template = api.get_saved_query(session, &settings.look_id).await?;
    let query = prepare_usage_query(&template, settings, dashboard_ids);
    let rows = api.create_and_run_query(session, &query).await?;

    let fields = UsageFields {
        dashboard_id: &settings.dashboard_id_field,
        run_count: &settings.run_count_field,
        last_run: &settings.last_run_field,
    };
    let usage: Vec<UsageRecord> = rows
        .iter()
        .filter_map(|row| usage_from_row(row, fields))
        .collect();
    if usage.len() < rows.len() {
        log::warn!(
            "{} usage rows had no '{}' value and were ignored",
            rows.len() - usage.len(),
            settings.dashboard_id_field
        );
    }
    Ok(usage)
}

#[cfg(test)]
#[path = "usage_test.rs"]
mod tests;
