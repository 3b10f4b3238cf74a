//! Wire models for the Looker API responses Lookdiff consumes.
//!
//! Ids are canonicalized to strings by the `ld_core` id types as they are
//! decoded, so nothing past this module deals with numeric ids.

use ld_core::{
    Content, ContentId, ContentRef, DashboardElementRef, DashboardFilterRef, RawValidationItem,
    UsageRecord, ValidationError,
};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of a JSON query result, keyed by field name
pub type JsonRow = Map<String, Value>;

/// `POST /login` response
#[derive(Debug, Deserialize)]
pub(crate) struct AccessToken {
    pub access_token: Option<String>,
}

/// `GET /content_validation` response
#[derive(Debug, Default, Deserialize)]
pub struct ContentValidation {
    #[serde(default)]
    pub content_with_errors: Option<Vec<ContentValidatorError>>,
    #[serde(default)]
    pub computation_time: Option<f64>,
    #[serde(default)]
    pub total_looks_validated: Option<u64>,
    #[serde(default)]
    pub total_dashboards_validated: Option<u64>,
}

/// One entry of `content_with_errors`
#[derive(Debug, Default, Deserialize)]
pub struct ContentValidatorError {
    #[serde(default)]
    pub look: Option<ContentRef>,
    #[serde(default)]
    pub dashboard: Option<ContentRef>,
    #[serde(default)]
    pub dashboard_element: Option<DashboardElementRef>,
    #[serde(default)]
    pub dashboard_filter: Option<DashboardFilterRef>,
    #[serde(default)]
    pub scheduled_plan: Option<IgnoredAny>,
    #[serde(default)]
    pub alert: Option<IgnoredAny>,
    #[serde(default)]
    pub errors: Option<Vec<ValidationError>>,
}

impl ContentValidatorError {
    /// Convert into a core item. Entries that are neither a dashboard nor a
    /// look (LookML dashboards) yield `None`.
    pub fn into_item(self) -> Option<RawValidationItem> {
        let content = match (self.dashboard, self.look) {
            (Some(dashboard), _) => Content::Dashboard(dashboard),
            (None, Some(look)) => Content::Look(look),
            (None, None) => return None,
        };
        Some(RawValidationItem {
            content,
            errors: self.errors.unwrap_or_default(),
            dashboard_filter: self.dashboard_filter,
            dashboard_element: self.dashboard_element,
            has_alert: self.alert.is_some(),
            has_scheduled_plan: self.scheduled_plan.is_some(),
        })
    }
}

impl ContentValidation {
    /// Flatten the response into core items, skipping unsupported content.
    pub fn into_items(self) -> Vec<RawValidationItem> {
        let entries = self.content_with_errors.unwrap_or_default();
        let total = entries.len();
        let items: Vec<RawValidationItem> = entries
            .into_iter()
            .filter_map(ContentValidatorError::into_item)
            .collect();
        if items.len() < total {
            log::warn!(
                "Skipped {} validator entries that are neither dashboards nor looks",
                total - items.len()
            );
        }
        items
    }
}

/// `PATCH /session` response
#[derive(Debug, Deserialize)]
pub(crate) struct ApiSession {
    #[serde(default)]
    pub workspace_id: Option<String>,
}

/// `GET /projects/{id}/git_branch` response
#[derive(Debug, Deserialize)]
pub(crate) struct GitBranch {
    #[serde(default)]
    pub name: Option<String>,
}

/// `GET /looks/{id}` response, restricted to the query
#[derive(Debug, Deserialize)]
pub(crate) struct SavedLook {
    #[serde(default)]
    pub query: Option<QueryTemplate>,
}

/// Fields of a query that the API derives and rejects or ignores on create
const DERIVED_QUERY_FIELDS: &[&str] = &["slug", "share_url", "expanded_share_url", "url", "can"];

/// A Looker query body. Fields Lookdiff does not touch round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl QueryTemplate {
    /// Copy of this query with its identity cleared, so creating it yields
    /// a new query instead of addressing the saved one.
    pub fn detached(&self) -> Self {
        let mut copy = self.clone();
        copy.id = None;
        copy.client_id = None;
        for field in DERIVED_QUERY_FIELDS {
            copy.rest.remove(*field);
        }
        copy
    }

    /// Set one filter expression, keeping the others
    pub fn set_filter(&mut self, field: &str, expression: impl Into<String>) {
        self.filters
            .get_or_insert_with(Map::new)
            .insert(field.to_string(), Value::String(expression.into()));
    }

    /// Filter expression for `field`, if set
    pub fn filter(&self, field: &str) -> Option<&str> {
        self.filters.as_ref()?.get(field)?.as_str()
    }

    /// Canonical string form of the query id
    pub fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Field names used to read usage rows
#[derive(Debug, Clone, Copy)]
pub struct UsageFields<'a> {
    pub dashboard_id: &'a str,
    pub run_count: &'a str,
    pub last_run: &'a str,
}

/// Decode one usage query row. Rows without a usable dashboard id yield
/// `None`; a missing or non-numeric run count decodes as `None`.
pub fn usage_from_row(row: &JsonRow, fields: UsageFields<'_>) -> Option<UsageRecord> {
    let dashboard_id = row
        .get(fields.dashboard_id)
        .cloned()
        .and_then(|v| serde_json::from_value::<ContentId>(v).ok())?;

    let run_count = match row.get(fields.run_count) {
        Some(Value::Number(n)) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    let last_run_date = match row.get(fields.last_run) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };

    Some(UsageRecord {
        dashboard_id,
        run_count,
        last_run_date,
    })
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
