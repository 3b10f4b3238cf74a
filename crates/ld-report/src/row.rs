//! Report rows: ordered column/value pairs.

use ld_core::EnrichedRecord;

/// Run count column appended by enrichment
pub const RUN_COUNT_COLUMN: &str = "history.dashboard_run_count";

/// Optional last run column
pub const LAST_RUN_COLUMN: &str = "history.most_recent_run_at";

/// Options controlling which columns a report carries
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Append the last run date after the run count
    pub include_last_run: bool,
}

/// One report row. Absent values are written as empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRow {
    cells: Vec<(&'static str, Option<String>)>,
}

impl ReportRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: &'static str, value: Option<String>) {
        self.cells.push((column, value));
    }

    pub fn columns(&self) -> Vec<&'static str> {
        self.cells.iter().map(|(c, _)| *c).collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &Option<String>> {
        self.cells.iter().map(|(_, v)| v)
    }

    /// Value of `column`, if the row has it
    pub fn get(&self, column: &str) -> Option<&Option<String>> {
        self.cells.iter().find(|(c, _)| *c == column).map(|(_, v)| v)
    }

    /// Row for an enriched record, in report column order
    pub fn from_enriched(enriched: &EnrichedRecord, options: ReportOptions) -> Self {
        let r = &enriched.record;
        let mut row = Self::new();
        row.push("unique_id", Some(r.unique_id.clone()));
        row.push("id", Some(r.id.to_string()));
        row.push("content_type", Some(r.content_type.to_string()));
        row.push("content_name", r.content_name.clone());
        row.push("url", Some(r.url.clone()));
        row.push("element", r.element.clone());
        row.push("is_filter", Some(r.is_filter.to_string()));
        row.push("has_alert", Some(r.has_alert.to_string()));
        row.push("is_scheduled", Some(r.is_scheduled.to_string()));
        row.push("folder_name", r.folder_name.clone());
        row.push("folder_url", Some(r.folder_url.clone()));
        row.push("parent_folder_name", r.parent_folder_name.clone());
        row.push("parent_folder_url", r.parent_folder_url.clone());
        row.push("error_message", r.error_message.clone());
        row.push("error_explore", r.error_explore.clone());
        row.push("error_model", r.error_model.clone());
        row.push(RUN_COUNT_COLUMN, Some(enriched.run_count.to_string()));
        if options.include_last_run {
            row.push(LAST_RUN_COLUMN, enriched.last_run_date.clone());
        }
        row
    }
}

#[cfg(test)]
#[path = "row_test.rs"]
mod tests;
