//! CSV report writer backed by an in-memory DuckDB connection

use crate::error::{ReportError, ReportResult};
use crate::row::{ReportOptions, ReportRow};
use duckdb::Connection;
use ld_core::EnrichedRecord;
use std::fs::File;
use std::path::Path;

const REPORT_TABLE: &str = "report";
const SORTED_TABLE: &str = "report_sorted";

/// Writes header-first CSV reports sorted by numeric `id`
pub struct ReportWriter {
    conn: Connection,
}

impl ReportWriter {
    /// Create a writer with its own in-memory database
    pub fn new() -> ReportResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Write `rows` to `path` and return the number of data rows.
    ///
    /// The header is the column list of the first row; every row must carry
    /// the same columns. The file is written in input order first, then read
    /// back and rewritten sorted ascending by `id`.
    pub fn write(&self, rows: &[ReportRow], path: &Path) -> ReportResult<usize> {
        let first = rows.first().ok_or(ReportError::NoRows)?;
        let header = first.columns();
        for (i, row) in rows.iter().enumerate() {
            let columns = row.columns();
            if columns != header {
                return Err(ReportError::InconsistentColumns {
                    row: i,
                    expected: header.join(", "),
                    found: columns.join(", "),
                });
            }
        }

        File::create(path).map_err(|e| ReportError::Unwritable {
            path: path.display().to_string(),
            source: e,
        })?;

        self.load_rows(&header, rows)?;
        let target = sql_string(&path.display().to_string());
        self.conn.execute_batch(&format!(
            "COPY {REPORT_TABLE} TO {target} (FORMAT CSV, HEADER)"
        ))?;
        log::debug!("Wrote {} report rows to {}", rows.len(), path.display());

        self.sort_by_id(&target)?;
        Ok(rows.len())
    }

    fn load_rows(&self, header: &[&str], rows: &[ReportRow]) -> ReportResult<()> {
        let column_defs: Vec<String> = header
            .iter()
            .map(|c| format!("{} VARCHAR", quote_ident(c)))
            .collect();
        self.conn.execute_batch(&format!(
            "CREATE OR REPLACE TABLE {REPORT_TABLE} ({})",
            column_defs.join(", ")
        ))?;

        let placeholders = vec!["?"; header.len()].join(", ");
        let mut stmt = self
            .conn
            .prepare(&format!("INSERT INTO {REPORT_TABLE} VALUES ({placeholders})"))?;
        for row in rows {
            stmt.execute(duckdb::params_from_iter(row.values()))?;
        }
        Ok(())
    }

    /// Read the written file back and rewrite it ordered by `id`.
    ///
    /// Numeric ids sort numerically; anything non-numeric sorts after them
    /// by text.
    fn sort_by_id(&self, target: &str) -> ReportResult<()> {
        self.conn.execute_batch(&format!(
            "CREATE OR REPLACE TABLE {SORTED_TABLE} AS \
             SELECT * FROM read_csv({target}, header = true, all_varchar = true)"
        ))?;
        self.conn.execute_batch(&format!(
            "COPY (SELECT * FROM {SORTED_TABLE} \
             ORDER BY TRY_CAST(\"id\" AS BIGINT) NULLS LAST, \"id\") \
             TO {target} (FORMAT CSV, HEADER)"
        ))?;
        Ok(())
    }
}

/// Write enriched records as a report at `path`
pub fn write_report(
    records: &[EnrichedRecord],
    options: ReportOptions,
    path: &Path,
) -> ReportResult<usize> {
    let rows: Vec<ReportRow> = records
        .iter()
        .map(|r| ReportRow::from_enriched(r, options))
        .collect();
    ReportWriter::new()?.write(&rows, path)
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn sql_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod tests;
