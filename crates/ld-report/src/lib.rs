//! ld-report - Report writer for Lookdiff
//!
//! Writes new broken content as a header-first CSV file, sorted ascending by
//! content id.

pub mod error;
pub mod row;
pub mod writer;

pub use error::{ReportError, ReportResult};
pub use row::{ReportOptions, ReportRow};
pub use writer::{write_report, ReportWriter};
