//! ld-looker - Looker API layer for Lookdiff
//!
//! This crate provides the `LookerApi` trait over the services a comparison
//! run needs (content validator, workspace switch, folders, saved queries),
//! the session handle, an HTTP implementation, and the usage query.

pub mod error;
pub mod http;
pub mod models;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;
pub mod usage;

pub use error::{LookerError, LookerResult};
pub use http::HttpLooker;
pub use models::{JsonRow, QueryTemplate};
pub use session::{Environment, Session};
pub use traits::LookerApi;
pub use usage::{fetch_usage, prepare_usage_query};
