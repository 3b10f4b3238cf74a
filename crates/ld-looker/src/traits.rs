//! Looker API trait definition

use crate::error::LookerResult;
use crate::models::{JsonRow, QueryTemplate};
use crate::session::Session;
use async_trait::async_trait;
use ld_core::{FolderRecord, RawValidationItem};
use std::time::Duration;

/// The Looker services Lookdiff depends on.
///
/// Every call is attempted once; implementations never retry.
#[async_trait]
pub trait LookerApi: Send + Sync {
    /// Authenticate and open a production session
    async fn login(&self) -> LookerResult<Session>;

    /// Run the content validator in the session's current workspace
    async fn validate_content(
        &self,
        session: &Session,
        timeout: Duration,
    ) -> LookerResult<Vec<RawValidationItem>>;

    /// Switch the session into the given development workspace
    async fn enter_development_mode(
        &self,
        session: &mut Session,
        workspace: &str,
    ) -> LookerResult<()>;

    /// Name of the branch checked out for `project` in the session's workspace
    async fn current_branch_name(&self, session: &Session, project: &str) -> LookerResult<String>;

    /// List every folder with `id`, `parent_id` and `name`
    async fn list_folders(&self, session: &Session) -> LookerResult<Vec<FolderRecord>>;

    /// Fetch the query behind a saved look
    async fn get_saved_query(&self, session: &Session, look_id: &str)
        -> LookerResult<QueryTemplate>;

    /// Create `query` as a new query and run it, returning JSON rows
    async fn create_and_run_query(
        &self,
        session: &Session,
        query: &QueryTemplate,
    ) -> LookerResult<Vec<JsonRow>>;

    /// Backend identifier for logging
    fn api_type(&self) -> &'static str;
}
