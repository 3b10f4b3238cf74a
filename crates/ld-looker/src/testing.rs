//! In-memory Looker fake for tests.
//!
//! Serves one validator snapshot per environment, so a test can script what
//! production and the development branch report, and records every call.

use crate::error::{LookerError, LookerResult};
use crate::models::{JsonRow, QueryTemplate};
use crate::session::{Environment, Session};
use crate::traits::LookerApi;
use async_trait::async_trait;
use ld_core::{FolderRecord, RawValidationItem};
use std::sync::Mutex;
use std::time::Duration;

/// Scriptable fake Looker instance
#[derive(Default)]
pub struct FakeLooker {
    /// Validator output while in production
    pub production: Vec<RawValidationItem>,
    /// Validator output after entering development mode
    pub development: Vec<RawValidationItem>,
    /// Folder directory contents
    pub folders: Vec<FolderRecord>,
    /// Branch reported in development mode
    pub branch: String,
    /// Query behind the usage look
    pub usage_template: QueryTemplate,
    /// Rows returned by any executed query
    pub usage_rows: Vec<JsonRow>,
    /// Make validation fail with a timeout in this environment
    pub validation_timeout_in: Option<Environment>,
    /// Make query execution fail
    pub fail_queries: bool,
    /// Make the workspace switch fail
    pub fail_workspace_switch: bool,
    calls: Mutex<Vec<String>>,
    executed: Mutex<Vec<QueryTemplate>>,
}

impl FakeLooker {
    pub fn new() -> Self {
        Self {
            branch: "dev-feature".to_string(),
            ..Default::default()
        }
    }

    /// Names of the calls made so far, tagged with the session environment
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Queries passed to `create_and_run_query`
    pub fn executed_queries(&self) -> Vec<QueryTemplate> {
        self.executed.lock().map(|q| q.clone()).unwrap_or_default()
    }

    fn record(&self, call: &str, session: &Session) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(format!("{}@{}", call, session.environment()));
        }
    }
}

#[async_trait]
impl LookerApi for FakeLooker {
    async fn login(&self) -> LookerResult<Session> {
        Ok(Session::new("fake-token", Environment::Production))
    }

    async fn validate_content(
        &self,
        session: &Session,
        _timeout: Duration,
    ) -> LookerResult<Vec<RawValidationItem>> {
        self.record("content_validation", session);
        if self.validation_timeout_in == Some(session.environment()) {
            return Err(LookerError::Timeout {
                call: "content_validation",
            });
        }
        Ok(match session.environment() {
            Environment::Production => self.production.clone(),
            Environment::Development => self.development.clone(),
        })
    }

    async fn enter_development_mode(
        &self,
        session: &mut Session,
        workspace: &str,
    ) -> LookerResult<()> {
        self.record("update_session", session);
        if self.fail_workspace_switch {
            return Err(LookerError::WorkspaceSwitch {
                requested: workspace.to_string(),
                actual: "production".to_string(),
            });
        }
        session.set_environment(Environment::Development);
        Ok(())
    }

    async fn current_branch_name(&self, session: &Session, _project: &str) -> LookerResult<String> {
        self.record("git_branch", session);
        Ok(if session.is_development() {
            self.branch.clone()
        } else {
            "master".to_string()
        })
    }

    async fn list_folders(&self, session: &Session) -> LookerResult<Vec<FolderRecord>> {
        self.record("all_folders", session);
        Ok(self.folders.clone())
    }

    async fn get_saved_query(
        &self,
        session: &Session,
        _look_id: &str,
    ) -> LookerResult<QueryTemplate> {
        self.record("look", session);
        Ok(self.usage_template.clone())
    }

    async fn create_and_run_query(
        &self,
        session: &Session,
        query: &QueryTemplate,
    ) -> LookerResult<Vec<JsonRow>> {
        self.record("run_query", session);
        if let Ok(mut executed) = self.executed.lock() {
            executed.push(query.clone());
        }
        if self.fail_queries {
            return Err(LookerError::Status {
                call: "create_query",
                status: 422,
                body: "invalid filter".to_string(),
            });
        }
        Ok(self.usage_rows.clone())
    }

    fn api_type(&self) -> &'static str {
        "fake"
    }
}
