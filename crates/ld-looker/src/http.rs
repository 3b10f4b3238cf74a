//! reqwest-backed Looker API client

use crate::error::{LookerError, LookerResult};
use crate::models::{
    AccessToken, ApiSession, ContentValidation, GitBranch, JsonRow, QueryTemplate, SavedLook,
};
use crate::session::{Environment, Session};
use crate::traits::LookerApi;
use async_trait::async_trait;
use ld_core::{FolderRecord, LookerConfig, RawValidationItem};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Longest response body echoed back in an error message
const MAX_ERROR_BODY: usize = 500;

/// Looker API client over HTTPS
pub struct HttpLooker {
    client: Client,
    api_url: String,
    client_id: String,
    client_secret: String,
}

impl HttpLooker {
    /// Create a client for `api_url` (e.g. `https://host:19999/api/4.0`)
    pub fn new(api_url: impl Into<String>, looker: &LookerConfig) -> LookerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(looker.timeout))
            .danger_accept_invalid_certs(!looker.verify_ssl)
            .build()
            .map_err(|e| LookerError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            client_id: looker.client_id.clone(),
            client_secret: looker.client_secret.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    fn authed(&self, req: RequestBuilder, session: &Session) -> RequestBuilder {
        req.header(AUTHORIZATION, format!("token {}", session.access_token()))
    }

    /// Send a request and decode a JSON body
    async fn send<T: DeserializeOwned>(&self, call: &'static str, req: RequestBuilder) -> LookerResult<T> {
        log::debug!("Looker API call: {}", call);
        let resp = req
            .send()
            .await
            .map_err(|e| LookerError::from_reqwest(call, e))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| LookerError::from_reqwest(call, e))?;

        if !status.is_success() {
            return Err(LookerError::Status {
                call,
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        serde_json::from_str(&body).map_err(|e| LookerError::Decode {
            call,
            message: e.to_string(),
        })
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[async_trait]
impl LookerApi for HttpLooker {
    async fn login(&self) -> LookerResult<Session> {
        let req = self.client.post(self.url("login")).form(&[
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ]);
        let token: AccessToken = match self.send("login", req).await {
            Ok(token) => token,
            Err(LookerError::Status { status, body, .. }) => {
                return Err(LookerError::Authentication(format!("HTTP {}: {}", status, body)))
            }
            Err(e) => return Err(e),
        };

        let access_token = token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| LookerError::Authentication("no access token in response".to_string()))?;
        Ok(Session::new(access_token, Environment::Production))
    }

    async fn validate_content(
        &self,
        session: &Session,
        timeout: Duration,
    ) -> LookerResult<Vec<RawValidationItem>> {
        let req = self
            .authed(self.client.get(self.url("content_validation")), session)
            .timeout(timeout);
        let validation: ContentValidation = self.send("content_validation", req).await?;
        log::debug!(
            "Validator ({}) checked {} looks and {} dashboards in {:.1}s",
            session.environment(),
            validation.total_looks_validated.unwrap_or(0),
            validation.total_dashboards_validated.unwrap_or(0),
            validation.computation_time.unwrap_or(0.0)
        );
        Ok(validation.into_items())
    }

    async fn enter_development_mode(
        &self,
        session: &mut Session,
        workspace: &str,
    ) -> LookerResult<()> {
        let req = self
            .authed(self.client.patch(self.url("session")), session)
            .json(&serde_json::json!({ "workspace_id": workspace }));
        let api_session: ApiSession = self.send("update_session", req).await?;

        let actual = api_session.workspace_id.unwrap_or_default();
        if actual != workspace {
            return Err(LookerError::WorkspaceSwitch {
                requested: workspace.to_string(),
                actual,
            });
        }
        session.set_environment(Environment::Development);
        Ok(())
    }

    async fn current_branch_name(&self, session: &Session, project: &str) -> LookerResult<String> {
        let req = self.authed(
            self.client
                .get(self.url(&format!("projects/{}/git_branch", project))),
            session,
        );
        let branch: GitBranch = self.send("git_branch", req).await?;
        branch.name.ok_or(LookerError::Decode {
            call: "git_branch",
            message: "branch has no name".to_string(),
        })
    }

    async fn list_folders(&self, session: &Session) -> LookerResult<Vec<FolderRecord>> {
        let req = self
            .authed(self.client.get(self.url("folders")), session)
            .query(&[("fields", "id,parent_id,name")]);
        self.send("all_folders", req).await
    }

    async fn get_saved_query(
        &self,
        session: &Session,
        look_id: &str,
    ) -> LookerResult<QueryTemplate> {
        let req = self
            .authed(self.client.get(self.url(&format!("looks/{}", look_id))), session)
            .query(&[("fields", "query")]);
        let look: SavedLook = self.send("look", req).await?;
        look.query.ok_or_else(|| LookerError::MissingQuery {
            look_id: look_id.to_string(),
        })
    }

    async fn create_and_run_query(
        &self,
        session: &Session,
        query: &QueryTemplate,
    ) -> LookerResult<Vec<JsonRow>> {
        let req = self
            .authed(self.client.post(self.url("queries")), session)
            .json(query);
        let created: QueryTemplate = self.send("create_query", req).await?;
        let query_id = created.id_string().ok_or(LookerError::Decode {
            call: "create_query",
            message: "created query has no id".to_string(),
        })?;

        let req = self.authed(
            self.client
                .get(self.url(&format!("queries/{}/run/json", query_id))),
            session,
        );
        self.send("run_query", req).await
    }

    fn api_type(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
