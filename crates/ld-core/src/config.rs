//! Configuration types and parsing for lookdiff.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "lookdiff.yml";

/// Main configuration from lookdiff.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Looker API connection settings
    pub looker: LookerConfig,

    /// Administrative API port stripped from `looker.base_url` to build
    /// content links
    #[serde(default = "default_admin_port")]
    pub admin_port: u16,

    /// Upper bound for one content validator pass, in seconds
    #[serde(default = "default_validation_timeout")]
    pub validation_timeout: u64,

    /// LookML project whose development branch is reported
    pub lookml_project: String,

    /// Workspace to switch the session into for the development pass
    #[serde(default = "default_dev_workspace")]
    pub dev_workspace: String,

    /// Report destination
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Dashboard usage query settings
    #[serde(default)]
    pub usage: UsageConfig,
}

/// Looker API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookerConfig {
    /// API base URL, usually including the admin port (`https://host:19999`)
    #[serde(default)]
    pub base_url: String,

    /// API3 client id
    #[serde(default)]
    pub client_id: String,

    /// API3 client secret (prefer `LOOKERSDK_CLIENT_SECRET`)
    #[serde(default)]
    pub client_secret: String,

    /// Verify TLS certificates
    #[serde(default = "default_true")]
    pub verify_ssl: bool,

    /// Timeout in seconds for every call except content validation
    #[serde(default = "default_request_timeout")]
    pub timeout: u64,

    /// API version path segment
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

/// Settings for the saved look that reports dashboard usage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsageConfig {
    /// Saved look whose query is cloned and filtered by dashboard id
    #[serde(default = "default_usage_look_id")]
    pub look_id: String,

    /// Field the dashboard id filter is applied to
    #[serde(default = "default_dashboard_id_field")]
    pub dashboard_id_field: String,

    /// Field holding the run count in the query results
    #[serde(default = "default_run_count_field")]
    pub run_count_field: String,

    /// Field holding the last run date in the query results
    #[serde(default = "default_last_run_field")]
    pub last_run_field: String,

    /// Append the last run date column to the report
    #[serde(default)]
    pub include_last_run: bool,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            look_id: default_usage_look_id(),
            dashboard_id_field: default_dashboard_id_field(),
            run_count_field: default_run_count_field(),
            last_run_field: default_last_run_field(),
            include_last_run: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_admin_port() -> u16 {
    19999
}

fn default_validation_timeout() -> u64 {
    600
}

fn default_request_timeout() -> u64 {
    120
}

fn default_api_version() -> String {
    "4.0".to_string()
}

fn default_dev_workspace() -> String {
    "dev".to_string()
}

fn default_output_path() -> String {
    "new_broken_content.csv".to_string()
}

fn default_usage_look_id() -> String {
    "4224".to_string()
}

fn default_dashboard_id_field() -> String {
    "dashboard.id".to_string()
}

fn default_run_count_field() -> String {
    "history.dashboard_run_count".to_string()
}

fn default_last_run_field() -> String {
    "history.most_recent_run_at".to_string()
}

/// Environment variables that override connection settings
pub const ENV_BASE_URL: &str = "LOOKERSDK_BASE_URL";
pub const ENV_CLIENT_ID: &str = "LOOKERSDK_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "LOOKERSDK_CLIENT_SECRET";
pub const ENV_VERIFY_SSL: &str = "LOOKERSDK_VERIFY_SSL";

impl Config {
    /// Load configuration from a file path, applying `LOOKERSDK_*` overrides
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let mut config = Self::parse(&content)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load `lookdiff.yml` from a directory
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        Self::load(&dir.join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from YAML text without validating it
    pub fn parse(yaml: &str) -> CoreResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply connection overrides from a variable lookup (normally the
    /// process environment). Set variables take precedence over the file.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_BASE_URL) {
            self.looker.base_url = v;
        }
        if let Some(v) = lookup(ENV_CLIENT_ID) {
            self.looker.client_id = v;
        }
        if let Some(v) = lookup(ENV_CLIENT_SECRET) {
            self.looker.client_secret = v;
        }
        if let Some(v) = lookup(ENV_VERIFY_SSL) {
            match v.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => self.looker.verify_ssl = true,
                "false" | "0" | "no" => self.looker.verify_ssl = false,
                other => log::warn!("Ignoring {}={}: expected true or false", ENV_VERIFY_SSL, other),
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        let required = [
            ("looker.base_url", &self.looker.base_url),
            ("looker.client_id", &self.looker.client_id),
            ("looker.client_secret", &self.looker.client_secret),
            ("lookml_project", &self.lookml_project),
            ("usage.look_id", &self.usage.look_id),
            ("output_path", &self.output_path),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("'{}' must not be empty", key),
                });
            }
        }

        if self.validation_timeout == 0 || self.looker.timeout == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "Timeouts must be positive".to_string(),
            });
        }

        Ok(())
    }

    /// Base URL for links to content in the Looker UI.
    ///
    /// Strips the administrative port (and anything after it) from the API
    /// base URL. A base URL without the port is returned unchanged.
    pub fn web_base_url(&self) -> String {
        let suffix = format!(":{}", self.admin_port);
        let base = self.looker.base_url.trim_end_matches('/');
        match base.find(&suffix) {
            Some(pos) => base[..pos].to_string(),
            None => {
                log::debug!("Base URL {} has no {} suffix, using it as is", base, suffix);
                base.to_string()
            }
        }
    }

    /// URL prefix for API calls, e.g. `https://host:19999/api/4.0`
    pub fn api_url(&self) -> String {
        format!(
            "{}/api/{}",
            self.looker.base_url.trim_end_matches('/'),
            self.looker.api_version
        )
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
