//! Session handle carrying the workspace state of the API session.

use std::fmt;

/// Workspace the session currently observes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Production content and LookML
    Production,
    /// The user's development branch
    Development,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
        }
    }
}

/// Authenticated API session.
///
/// Switching workspaces mutates server-side session state, so the handle is
/// passed into every call and its `environment` always mirrors the server.
pub struct Session {
    access_token: String,
    environment: Environment,
}

impl Session {
    /// Create a session for a freshly issued token.
    pub fn new(access_token: impl Into<String>, environment: Environment) -> Self {
        Self {
            access_token: access_token.into(),
            environment,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Record a completed workspace switch
    pub(crate) fn set_environment(&mut self, environment: Environment) {
        self.environment = environment;
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}
