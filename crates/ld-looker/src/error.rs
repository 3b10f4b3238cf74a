//! Error types for ld-looker

use thiserror::Error;

/// Looker API errors. Every variant except `Client` names the call that
/// failed so the operator can tell which step of the run aborted.
#[derive(Error, Debug)]
pub enum LookerError {
    /// Login rejected or token missing (L001)
    #[error("[L001] Authentication failed: {0}")]
    Authentication(String),

    /// Transport-level failure (L002)
    #[error("[L002] {call} request failed: {message}")]
    Request { call: &'static str, message: String },

    /// Request exceeded its timeout (L003)
    #[error("[L003] {call} timed out")]
    Timeout { call: &'static str },

    /// Non-success HTTP status (L004)
    #[error("[L004] {call} returned HTTP {status}: {body}")]
    Status {
        call: &'static str,
        status: u16,
        body: String,
    },

    /// Response body did not match the expected shape (L005)
    #[error("[L005] Failed to decode {call} response: {message}")]
    Decode { call: &'static str, message: String },

    /// Session did not land in the requested workspace (L006)
    #[error("[L006] Workspace switch failed: requested '{requested}', session reports '{actual}'")]
    WorkspaceSwitch { requested: String, actual: String },

    /// Saved look has no query to clone (L007)
    #[error("[L007] Saved look {look_id} has no query")]
    MissingQuery { look_id: String },

    /// HTTP client could not be built (L008)
    #[error("[L008] Failed to build HTTP client: {0}")]
    Client(String),
}

/// Result type alias for LookerError
pub type LookerResult<T> = Result<T, LookerError>;

impl LookerError {
    /// Classify a reqwest error raised while sending `call`
    pub(crate) fn from_reqwest(call: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookerError::Timeout { call }
        } else {
            LookerError::Request {
                call,
                message: err.to_string(),
            }
        }
    }
}
