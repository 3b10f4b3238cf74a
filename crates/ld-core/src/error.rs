//! Error types for ld-core

use thiserror::Error;

/// Core error type for Lookdiff
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Invalid configuration value
    #[error("[C002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C003: Content references a folder that the folder directory did not return
    #[error("[C003] {content_type} {content_id} references folder {folder_id}, which is missing from the folder index")]
    FolderNotIndexed {
        content_type: String,
        content_id: String,
        folder_id: String,
    },

    /// C004: Validation item carries no errors
    #[error("[C004] {content_type} {content_id} was reported as broken but carries no validation errors")]
    EmptyErrorList {
        content_type: String,
        content_id: String,
    },

    /// C005: IO error with file path context
    #[error("[C005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// C006: YAML parse error
    #[error("[C006] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
