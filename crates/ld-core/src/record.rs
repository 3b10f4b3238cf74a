//! Flat, comparable broken-content records.

use crate::content::ContentType;
use crate::id::ContentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Yes/No flag as rendered in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Yes => "Yes",
            Flag::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Flag::Yes)
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Flag::Yes
        } else {
            Flag::No
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One broken content occurrence in one environment.
///
/// Two records describe the same occurrence iff their `unique_id` matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Fingerprint of (id, element, content_name, errors, folder_id)
    pub unique_id: String,
    pub id: ContentId,
    pub content_type: ContentType,
    pub content_name: Option<String>,
    pub url: String,
    /// Broken sub-element: filter name, tile title, or look name
    pub element: Option<String>,
    pub is_filter: Flag,
    pub has_alert: Flag,
    pub is_scheduled: Flag,
    pub folder_name: Option<String>,
    pub folder_url: String,
    pub parent_folder_name: Option<String>,
    pub parent_folder_url: Option<String>,
    pub error_message: Option<String>,
    pub error_model: Option<String>,
    pub error_explore: Option<String>,
}

impl NormalizedRecord {
    pub fn is_dashboard(&self) -> bool {
        self.content_type == ContentType::Dashboard
    }
}
