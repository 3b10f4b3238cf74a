//! Broken content items as reported by the content validator.

use crate::id::{ContentId, FolderId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content a validation item refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// A user-defined dashboard
    Dashboard,
    /// A saved look
    Look,
}

impl ContentType {
    /// Lowercase name used in URLs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Dashboard => "dashboard",
            ContentType::Look => "look",
        }
    }

    /// URL path segment (`dashboards` / `looks`)
    pub fn url_segment(&self) -> &'static str {
        match self {
            ContentType::Dashboard => "dashboards",
            ContentType::Look => "looks",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Folder reference embedded in a content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRef {
    pub id: FolderId,
    #[serde(default)]
    pub name: Option<String>,
}

/// The dashboard or look a validation item refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRef {
    pub id: ContentId,
    #[serde(default)]
    pub title: Option<String>,
    pub folder: FolderRef,
}

/// Content of a validation item, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Content {
    Dashboard(ContentRef),
    Look(ContentRef),
}

impl Content {
    pub fn content_type(&self) -> ContentType {
        match self {
            Content::Dashboard(_) => ContentType::Dashboard,
            Content::Look(_) => ContentType::Look,
        }
    }

    pub fn reference(&self) -> &ContentRef {
        match self {
            Content::Dashboard(r) | Content::Look(r) => r,
        }
    }
}

/// A single validation error on a content item
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub explore_name: Option<String>,
    #[serde(default)]
    pub removable: Option<bool>,
}

fn fmt_opt<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidationError(message={}, field_name={}, model_name={}, explore_name={}, removable={})",
            fmt_opt(&self.message),
            fmt_opt(&self.field_name),
            fmt_opt(&self.model_name),
            fmt_opt(&self.explore_name),
            fmt_opt(&self.removable),
        )
    }
}

/// Render a full error sequence as `[e1, e2, ...]`.
///
/// This rendering feeds the fingerprint, so it must stay stable across
/// releases.
pub fn render_errors(errors: &[ValidationError]) -> String {
    let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

/// Dashboard filter that carries the broken reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFilterRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Dashboard tile that carries the broken reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardElementRef {
    #[serde(default)]
    pub title: Option<String>,
}

/// One broken content item from a validator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawValidationItem {
    pub content: Content,

    /// Ordered validation errors; the validator never reports an item with
    /// an empty list.
    pub errors: Vec<ValidationError>,

    #[serde(default)]
    pub dashboard_filter: Option<DashboardFilterRef>,

    #[serde(default)]
    pub dashboard_element: Option<DashboardElementRef>,

    #[serde(default)]
    pub has_alert: bool,

    #[serde(default)]
    pub has_scheduled_plan: bool,
}

impl RawValidationItem {
    /// Create an item with no auxiliary associations.
    pub fn new(content: Content, errors: Vec<ValidationError>) -> Self {
        Self {
            content,
            errors,
            dashboard_filter: None,
            dashboard_element: None,
            has_alert: false,
            has_scheduled_plan: false,
        }
    }

    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }
}
