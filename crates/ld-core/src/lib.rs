//! ld-core - Core library for Lookdiff
//!
//! This crate provides the broken content data model, the folder index,
//! record normalization and fingerprinting, snapshot diffing, the usage
//! join, and configuration parsing used across all Lookdiff components.

pub mod config;
pub mod content;
pub mod diff;
pub mod error;
pub mod fingerprint;
pub mod folder;
pub mod id;
pub mod normalize;
pub mod record;
pub mod usage;

pub use config::{Config, LookerConfig, UsageConfig};
pub use content::{
    Content, ContentRef, ContentType, DashboardElementRef, DashboardFilterRef, FolderRef,
    RawValidationItem, ValidationError,
};
pub use diff::diff_snapshots;
pub use error::{CoreError, CoreResult};
pub use fingerprint::fingerprint;
pub use folder::{FolderIndex, FolderRecord};
pub use id::{ContentId, FolderId};
pub use normalize::{normalize, normalize_all};
pub use record::{Flag, NormalizedRecord};
pub use usage::{dashboard_ids, enrich, EnrichedRecord, RunCount, UsageRecord};
