//! Folder metadata and the in-memory folder index.

use crate::id::FolderId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Folder as returned by the folder directory (`id, parent_id, name` only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    pub id: FolderId,
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    #[serde(default)]
    pub name: Option<String>,
}

impl FolderRecord {
    /// Parent id, treating the literal `"None"` some instances return as absent.
    pub fn parent(&self) -> Option<&FolderId> {
        self.parent_id.as_ref().filter(|id| id.as_str() != "None")
    }
}

/// Read-only lookup from folder id to folder metadata.
///
/// Built once per run and shared by reference between the production and
/// development normalization passes.
#[derive(Debug, Clone, Default)]
pub struct FolderIndex {
    folders: HashMap<FolderId, FolderRecord>,
}

impl FolderIndex {
    /// Build the index. Later duplicates of an id replace earlier ones.
    pub fn build(folders: impl IntoIterator<Item = FolderRecord>) -> Self {
        let folders = folders
            .into_iter()
            .map(|folder| (folder.id.clone(), folder))
            .collect();
        Self { folders }
    }

    /// Look up a folder by its canonical id
    pub fn lookup(&self, id: &str) -> Option<&FolderRecord> {
        self.folders.get(id)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

#[cfg(test)]
#[path = "folder_test.rs"]
mod tests;
