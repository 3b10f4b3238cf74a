//! Record normalization: raw validator items to flat records.

use crate::content::{Content, RawValidationItem};
use crate::error::{CoreError, CoreResult};
use crate::fingerprint::fingerprint;
use crate::folder::FolderIndex;
use crate::record::{Flag, NormalizedRecord};

/// Normalize one validator item into a [`NormalizedRecord`].
///
/// Only the first validation error populates the `error_*` fields; the
/// fingerprint covers the whole error sequence.
///
/// # Errors
///
/// - [`CoreError::EmptyErrorList`] if the item carries no errors
/// - [`CoreError::FolderNotIndexed`] if the item's folder is missing from
///   `folders`
pub fn normalize(
    item: &RawValidationItem,
    folders: &FolderIndex,
    base_url: &str,
) -> CoreResult<NormalizedRecord> {
    let content_type = item.content_type();
    let content = item.content.reference();
    let base_url = base_url.trim_end_matches('/');

    let first_error = item.errors.first().ok_or_else(|| CoreError::EmptyErrorList {
        content_type: content_type.to_string(),
        content_id: content.id.to_string(),
    })?;

    let element = resolve_element(item);

    let folder_id = &content.folder.id;
    let folder = folders
        .lookup(folder_id)
        .ok_or_else(|| CoreError::FolderNotIndexed {
            content_type: content_type.to_string(),
            content_id: content.id.to_string(),
            folder_id: folder_id.to_string(),
        })?;

    let (parent_folder_name, parent_folder_url) = match folder.parent() {
        Some(parent_id) => {
            let name = folders.lookup(parent_id).and_then(|p| p.name.clone());
            if name.is_none() {
                log::debug!("Parent folder {} of folder {} has no name", parent_id, folder_id);
            }
            (name, Some(format!("{}/folders/{}", base_url, parent_id)))
        }
        None => (None, None),
    };

    let unique_id = fingerprint(
        &content.id,
        element.as_deref(),
        content.title.as_deref(),
        &item.errors,
        folder_id,
    );

    Ok(NormalizedRecord {
        unique_id,
        id: content.id.clone(),
        content_type,
        content_name: content.title.clone(),
        url: format!("{}/{}/{}", base_url, content_type.url_segment(), content.id),
        element,
        is_filter: Flag::from(item.dashboard_filter.is_some()),
        has_alert: Flag::from(item.has_alert),
        is_scheduled: Flag::from(item.has_scheduled_plan),
        folder_name: content.folder.name.clone(),
        folder_url: format!("{}/folders/{}", base_url, folder_id),
        parent_folder_name,
        parent_folder_url,
        error_message: first_error.message.clone(),
        error_model: first_error.model_name.clone(),
        error_explore: first_error.explore_name.clone(),
    })
}

/// Normalize every item of one validator run, preserving order.
pub fn normalize_all(
    items: &[RawValidationItem],
    folders: &FolderIndex,
    base_url: &str,
) -> CoreResult<Vec<NormalizedRecord>> {
    items
        .iter()
        .map(|item| normalize(item, folders, base_url))
        .collect()
}

/// Describe the broken sub-element.
///
/// Looks name themselves; on dashboards a broken filter wins over a broken
/// tile. A dashboard with neither has no element.
fn resolve_element(item: &RawValidationItem) -> Option<String> {
    match &item.content {
        Content::Look(look) => Some(format!(
            "Look Name = {}",
            look.title.as_deref().unwrap_or("None")
        )),
        Content::Dashboard(_) => {
            if let Some(filter) = &item.dashboard_filter {
                Some(format!(
                    "Filter Name = {}",
                    filter.name.as_deref().unwrap_or("None")
                ))
            } else {
                item.dashboard_element
                    .as_ref()
                    .and_then(|element| element.title.clone())
            }
        }
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
