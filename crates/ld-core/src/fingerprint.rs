//! SHA-256 fingerprint identifying one broken-content occurrence.

use sha2::{Digest, Sha256};

use crate::content::{render_errors, ValidationError};

/// Compute SHA256 checksum of a string
pub fn compute_checksum(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}

/// Fingerprint of a broken content occurrence.
///
/// Dash-joins `id`, `element`, `content_name`, the rendered error sequence and
/// `folder_id`, with absent values rendered as `None`, and hashes the result.
/// Identical inputs produce the same fingerprint across validator runs.
pub fn fingerprint(
    id: &str,
    element: Option<&str>,
    content_name: Option<&str>,
    errors: &[ValidationError],
    folder_id: &str,
) -> String {
    let key = [
        id,
        element.unwrap_or("None"),
        content_name.unwrap_or("None"),
        &render_errors(errors),
        folder_id,
    ]
    .join("-");
    compute_checksum(&key)
}

#[cfg(test)]
#[path = "fingerprint_test.rs"]
mod tests;
