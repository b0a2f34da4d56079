//! HTTP request handlers.

pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod site;

use md5::{Digest, Md5};

/// Convert a wildcard capture (no leading slash) to a route path.
///
/// `""` becomes `/`, `input-validation/` becomes `/input-validation`.
pub(crate) fn to_route_path(path: &str) -> String {
    fdi_site::canonicalize(path)
}

/// Compute a strong `ETag` from version and content.
///
/// Changes whenever the binary version or the rendered content changes.
pub(crate) fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}"));
    format!("\"{}\"", &hex::encode(hash)[..16])
}
