//! Route values.

use std::fmt;

/// The active canonical path.
///
/// Page selection and sidebar highlighting are driven by this value alone.
/// Matching against it is exact; callers normalise raw request paths with
/// [`CurrentRoute::from_request_path`] first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurrentRoute(String);

impl CurrentRoute {
    /// Wrap a path as-is.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The site root, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self("/".to_owned())
    }

    /// Build a route from a raw request path.
    ///
    /// Adds the leading slash and strips trailing slashes (except for the
    /// root), so `/api-security/` and `api-security` both become
    /// `/api-security`.
    #[must_use]
    pub fn from_request_path(raw: &str) -> Self {
        Self(canonicalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

impl Default for CurrentRoute {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for CurrentRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CurrentRoute {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalise a path to canonical form.
#[must_use]
pub fn canonicalize(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}")
    }
}

/// Whether `path` is already in canonical form.
#[must_use]
pub fn is_canonical(path: &str) -> bool {
    canonicalize(path) == path
}
