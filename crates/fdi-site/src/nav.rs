//! Sidebar navigation.
//!
//! The sidebar is a fixed, ordered list of [`NavEntry`] values. Rendering it
//! for a given [`CurrentRoute`] marks at most one entry active: the one whose
//! path equals the route exactly.

use std::collections::HashSet;

use serde::Serialize;

use crate::route::{CurrentRoute, is_canonical};
use crate::site::SiteError;

/// Sidebar entries of the guide, in display order.
pub const GUIDE_NAV: &[(&str, &str)] = &[
    ("/", "Introduction"),
    ("/decision-framework", "Decision Framework"),
    ("/secure-architecture", "Secure Architecture Design"),
    ("/input-validation", "Input Validation"),
    ("/api-security", "API Security Implementation"),
    ("/data-pipeline", "Data Pipeline Security"),
    ("/monitoring-systems", "Monitoring Systems"),
    ("/summary", "Summary"),
];

/// One sidebar link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Canonical route path.
    pub path: String,
    /// Display title.
    pub title: String,
}

impl NavEntry {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
        }
    }
}

/// Sidebar entry as displayed for a particular route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    pub path: String,
    pub title: String,
    /// Whether this entry matches the current route.
    pub active: bool,
}

/// Validated sidebar entries.
///
/// Paths are canonical and unique. Order is display order.
#[derive(Clone, Debug)]
pub struct Navigation {
    entries: Vec<NavEntry>,
}

impl Navigation {
    /// Validate and wrap `entries`.
    pub fn new(entries: Vec<NavEntry>) -> Result<Self, SiteError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !is_canonical(&entry.path) {
                return Err(SiteError::NonCanonicalPath(entry.path.clone()));
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(SiteError::DuplicatePath(entry.path.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The guide's sidebar ([`GUIDE_NAV`]).
    pub fn guide() -> Result<Self, SiteError> {
        Self::new(
            GUIDE_NAV
                .iter()
                .map(|(path, title)| NavEntry::new(*path, *title))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn get(&self, path: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sidebar items for `current`.
    pub fn sidebar(&self, current: &CurrentRoute) -> Vec<SidebarItem> {
        sidebar_items(&self.entries, current)
    }
}

/// Mark the entry whose path equals `current` as active.
///
/// Pure: the output depends only on the arguments. A route not in the list
/// leaves every item inactive.
#[must_use]
pub fn sidebar_items(entries: &[NavEntry], current: &CurrentRoute) -> Vec<SidebarItem> {
    entries
        .iter()
        .map(|entry| SidebarItem {
            path: entry.path.clone(),
            title: entry.title.clone(),
            active: entry.path == current.as_str(),
        })
        .collect()
}
