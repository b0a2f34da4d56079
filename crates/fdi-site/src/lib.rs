//! Navigation, routing and layout for the fraud detection integration guide.
//!
//! This crate provides:
//! - [`Site`]: validated navigation plus one rendered [`ContentPage`] per route
//! - [`Navigator`]: a session that owns the [`CurrentRoute`]
//! - [`render_document`]: the two-pane HTML layout with sidebar
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), fdi_site::SiteError> {
//! use fdi_site::{CurrentRoute, Site, SiteInfo, render_document};
//!
//! let site = Site::guide(SiteInfo::default())?;
//! let view = render_document(&site, &CurrentRoute::new("/input-validation"));
//! assert!(view.found);
//!
//! let missing = render_document(&site, &CurrentRoute::new("/does-not-exist"));
//! assert!(!missing.found);
//! # Ok(())
//! # }
//! ```

mod layout;
mod nav;
mod navigator;
mod page;
mod route;
mod site;

pub use layout::{
    NOT_FOUND_TITLE, RenderedView, STYLESHEET_PATH, render_document, render_layout,
    render_not_found, render_sidebar,
};
pub use nav::{GUIDE_NAV, NavEntry, Navigation, SidebarItem, sidebar_items};
pub use navigator::{Navigator, View};
pub use page::{ContentPage, GUIDE_PAGES, PageSource};
pub use route::{CurrentRoute, canonicalize, is_canonical};
pub use site::{RouteMatch, Site, SiteError, SiteInfo};

// Re-export renderer types that appear in the public API
pub use fdi_renderer::{Language, SnippetRef, TocEntry};
