//! Single-owner navigation session.

use std::sync::Arc;

use crate::layout::{RenderedView, render_layout};
use crate::nav::SidebarItem;
use crate::route::CurrentRoute;
use crate::site::{RouteMatch, Site};

/// What is on screen after a navigation.
#[derive(Debug)]
pub struct View<'a> {
    pub route: &'a CurrentRoute,
    pub content: RouteMatch<'a>,
    pub sidebar: Vec<SidebarItem>,
}

/// Owns the [`CurrentRoute`] of one session.
///
/// The route changes only through [`navigate`](Self::navigate), which
/// resolves the page and the sidebar highlight before returning, so the two
/// always agree.
#[derive(Debug)]
pub struct Navigator {
    site: Arc<Site>,
    current: CurrentRoute,
}

impl Navigator {
    /// Start a session at the site root.
    pub fn new(site: Arc<Site>) -> Self {
        Self {
            site,
            current: CurrentRoute::root(),
        }
    }

    pub fn current(&self) -> &CurrentRoute {
        &self.current
    }

    /// Move to `path` (matched exactly) and return the new view.
    pub fn navigate(&mut self, path: &str) -> View<'_> {
        self.current = CurrentRoute::new(path);
        tracing::debug!(route = %self.current, "Navigate");
        self.view()
    }

    /// The view for the current route.
    pub fn view(&self) -> View<'_> {
        View {
            route: &self.current,
            content: self.site.resolve(&self.current),
            sidebar: self.site.navigation().sidebar(&self.current),
        }
    }

    /// The current view as a full HTML document.
    pub fn render(&self) -> RenderedView {
        let view = self.view();
        RenderedView {
            html: render_layout(self.site.info(), &view.sidebar, view.content),
            found: view.content.is_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::render_document;
    use crate::site::SiteInfo;

    fn navigator() -> Navigator {
        Navigator::new(Arc::new(Site::guide(SiteInfo::default()).unwrap()))
    }

    fn active(view: &View<'_>) -> Vec<String> {
        view.sidebar
            .iter()
            .filter(|i| i.active)
            .map(|i| i.path.clone())
            .collect()
    }

    #[test]
    fn test_starts_at_root() {
        let nav = navigator();
        assert!(nav.current().is_root());
        let view = nav.view();
        assert_eq!(view.content.page().unwrap().title(), "Introduction");
        assert_eq!(active(&view), ["/"]);
    }

    #[test]
    fn test_navigate_updates_page_and_highlight_together() {
        let mut nav = navigator();
        let view = nav.navigate("/input-validation");
        assert_eq!(view.route.as_str(), "/input-validation");
        assert_eq!(view.content.page().unwrap().path(), "/input-validation");
        assert_eq!(active(&view), ["/input-validation"]);
        assert_eq!(nav.current().as_str(), "/input-validation");
    }

    #[test]
    fn test_navigate_to_unknown_route() {
        let mut nav = navigator();
        let view = nav.navigate("/does-not-exist");
        assert!(view.content.page().is_none());
        assert!(active(&view).is_empty());
        assert!(!nav.render().found);
    }

    #[test]
    fn test_sequential_navigation() {
        let mut nav = navigator();
        for path in ["/summary", "/nope", "/api-security", "/"] {
            nav.navigate(path);
            let view = nav.view();
            assert_eq!(view.route.as_str(), path);
            assert_eq!(view.content.is_found(), path != "/nope");
        }
    }

    #[test]
    fn test_render_matches_render_document() {
        let mut nav = navigator();
        nav.navigate("/summary");
        let site = Site::guide(SiteInfo::default()).unwrap();
        assert_eq!(nav.render(), render_document(&site, &CurrentRoute::new("/summary")));
    }
}
