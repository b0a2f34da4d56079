//! The site model.
//!
//! A [`Site`] pairs the validated [`Navigation`] with one rendered
//! [`ContentPage`] per route. It is built once and never mutated, so a
//! single instance can be shared across threads behind an `Arc`.

use std::collections::HashMap;

use crate::nav::Navigation;
use crate::page::{ContentPage, GUIDE_PAGES, PageSource};
use crate::route::{CurrentRoute, is_canonical};

/// Error building a [`Site`].
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Two navigation entries or page sources share a path.
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),
    /// A path is not in canonical form (leading slash, no trailing slash).
    #[error("Route path is not canonical: {0}")]
    NonCanonicalPath(String),
    /// A navigation entry has no page.
    #[error("Navigation entry {0} has no content page")]
    MissingPage(String),
}

/// Site header shown above the sidebar links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    pub title: String,
    pub author: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Secure AI Fraud Detection Integration".to_owned(),
            author: "Vladyslav Davydenko".to_owned(),
        }
    }
}

/// Result of resolving a route.
#[derive(Clone, Copy, Debug)]
pub enum RouteMatch<'a> {
    Page(&'a ContentPage),
    /// No page for the route. Rendered as the fallback view.
    NotFound,
}

impl<'a> RouteMatch<'a> {
    pub fn page(self) -> Option<&'a ContentPage> {
        match self {
            Self::Page(page) => Some(page),
            Self::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Self::Page(_))
    }
}

/// Navigation plus rendered pages.
#[derive(Debug)]
pub struct Site {
    info: SiteInfo,
    navigation: Navigation,
    pages: HashMap<String, ContentPage>,
}

impl Site {
    /// Build the guide with its fixed navigation and compiled-in pages.
    pub fn guide(info: SiteInfo) -> Result<Self, SiteError> {
        Self::new(info, Navigation::guide()?, GUIDE_PAGES)
    }

    /// Render `sources` and check that every navigation entry has a page.
    pub fn new(
        info: SiteInfo,
        navigation: Navigation,
        sources: &[PageSource],
    ) -> Result<Self, SiteError> {
        let mut pages = HashMap::with_capacity(sources.len());

        for source in sources {
            if !is_canonical(source.path) {
                return Err(SiteError::NonCanonicalPath(source.path.to_owned()));
            }
            if pages.contains_key(source.path) {
                return Err(SiteError::DuplicatePath(source.path.to_owned()));
            }
            let fallback_title = navigation
                .get(source.path)
                .map_or(source.path, |entry| entry.title.as_str());
            let page = ContentPage::render(source.path, fallback_title, source.markdown);
            tracing::debug!(
                path = source.path,
                snippets = page.snippets().len(),
                "Rendered page"
            );
            pages.insert(source.path.to_owned(), page);
        }

        if let Some(entry) = navigation
            .entries()
            .iter()
            .find(|entry| !pages.contains_key(&entry.path))
        {
            return Err(SiteError::MissingPage(entry.path.clone()));
        }

        tracing::info!(pages = pages.len(), "Site built");

        Ok(Self {
            info,
            navigation,
            pages,
        })
    }

    pub fn info(&self) -> &SiteInfo {
        &self.info
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Exact-match lookup of the page for `route`.
    pub fn resolve(&self, route: &CurrentRoute) -> RouteMatch<'_> {
        self.pages
            .get(route.as_str())
            .map_or(RouteMatch::NotFound, RouteMatch::Page)
    }

    pub fn page(&self, path: &str) -> Option<&ContentPage> {
        self.pages.get(path)
    }

    /// Pages in navigation order.
    pub fn pages(&self) -> impl Iterator<Item = &ContentPage> {
        self.navigation
            .entries()
            .iter()
            .filter_map(|entry| self.pages.get(&entry.path))
    }
}

#[cfg(test)]
mod tests {
    use fdi_renderer::Language;

    use super::*;
    use crate::nav::NavEntry;

    static_assertions::assert_impl_all!(super::Site: Send, Sync);

    fn guide() -> Site {
        Site::guide(SiteInfo::default()).unwrap()
    }

    #[test]
    fn test_every_nav_entry_has_a_page() {
        let site = guide();
        for entry in site.navigation().entries() {
            let route = CurrentRoute::new(entry.path.clone());
            assert!(site.resolve(&route).is_found(), "{}", entry.path);
        }
        assert_eq!(site.pages().count(), 8);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        let site = guide();
        for path in ["/does-not-exist", "/synthesis/", "/summary/", "summary", ""] {
            assert!(!site.resolve(&CurrentRoute::new(path)).is_found(), "{path:?}");
        }
    }

    #[test]
    fn test_input_validation_page() {
        let site = guide();
        let page = site
            .resolve(&CurrentRoute::new("/input-validation"))
            .page()
            .unwrap();
        assert_eq!(page.title(), "Input Validation");
        assert!(page.html().contains("<p>"));
        assert!(
            page.snippets()
                .iter()
                .any(|s| s.language == Language::TypeScript)
        );
    }

    #[test]
    fn test_pages_in_navigation_order() {
        let site = guide();
        let paths: Vec<_> = site.pages().map(ContentPage::path).collect();
        let nav: Vec<_> = site
            .navigation()
            .entries()
            .iter()
            .map(|e| e.path.as_str())
            .collect();
        assert_eq!(paths, nav);
    }

    #[test]
    fn test_missing_page_is_error() {
        let nav = Navigation::new(vec![NavEntry::new("/", "Home"), NavEntry::new("/gone", "Gone")])
            .unwrap();
        let sources = [PageSource {
            path: "/",
            markdown: "# Home",
        }];
        let err = Site::new(SiteInfo::default(), nav, &sources).unwrap_err();
        assert!(matches!(err, SiteError::MissingPage(p) if p == "/gone"));
    }

    #[test]
    fn test_duplicate_page_source_is_error() {
        let nav = Navigation::new(vec![NavEntry::new("/", "Home")]).unwrap();
        let source = PageSource {
            path: "/",
            markdown: "# Home",
        };
        let err = Site::new(SiteInfo::default(), nav, &[source, source]).unwrap_err();
        assert!(matches!(err, SiteError::DuplicatePath(_)));
    }

    #[test]
    fn test_non_canonical_page_source_is_error() {
        let nav = Navigation::new(Vec::new()).unwrap();
        let source = PageSource {
            path: "/x/",
            markdown: "# X",
        };
        let err = Site::new(SiteInfo::default(), nav, &[source]).unwrap_err();
        assert!(matches!(err, SiteError::NonCanonicalPath(_)));
    }

    #[test]
    fn test_title_falls_back_to_nav_title() {
        let nav = Navigation::new(vec![NavEntry::new("/", "Home")]).unwrap();
        let sources = [PageSource {
            path: "/",
            markdown: "no heading",
        }];
        let site = Site::new(SiteInfo::default(), nav, &sources).unwrap();
        assert_eq!(site.page("/").unwrap().title(), "Home");
    }
}
