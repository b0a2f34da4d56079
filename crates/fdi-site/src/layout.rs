//! Two-pane page layout.
//!
//! Every view is a full HTML document: the sidebar on the left and a
//! scrollable content pane on the right holding either the matched page or
//! the fallback view.

use std::fmt::Write;

use fdi_renderer::escape_html;

use crate::nav::SidebarItem;
use crate::route::CurrentRoute;
use crate::site::{RouteMatch, Site, SiteInfo};

/// Stylesheet location, served from the embedded assets.
pub const STYLESHEET_PATH: &str = "/assets/styles.css";

/// Heading of the fallback view.
pub const NOT_FOUND_TITLE: &str = "Page not found";

/// A rendered document and whether a page matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedView {
    pub html: String,
    pub found: bool,
}

/// Render the full document for `route`.
pub fn render_document(site: &Site, route: &CurrentRoute) -> RenderedView {
    let matched = site.resolve(route);
    let sidebar = site.navigation().sidebar(route);
    RenderedView {
        html: render_layout(site.info(), &sidebar, matched),
        found: matched.is_found(),
    }
}

/// Assemble sidebar and content into a document.
pub fn render_layout(info: &SiteInfo, sidebar: &[SidebarItem], matched: RouteMatch<'_>) -> String {
    let (page_title, content) = match matched {
        RouteMatch::Page(page) => (page.title(), page.html().to_owned()),
        RouteMatch::NotFound => (NOT_FOUND_TITLE, render_not_found()),
    };

    let mut out = String::with_capacity(content.len() + 2048);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    writeln!(
        out,
        "<title>{} | {}</title>",
        escape_html(page_title),
        escape_html(&info.title)
    )
    .unwrap();
    writeln!(out, r#"<link rel="stylesheet" href="{STYLESHEET_PATH}">"#).unwrap();
    out.push_str("</head>\n<body>\n<div class=\"layout\">\n");
    out.push_str(&render_sidebar(info, sidebar));
    out.push_str("\n<main class=\"content\">\n<article class=\"page\">");
    out.push_str(&content);
    out.push_str("</article>\n</main>\n</div>\n</body>\n</html>\n");
    out
}

/// Render the sidebar: site header then one link per entry.
pub fn render_sidebar(info: &SiteInfo, items: &[SidebarItem]) -> String {
    let mut out = String::from(r#"<nav class="sidebar">"#);
    write!(
        out,
        r#"<div class="sidebar-header"><h1>{}</h1><p class="author">{}</p></div><ul>"#,
        escape_html(&info.title),
        escape_html(&info.author)
    )
    .unwrap();

    for item in items {
        let (class, current) = if item.active {
            ("nav-link active", r#" aria-current="page""#)
        } else {
            ("nav-link", "")
        };
        write!(
            out,
            r#"<li><a href="{}" class="{class}"{current}>{}</a></li>"#,
            escape_html(&item.path),
            escape_html(&item.title)
        )
        .unwrap();
    }

    out.push_str("</ul></nav>");
    out
}

/// Content of the fallback view.
pub fn render_not_found() -> String {
    format!(
        r#"<h1 id="page-not-found">{NOT_FOUND_TITLE}</h1><p>The page you requested does not exist. Choose a section from the sidebar or return to the <a href="/">Introduction</a>.</p>"#
    )
}
