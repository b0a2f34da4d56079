//! Content pages.

use fdi_renderer::{MarkdownRenderer, SnippetRef, TocEntry};

/// Markdown source for one route.
#[derive(Clone, Copy, Debug)]
pub struct PageSource {
    pub path: &'static str,
    pub markdown: &'static str,
}

/// Pages of the guide, compiled into the binary.
pub const GUIDE_PAGES: &[PageSource] = &[
    PageSource {
        path: "/",
        markdown: include_str!("../content/introduction.md"),
    },
    PageSource {
        path: "/decision-framework",
        markdown: include_str!("../content/decision-framework.md"),
    },
    PageSource {
        path: "/secure-architecture",
        markdown: include_str!("../content/secure-architecture.md"),
    },
    PageSource {
        path: "/input-validation",
        markdown: include_str!("../content/input-validation.md"),
    },
    PageSource {
        path: "/api-security",
        markdown: include_str!("../content/api-security.md"),
    },
    PageSource {
        path: "/data-pipeline",
        markdown: include_str!("../content/data-pipeline.md"),
    },
    PageSource {
        path: "/monitoring-systems",
        markdown: include_str!("../content/monitoring-systems.md"),
    },
    PageSource {
        path: "/summary",
        markdown: include_str!("../content/summary.md"),
    },
];

/// A rendered, routable document.
///
/// Rendering happens once at construction. Same source always yields the
/// same HTML.
#[derive(Clone, Debug)]
pub struct ContentPage {
    path: String,
    title: String,
    html: String,
    toc: Vec<TocEntry>,
    snippets: Vec<SnippetRef>,
}

impl ContentPage {
    /// Render `markdown` for `path`.
    ///
    /// The title comes from the first H1, or `fallback_title` if there is none.
    pub fn render(path: impl Into<String>, fallback_title: &str, markdown: &str) -> Self {
        let result = MarkdownRenderer::new()
            .with_title_extraction()
            .render_markdown(markdown);

        Self {
            path: path.into(),
            title: result.title.unwrap_or_else(|| fallback_title.to_owned()),
            html: result.html,
            toc: result.toc,
            snippets: result.snippets,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rendered body HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn toc(&self) -> &[TocEntry] {
        &self.toc
    }

    /// Embedded code snippets in document order.
    pub fn snippets(&self) -> &[SnippetRef] {
        &self.snippets
    }
}
