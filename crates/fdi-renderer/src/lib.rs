//! Markdown renderer with static syntax highlighting.
//!
//! [`MarkdownRenderer`] turns guide pages into HTML. Fenced code blocks are
//! rendered by the highlighter in [`highlight`](mod@highlight), which supports
//! a closed set of [`Language`]s and falls back to escaped plain text for
//! anything else.
//!
//! # Example
//!
//! ```
//! use fdi_renderer::{Language, MarkdownRenderer};
//!
//! let markdown = "# Hello\n\n```ts\nconst a = 1;\n```";
//! let result = MarkdownRenderer::new()
//!     .with_title_extraction()
//!     .render_markdown(markdown);
//!
//! assert_eq!(result.title.as_deref(), Some("Hello"));
//! assert_eq!(result.snippets[0].language, Language::TypeScript);
//! ```

mod code_block;
pub mod highlight;
mod renderer;
mod state;

pub use code_block::SnippetRef;
pub use highlight::{CodeBlock, Language, highlight};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{TocEntry, escape_html, slugify};
