//! Fenced code block metadata.

use std::collections::HashMap;

use crate::highlight::Language;

/// A code snippet embedded in a page.
///
/// The source is literal example text. It is displayed, never executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetRef {
    /// Language resolved from the fence tag.
    pub language: Language,
    /// Tag as written in the fence (may be empty).
    pub tag: String,
    /// Snippet text exactly as it appears in the fence body.
    pub source: String,
    /// Optional caption from a `title="..."` fence attribute.
    pub title: Option<String>,
}

/// Parse a fence info string into language tag and attributes.
///
/// `typescript title="Rate limiter"` yields `("typescript", {title: "Rate limiter"})`.
/// Quoted values may contain spaces.
pub(crate) fn parse_fence_info(info: &str) -> (String, HashMap<String, String>) {
    let info = info.trim();
    let (language, mut rest) = info
        .split_once(char::is_whitespace)
        .unwrap_or((info, ""));

    let mut attrs = HashMap::new();
    loop {
        rest = rest.trim_start();
        let Some((key, after)) = rest.split_once('=') else {
            break;
        };
        let key = key.trim();
        let (value, remaining) = match after.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &after[1..];
                body.split_once(quote).unwrap_or((body, ""))
            }
            _ => after
                .split_once(char::is_whitespace)
                .unwrap_or((after, "")),
        };
        if !key.is_empty() && !key.contains(char::is_whitespace) {
            attrs.insert(key.to_owned(), value.to_owned());
        }
        rest = remaining;
    }

    (language.to_owned(), attrs)
}
