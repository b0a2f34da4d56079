//! Static syntax highlighting for code snippets.
//!
//! Highlighting is a pure function of `(source, language)`. The output is
//! HTML where every byte of the source appears escaped, either bare or
//! wrapped in `<span class="token KIND">`. Unknown languages render as
//! escaped plain text.

mod grammar;

use std::fmt;

use crate::state::push_escaped;

/// Languages with highlighting rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
    Json,
    Yaml,
    Bash,
    /// Fallback for empty or unrecognised tags.
    #[default]
    PlainText,
}

impl Language {
    /// Resolve a fence tag such as `ts` or `typescript`.
    ///
    /// Matching is case-insensitive. Anything unrecognised maps to
    /// [`Language::PlainText`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "typescript" | "ts" | "tsx" => Self::TypeScript,
            "javascript" | "js" | "jsx" => Self::JavaScript,
            "json" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            "bash" | "sh" | "shell" => Self::Bash,
            _ => Self::PlainText,
        }
    }

    /// Canonical name, used in `language-*` CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Bash => "bash",
            Self::PlainText => "plaintext",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token categories. CSS classes follow the Prism naming scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Comment,
    String,
    Number,
    Keyword,
    Boolean,
    Builtin,
    Function,
    ClassName,
    Property,
    Variable,
    Operator,
    Punctuation,
    /// Unclassified word. Never emitted as a span.
    Identifier,
}

impl TokenKind {
    fn css_class(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::String => "string",
            Self::Number => "number",
            Self::Keyword => "keyword",
            Self::Boolean => "boolean",
            Self::Builtin => "builtin",
            Self::Function => "function",
            Self::ClassName => "class-name",
            Self::Property => "property",
            Self::Variable => "variable",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::Identifier => "identifier",
        }
    }
}

/// Highlight `source` as `language`, returning the inner HTML of a `<code>`
/// element.
#[must_use]
pub fn highlight(source: &str, language: Language) -> String {
    let mut out = String::with_capacity(source.len() * 2);

    let Some(grammar) = grammar::grammar_for(language) else {
        push_escaped(&mut out, source);
        return out;
    };

    let mut cursor = 0;
    for token in grammar.tokens(source) {
        push_escaped(&mut out, &source[cursor..token.start]);
        let text = &source[token.start..token.end];
        match token.kind {
            Some(kind) if kind != TokenKind::Identifier => {
                out.push_str(r#"<span class="token "#);
                out.push_str(kind.css_class());
                out.push_str(r#"">"#);
                push_escaped(&mut out, text);
                out.push_str("</span>");
            }
            _ => push_escaped(&mut out, text),
        }
        cursor = token.end;
    }
    push_escaped(&mut out, &source[cursor..]);

    out
}

/// A displayed snippet.
///
/// Holds the literal source, its language and the highlighted HTML. The HTML
/// is recomputed whenever the source or language changes, so it always
/// matches the current input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBlock {
    language: Language,
    source: String,
    html: String,
}

impl CodeBlock {
    #[must_use]
    pub fn new(source: impl Into<String>, language: Language) -> Self {
        let source = source.into();
        let html = highlight(&source, language);
        Self {
            language,
            source,
            html,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Highlighted inner HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Replace the source. Returns `true` if the content changed.
    pub fn set_source(&mut self, source: impl Into<String>) -> bool {
        let source = source.into();
        if source == self.source {
            return false;
        }
        self.source = source;
        self.refresh();
        true
    }

    /// Replace the language. Returns `true` if it changed.
    pub fn set_language(&mut self, language: Language) -> bool {
        if language == self.language {
            return false;
        }
        self.language = language;
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        self.html = highlight(&self.source, self.language);
    }

    /// Full read-only block markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        let lang = self.language.as_str();
        format!(
            r#"<div class="code-block"><pre class="language-{lang}"><code class="language-{lang}">{}</code></pre></div>"#,
            self.html
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use pretty_assertions::assert_eq;
    use regex::Regex;

    use super::*;

    static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

    /// Drop span tags and decode entities to recover the displayed text.
    fn displayed_text(html: &str) -> String {
        TAG.replace_all(html, "")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&amp;", "&")
    }

    const SAMPLES: &[(&str, &str)] = &[
        (
            "typescript",
            "interface RiskResult { score: number; }\nconst r = await fetch(`${url}/v1`); // <b>\n",
        ),
        ("javascript", "if (a && b <= 3) { return \"<script>\"; }"),
        ("json", r#"{"html": "<img src=x onerror='a'>", "n": -1.5e3}"#),
        ("yaml", "steps:\n  - run: echo \"a & b\" # <done>\n"),
        ("bash", "curl -H 'X: <y>' ${HOST}/api && echo $? > out"),
        ("plaintext", "<h1>Not a heading</h1> & 'quotes'"),
        ("cobol", "DISPLAY '<HELLO>'."),
    ];

    #[test]
    fn test_from_tag_aliases() {
        assert_eq!(Language::from_tag("ts"), Language::TypeScript);
        assert_eq!(Language::from_tag("TypeScript"), Language::TypeScript);
        assert_eq!(Language::from_tag("js"), Language::JavaScript);
        assert_eq!(Language::from_tag("yml"), Language::Yaml);
        assert_eq!(Language::from_tag("shell"), Language::Bash);
        assert_eq!(Language::from_tag("json"), Language::Json);
    }

    #[test]
    fn test_from_tag_unknown_falls_back() {
        assert_eq!(Language::from_tag(""), Language::PlainText);
        assert_eq!(Language::from_tag("brainfuck"), Language::PlainText);
        assert_eq!(Language::from_tag("plaintext"), Language::PlainText);
    }

    #[test]
    fn test_highlight_is_deterministic() {
        for (tag, source) in SAMPLES {
            let language = Language::from_tag(tag);
            assert_eq!(highlight(source, language), highlight(source, language));
        }
    }

    #[test]
    fn test_highlight_escaping_is_lossless() {
        for (tag, source) in SAMPLES {
            let html = highlight(source, Language::from_tag(tag));
            assert_eq!(&displayed_text(&html), source, "language {tag}");
        }
    }

    #[test]
    fn test_highlight_never_emits_source_markup() {
        for (tag, source) in SAMPLES {
            let html = highlight(source, Language::from_tag(tag));
            let without_spans = html
                .replace("</span>", "")
                .split(r#"<span class="token "#)
                .map(|part| part.split_once(r#"">"#).map_or(part, |(_, rest)| rest))
                .collect::<String>();
            assert!(!without_spans.contains('<'), "{tag}: {html}");
            assert!(!without_spans.contains('>'), "{tag}: {html}");
        }
    }

    #[test]
    fn test_plaintext_has_no_spans() {
        let html = highlight("const x = 1;", Language::PlainText);
        assert_eq!(html, "const x = 1;");
    }

    #[test]
    fn test_typescript_spans() {
        let html = highlight("const ok = true;", Language::TypeScript);
        assert_eq!(
            html,
            concat!(
                r#"<span class="token keyword">const</span> ok "#,
                r#"<span class="token operator">=</span> "#,
                r#"<span class="token boolean">true</span>"#,
                r#"<span class="token punctuation">;</span>"#,
            )
        );
    }

    #[test]
    fn test_string_escaped_inside_span() {
        let html = highlight(r#"x = "<b>";"#, Language::JavaScript);
        assert!(html.contains(r#"<span class="token string">&quot;&lt;b&gt;&quot;</span>"#));
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(highlight("", Language::TypeScript), "");
        assert_eq!(
            CodeBlock::new("", Language::Json).to_html(),
            r#"<div class="code-block"><pre class="language-json"><code class="language-json"></code></pre></div>"#
        );
    }

    #[test]
    fn test_code_block_recomputes_on_source_change() {
        let mut block = CodeBlock::new("let a = 1;", Language::TypeScript);
        let before = block.html().to_owned();

        assert!(!block.set_source("let a = 1;"));
        assert_eq!(block.html(), before);

        assert!(block.set_source("let b = 2;"));
        assert_eq!(block.html(), highlight("let b = 2;", Language::TypeScript));
    }

    #[test]
    fn test_code_block_recomputes_on_language_change() {
        let mut block = CodeBlock::new("const a = 1;", Language::TypeScript);
        assert!(block.set_language(Language::PlainText));
        assert_eq!(block.html(), "const a = 1;");
        assert!(!block.set_language(Language::PlainText));
        assert_eq!(block.language(), Language::PlainText);
    }

    #[test]
    fn test_code_block_to_html_class() {
        let block = CodeBlock::new("a: 1", Language::from_tag("yml"));
        let html = block.to_html();
        assert!(html.starts_with(r#"<div class="code-block"><pre class="language-yaml">"#));
        assert!(html.contains(r#"<code class="language-yaml">"#));
        assert_eq!(block.source(), "a: 1");
    }
}
