//! Token rules for each supported language.
//!
//! A grammar is an ordered list of `(kind, pattern)` rules compiled into a
//! single alternation. Earlier rules win at the same position, so comments
//! and strings come before anything that could match inside them. Patterns
//! must use non-capturing groups and must not match the empty string.
//!
//! Identifiers are matched generically and classified afterwards using the
//! keyword tables and the text that follows them.

use std::sync::LazyLock;

use regex::Regex;

use super::{Language, TokenKind};

const DOUBLE_QUOTED: &str = r#""(?:[^"\\\n]|\\.)*""#;
const SINGLE_QUOTED: &str = r"'(?:[^'\\\n]|\\.)*'";
const BACKTICK: &str = r"(?s:`(?:[^`\\]|\\.)*`)";

const JS_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
    "delete", "do", "else", "export", "extends", "finally", "for", "from", "function", "if",
    "import", "in", "instanceof", "let", "new", "null", "of", "return", "static", "super",
    "switch", "this", "throw", "try", "typeof", "undefined", "var", "void", "while", "yield",
];

const TS_KEYWORDS: &[&str] = &[
    "abstract", "declare", "enum", "implements", "interface", "keyof", "namespace", "private",
    "protected", "public", "readonly", "type",
];

const TS_BUILTINS: &[&str] = &[
    "any", "bigint", "boolean", "never", "number", "object", "string", "symbol", "unknown",
];

const BASH_KEYWORDS: &[&str] = &[
    "case", "do", "done", "elif", "else", "esac", "export", "fi", "for", "function", "if", "in",
    "local", "return", "then", "until", "while",
];

const BASH_BUILTINS: &[&str] = &["cd", "echo", "exit", "printf", "read", "set", "source", "unset"];

/// Compiled rules for one language.
pub(super) struct Grammar {
    regex: Regex,
    kinds: Vec<TokenKind>,
    language: Language,
}

/// A classified token within the source text.
pub(super) struct Token {
    pub(super) start: usize,
    pub(super) end: usize,
    pub(super) kind: Option<TokenKind>,
}

impl Grammar {
    fn compile(language: Language, rules: &[(TokenKind, &str)]) -> Self {
        let pattern = rules
            .iter()
            .map(|(_, p)| format!("({p})"))
            .collect::<Vec<_>>()
            .join("|");
        Self {
            regex: Regex::new(&pattern).expect("grammar rules form a valid pattern"),
            kinds: rules.iter().map(|(kind, _)| *kind).collect(),
            language,
        }
    }

    /// Iterate over matched tokens in order. Text between tokens is plain.
    pub(super) fn tokens<'a>(&'a self, source: &'a str) -> impl Iterator<Item = Token> + 'a {
        self.regex.captures_iter(source).filter_map(move |caps| {
            let (index, m) = caps
                .iter()
                .skip(1)
                .enumerate()
                .find_map(|(i, group)| group.map(|g| (i, g)))?;
            let rest = &source[m.end()..];
            Some(Token {
                start: m.start(),
                end: m.end(),
                kind: self.classify(self.kinds[index], m.as_str(), rest),
            })
        })
    }

    /// Refine a raw rule kind using the token text and what follows it.
    fn classify(&self, kind: TokenKind, text: &str, rest: &str) -> Option<TokenKind> {
        let next = rest.trim_start_matches([' ', '\t']).chars().next();
        match (self.language, kind) {
            (Language::Json, TokenKind::String) if next == Some(':') => Some(TokenKind::Property),
            (Language::Yaml, TokenKind::Identifier) => {
                if rest.starts_with(':') || rest.trim_start_matches([' ', '\t']).starts_with(": ") {
                    Some(TokenKind::Property)
                } else {
                    keyword_kind(self.language, text)
                }
            }
            (Language::TypeScript | Language::JavaScript, TokenKind::Identifier) => {
                keyword_kind(self.language, text).or_else(|| {
                    if next == Some('(') {
                        Some(TokenKind::Function)
                    } else if text.starts_with(|c: char| c.is_ascii_uppercase()) {
                        Some(TokenKind::ClassName)
                    } else {
                        None
                    }
                })
            }
            (_, TokenKind::Identifier) => keyword_kind(self.language, text),
            _ => Some(kind),
        }
    }
}

fn keyword_kind(language: Language, word: &str) -> Option<TokenKind> {
    if matches!(word, "true" | "false") {
        return Some(TokenKind::Boolean);
    }
    match language {
        Language::TypeScript if TS_KEYWORDS.contains(&word) || JS_KEYWORDS.contains(&word) => {
            Some(TokenKind::Keyword)
        }
        Language::TypeScript if TS_BUILTINS.contains(&word) => Some(TokenKind::Builtin),
        Language::JavaScript if JS_KEYWORDS.contains(&word) => Some(TokenKind::Keyword),
        Language::Json | Language::Yaml if word == "null" => Some(TokenKind::Keyword),
        Language::Bash if BASH_KEYWORDS.contains(&word) => Some(TokenKind::Keyword),
        Language::Bash if BASH_BUILTINS.contains(&word) => Some(TokenKind::Builtin),
        _ => None,
    }
}

fn script_rules() -> Vec<(TokenKind, &'static str)> {
    vec![
        (TokenKind::Comment, r"//[^\n]*|(?s:/\*.*?\*/)"),
        (TokenKind::String, DOUBLE_QUOTED),
        (TokenKind::String, SINGLE_QUOTED),
        (TokenKind::String, BACKTICK),
        (
            TokenKind::Number,
            r"\b(?:0[xX][0-9a-fA-F_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?n?)\b",
        ),
        (TokenKind::Identifier, r"[A-Za-z_$][\w$]*"),
        (
            TokenKind::Operator,
            r"=>|===|!==|==|!=|<=|>=|&&|\|\||\?\?|\?\.|\.\.\.|\+\+|--|[-+*/%=<>!&|^~?:]",
        ),
        (TokenKind::Punctuation, r"[{}\[\]();,.]"),
    ]
}

static TYPESCRIPT: LazyLock<Grammar> =
    LazyLock::new(|| Grammar::compile(Language::TypeScript, &script_rules()));

static JAVASCRIPT: LazyLock<Grammar> =
    LazyLock::new(|| Grammar::compile(Language::JavaScript, &script_rules()));

static JSON: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::compile(
        Language::Json,
        &[
            (TokenKind::String, DOUBLE_QUOTED),
            (TokenKind::Number, r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b"),
            (TokenKind::Identifier, r"[A-Za-z_]\w*"),
            (TokenKind::Punctuation, r"[{}\[\],:]"),
        ],
    )
});

static YAML: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::compile(
        Language::Yaml,
        &[
            (TokenKind::String, DOUBLE_QUOTED),
            (TokenKind::String, SINGLE_QUOTED),
            (TokenKind::Comment, r"#[^\n]*"),
            (TokenKind::Number, r"\b\d+(?:\.\d+)?\b"),
            (TokenKind::Identifier, r"[A-Za-z_][\w.-]*"),
            (TokenKind::Punctuation, r"[-:|>\[\]{},]"),
        ],
    )
});

static BASH: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::compile(
        Language::Bash,
        &[
            (TokenKind::Comment, r"#[^\n]*"),
            (TokenKind::String, DOUBLE_QUOTED),
            (TokenKind::String, SINGLE_QUOTED),
            (
                TokenKind::Variable,
                r"\$\{[^}\n]*\}|\$[A-Za-z_]\w*|\$[0-9@#?*!$-]",
            ),
            (TokenKind::Number, r"\b\d+\b"),
            (TokenKind::Identifier, r"[A-Za-z_][\w-]*"),
            (TokenKind::Operator, r"&&|\|\||[|&;<>=]"),
        ],
    )
});

/// Rules for `language`, or `None` for plain text.
pub(super) fn grammar_for(language: Language) -> Option<&'static Grammar> {
    match language {
        Language::TypeScript => Some(&TYPESCRIPT),
        Language::JavaScript => Some(&JAVASCRIPT),
        Language::Json => Some(&JSON),
        Language::Yaml => Some(&YAML),
        Language::Bash => Some(&BASH),
        Language::PlainText => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(language: Language, source: &str) -> Vec<(String, Option<TokenKind>)> {
        grammar_for(language)
            .unwrap()
            .tokens(source)
            .map(|t| (source[t.start..t.end].to_owned(), t.kind))
            .collect()
    }

    #[test]
    fn test_all_grammars_compile() {
        for language in [
            Language::TypeScript,
            Language::JavaScript,
            Language::Json,
            Language::Yaml,
            Language::Bash,
        ] {
            assert!(grammar_for(language).is_some());
        }
        assert!(grammar_for(Language::PlainText).is_none());
    }

    #[test]
    fn test_typescript_identifier_classification() {
        let tokens = kinds(Language::TypeScript, "const total: number = sum(items);");
        assert!(tokens.contains(&("const".to_owned(), Some(TokenKind::Keyword))));
        assert!(tokens.contains(&("number".to_owned(), Some(TokenKind::Builtin))));
        assert!(tokens.contains(&("sum".to_owned(), Some(TokenKind::Function))));
        assert!(tokens.contains(&("total".to_owned(), None)));
    }

    #[test]
    fn test_typescript_class_names() {
        let tokens = kinds(Language::TypeScript, "new FraudResponseSanitizer()");
        assert!(tokens.contains(&("FraudResponseSanitizer".to_owned(), Some(TokenKind::Function))));
        let tokens = kinds(Language::TypeScript, "let r: ValidationResult;");
        assert!(tokens.contains(&("ValidationResult".to_owned(), Some(TokenKind::ClassName))));
    }

    #[test]
    fn test_typescript_keywords_only_in_typescript() {
        let ts = kinds(Language::TypeScript, "interface A {}");
        let js = kinds(Language::JavaScript, "interface A {}");
        assert_eq!(ts[0].1, Some(TokenKind::Keyword));
        assert_eq!(js[0].1, None);
    }

    #[test]
    fn test_comment_wins_over_string_inside_it() {
        let tokens = kinds(Language::TypeScript, "// don't 'quote' me\nx");
        assert_eq!(tokens[0].0, "// don't 'quote' me");
        assert_eq!(tokens[0].1, Some(TokenKind::Comment));
    }

    #[test]
    fn test_template_literal_spans_lines() {
        let tokens = kinds(Language::JavaScript, "`a\nb`;");
        assert_eq!(tokens[0].0, "`a\nb`");
        assert_eq!(tokens[0].1, Some(TokenKind::String));
    }

    #[test]
    fn test_json_property_vs_value() {
        let tokens = kinds(Language::Json, r#"{"decision": "DENY", "score": 97, "ok": true}"#);
        assert!(tokens.contains(&("\"decision\"".to_owned(), Some(TokenKind::Property))));
        assert!(tokens.contains(&("\"DENY\"".to_owned(), Some(TokenKind::String))));
        assert!(tokens.contains(&("97".to_owned(), Some(TokenKind::Number))));
        assert!(tokens.contains(&("true".to_owned(), Some(TokenKind::Boolean))));
    }

    #[test]
    fn test_yaml_keys_and_comments() {
        let tokens = kinds(Language::Yaml, "runs-on: ubuntu-latest # runner\n");
        assert_eq!(tokens[0], ("runs-on".to_owned(), Some(TokenKind::Property)));
        assert!(tokens.contains(&("ubuntu-latest".to_owned(), None)));
        assert!(tokens.contains(&("# runner".to_owned(), Some(TokenKind::Comment))));
    }

    #[test]
    fn test_bash_variables_and_builtins() {
        let tokens = kinds(Language::Bash, r#"echo "$HOME" ${REDIS_URL} && exit 1"#);
        assert_eq!(tokens[0], ("echo".to_owned(), Some(TokenKind::Builtin)));
        assert!(tokens.contains(&("${REDIS_URL}".to_owned(), Some(TokenKind::Variable))));
        assert!(tokens.contains(&("&&".to_owned(), Some(TokenKind::Operator))));
    }
}
