//! Regex-layered syntax highlighting
//!
//! Source text is HTML-escaped first, then an ordered cascade of rules
//! classifies the escaped text. Each rule only sees text that the earlier
//! rules left unclassified, so spans never nest and a keyword inside a
//! string or comment stays part of that string or comment.
//!
//! Classification is lexical and language-agnostic: the language tag of a
//! block selects its outer style only.

use regex::Regex;
use std::sync::LazyLock;

use crate::escape::{entity_len, escape_html};
use crate::types::{MarkupFragment, Span, TokenClass};

/// Reserved words across the languages chat answers usually contain
const KEYWORDS: &[&str] = &[
    // control flow
    "if", "else", "elif", "for", "while", "do", "loop", "break", "continue", "return", "switch",
    "case", "default", "match", "try", "catch", "except", "finally", "throw", "throws", "raise",
    "yield", "await", "async", "in", "of", "goto", "when", "then",
    // declarations
    "function", "fn", "def", "class", "struct", "enum", "trait", "impl", "interface", "type",
    "let", "const", "var", "mut", "static", "import", "export", "from", "as", "use", "mod",
    "package", "module", "extends", "implements", "new", "delete", "typeof", "instanceof",
    "lambda", "with", "where", "func", "go", "defer", "namespace", "using", "template",
    // visibility and modifiers
    "public", "private", "protected", "internal", "pub", "crate", "abstract", "final",
    "override", "virtual", "readonly", "sealed", "extern", "unsafe", "volatile",
    // literals and self references
    "true", "false", "null", "nil", "None", "True", "False", "undefined", "void", "this",
    "self", "Self", "super", "and", "or", "not", "is", "pass", "global", "nonlocal",
    // SQL clauses
    "SELECT", "FROM", "WHERE", "INSERT", "INTO", "UPDATE", "DELETE", "SET", "VALUES", "JOIN",
    "LEFT", "RIGHT", "INNER", "OUTER", "ON", "GROUP", "ORDER", "BY", "HAVING", "LIMIT",
    "OFFSET", "CREATE", "TABLE", "DROP", "ALTER", "INDEX", "AND", "OR", "NOT", "NULL", "AS",
    "DISTINCT", "UNION", "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "DEFAULT", "EXISTS",
];

/// Runtime globals and common standard-library call names
const BUILTINS: &[&str] = &[
    // JavaScript runtime
    "console", "window", "document", "Math", "JSON", "Object", "Array", "String", "Number",
    "Boolean", "Promise", "Date", "Map", "Set", "Symbol", "Error", "RegExp", "parseInt",
    "parseFloat", "setTimeout", "setInterval", "clearTimeout", "fetch", "require", "process",
    "localStorage", "alert",
    // Python
    "print", "len", "range", "enumerate", "zip", "map", "filter", "sorted", "list", "dict",
    "tuple", "set", "str", "int", "float", "bool", "open", "input", "isinstance", "super",
    "sum", "min", "max", "abs",
    // Rust, Go, Java, C
    "println", "eprintln", "format", "vec", "panic", "assert", "assert_eq", "Vec", "Box",
    "Option", "Result", "Some", "Ok", "Err", "fmt", "make", "append", "System", "printf",
    "malloc", "free", "sizeof",
];

/// One step of the cascade: a pattern and the class it assigns.
///
/// When the pattern has a `tok` group only that group is classified; the rest
/// of the match is context and stays available to later rules.
struct Rule {
    class: TokenClass,
    pattern: Regex,
}

impl Rule {
    fn new(class: TokenClass, pattern: &str) -> Self {
        Self {
            class,
            pattern: Regex::new(pattern).expect("static highlight pattern"),
        }
    }

    /// Split one unclassified run of text into plain and classified spans
    fn apply(&self, text: &str, out: &mut Vec<Span>) {
        let mut last = 0;
        let mut pos = 0;

        while pos < text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };
            let Some(tok) = caps.name("tok").or_else(|| caps.get(0)) else {
                break;
            };

            if tok.is_empty() || splits_entity(text, tok.start()) || splits_entity(text, tok.end()) {
                pos = next_char_boundary(text, tok.start().max(pos));
                continue;
            }

            if tok.start() > last {
                out.push(Span::plain(&text[last..tok.start()]));
            }
            out.push(Span::styled(tok.as_str(), self.class));
            last = tok.end();
            pos = tok.end();
        }

        if last < text.len() {
            out.push(Span::plain(&text[last..]));
        }
    }
}

/// True when `boundary` falls strictly inside an `&…;` entity
fn splits_entity(text: &str, boundary: usize) -> bool {
    let mut window_start = boundary.saturating_sub(4);
    while !text.is_char_boundary(window_start) {
        window_start += 1;
    }
    let Some(window) = text.get(window_start..boundary) else {
        return false;
    };
    match window.rfind('&') {
        Some(offset) => {
            let start = window_start + offset;
            entity_len(&text[start..]).is_some_and(|len| start + len > boundary)
        }
        None => false,
    }
}

fn next_char_boundary(text: &str, from: usize) -> usize {
    text[from..]
        .chars()
        .next()
        .map(|c| from + c.len_utf8())
        .unwrap_or(text.len())
}

fn word_list(words: &[&str]) -> String {
    format!(r"\b(?:{})\b", words.join("|"))
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // 1. comments
        Rule::new(TokenClass::Comment, r"/\*(?s:.*?)\*/"),
        Rule::new(TokenClass::Comment, r"(?m)(?:^|[^:\\])(?P<tok>//[^\n]*)"),
        Rule::new(TokenClass::Comment, r"(?m)(?:^|[ \t])(?P<tok>#[^\n]*)"),
        // 2. strings
        Rule::new(
            TokenClass::String,
            r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|`(?:[^`\\]|\\(?s:.))*`"#,
        ),
        // 3. keywords
        Rule::new(TokenClass::Keyword, &word_list(KEYWORDS)),
        // 4. built-ins
        Rule::new(TokenClass::Builtin, &word_list(BUILTINS)),
        // 5. numbers
        Rule::new(
            TokenClass::Number,
            r"\b(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?)\b",
        ),
        // 6. call sites
        Rule::new(TokenClass::Function, r"\b(?P<tok>[A-Za-z_][A-Za-z0-9_]*)\s*\("),
        // 7. decorators
        Rule::new(TokenClass::Decorator, r"@[A-Za-z_][A-Za-z0-9_.]*"),
        // 8. tag-like sequences, in escaped form; claimed ahead of operators
        // so `&lt;` and `/` of `&lt;/div` are not split off as operators
        Rule::new(TokenClass::Tag, r"&lt;/?[A-Za-z][A-Za-z0-9_:-]*"),
        // 9. operators
        Rule::new(
            TokenClass::Operator,
            r"===|!==|\*\*=|&lt;&lt;=|&gt;&gt;=|&lt;=&gt;|=&gt;|-&gt;|&lt;&lt;|&gt;&gt;|&lt;=|&gt;=|&amp;&amp;|&amp;=|\|\||\|=|==|!=|\+\+|--|\+=|-=|\*=|/=|%=|\^=|\*\*|::|&lt;|&gt;|&amp;|[=+\-*/%!|^~?]",
        ),
        // 10. property access
        Rule::new(TokenClass::Property, r"\.[A-Za-z_][A-Za-z0-9_]*"),
        // 11. capitalized identifiers
        Rule::new(TokenClass::Type, r"\b[A-Z][A-Za-z0-9_]*\b"),
    ]
});

/// Highlight source text into escaped, classified spans.
///
/// Never fails: unbalanced quotes or comments simply do not match and pass
/// through as plain text.
pub fn highlight(source: &str) -> MarkupFragment {
    if source.is_empty() {
        return MarkupFragment::new();
    }

    let mut spans = vec![Span::plain(escape_html(source))];
    for rule in RULES.iter() {
        let mut next = Vec::with_capacity(spans.len() * 2);
        for span in spans {
            if span.is_styled() {
                next.push(span);
            } else {
                rule.apply(&span.text, &mut next);
            }
        }
        spans = next;
    }

    MarkupFragment::from_spans(spans)
}
