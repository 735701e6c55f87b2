//! Core type definitions for message parts and highlighted code

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Label used for code blocks whose fence carries no language token
pub const DEFAULT_LANGUAGE_LABEL: &str = "code";

/// Classification assigned to a highlighted span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenClass {
    Comment,
    String,
    Keyword,
    Builtin,
    Number,
    Function,
    Decorator,
    Operator,
    Property,
    Tag,
    Type,
}

impl TokenClass {
    /// Short name used in JSON output and CSS classes
    pub fn name(self) -> &'static str {
        match self {
            TokenClass::Comment => "comment",
            TokenClass::String => "string",
            TokenClass::Keyword => "keyword",
            TokenClass::Builtin => "builtin",
            TokenClass::Number => "number",
            TokenClass::Function => "function",
            TokenClass::Decorator => "decorator",
            TokenClass::Operator => "operator",
            TokenClass::Property => "property",
            TokenClass::Tag => "tag",
            TokenClass::Type => "type",
        }
    }

    /// CSS class applied to the wrapping `<span>` in HTML output
    pub fn css_class(self) -> &'static str {
        match self {
            TokenClass::Comment => "tok-comment",
            TokenClass::String => "tok-string",
            TokenClass::Keyword => "tok-keyword",
            TokenClass::Builtin => "tok-builtin",
            TokenClass::Number => "tok-number",
            TokenClass::Function => "tok-function",
            TokenClass::Decorator => "tok-decorator",
            TokenClass::Operator => "tok-operator",
            TokenClass::Property => "tok-property",
            TokenClass::Tag => "tok-tag",
            TokenClass::Type => "tok-type",
        }
    }
}

impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A run of escaped text, optionally classified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<TokenClass>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn styled(text: impl Into<String>, class: TokenClass) -> Self {
        Self {
            text: text.into(),
            class: Some(class),
        }
    }

    pub fn is_styled(&self) -> bool {
        self.class.is_some()
    }
}

/// Highlighted output: escaped source text split into non-overlapping spans.
///
/// Concatenating the span text always yields the escaped source exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkupFragment {
    spans: Vec<Span>,
}

impl MarkupFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fragment, dropping empty spans and merging adjacent plain text
    pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
        let mut fragment = Self::new();
        for span in spans {
            fragment.push(span);
        }
        fragment
    }

    /// Append a span
    pub fn push(&mut self, span: Span) {
        if span.text.is_empty() {
            return;
        }
        if span.class.is_none() {
            if let Some(last) = self.spans.last_mut() {
                if last.class.is_none() {
                    last.text.push_str(&span.text);
                    return;
                }
            }
        }
        self.spans.push(span);
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The escaped text with all annotations stripped
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Number of classified spans
    pub fn styled_count(&self) -> usize {
        self.spans.iter().filter(|s| s.is_styled()).count()
    }

    /// Classified spans of one class
    pub fn spans_of(&self, class: TokenClass) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |s| s.class == Some(class))
    }

    /// Serialize to HTML. Span text is already escaped, so only the wrapping
    /// `<span>` elements are markup.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.spans.iter().map(|s| s.text.len() + 32).sum());
        for span in &self.spans {
            match span.class {
                Some(class) => {
                    out.push_str("<span class=\"");
                    out.push_str(class.css_class());
                    out.push_str("\">");
                    out.push_str(&span.text);
                    out.push_str("</span>");
                }
                None => out.push_str(&span.text),
            }
        }
        out
    }
}

/// A fenced code block cut from a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Language token from the opening fence, if any
    pub language: Option<String>,
    /// Code between the fences, without the newline before the closing fence
    pub content: String,
    /// The full fenced text as it appeared in the message
    pub raw: String,
}

impl CodeBlock {
    /// Language token, or the generic label when the fence had none
    pub fn language_or_default(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE_LABEL)
    }
}

/// One segment of a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Code(CodeBlock),
    InlineCode { code: String },
    Bold { text: String },
    Text { text: String },
    LineBreak,
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        ContentPart::Text { text: text.into() }
    }

    pub fn inline_code(code: impl Into<String>) -> Self {
        ContentPart::InlineCode { code: code.into() }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        ContentPart::Bold { text: text.into() }
    }

    /// The message text this part was cut from
    pub fn source(&self) -> Cow<'_, str> {
        match self {
            ContentPart::Code(block) => Cow::Borrowed(&block.raw),
            ContentPart::InlineCode { code } => Cow::Owned(format!("`{}`", code)),
            ContentPart::Bold { text } => Cow::Owned(format!("**{}**", text)),
            ContentPart::Text { text } => Cow::Borrowed(text),
            ContentPart::LineBreak => Cow::Borrowed("\n"),
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, ContentPart::Code(_))
    }
}

/// Top-level split of a message: fenced code or everything in between
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Block {
    Prose(String),
    Code(CodeBlock),
}

impl Block {
    pub fn source(&self) -> &str {
        match self {
            Block::Prose(text) => text,
            Block::Code(block) => &block.raw,
        }
    }
}
