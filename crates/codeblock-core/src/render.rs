//! Message rendering: split, highlight and style a chat message

use serde::{Deserialize, Serialize};

use crate::escape::{escape_attribute, escape_html};
use crate::highlight::highlight;
use crate::splitter::split_message;
use crate::style::{StyleEntry, StyleTable};
use crate::types::{CodeBlock, ContentPart, MarkupFragment};

/// A code block with its resolved style and highlighted content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedBlock {
    /// Language label shown in the header (`code` when the fence had none)
    pub language: String,
    pub style: StyleEntry,
    pub fragment: MarkupFragment,
    /// Original, unescaped code; this is what copy writes to the clipboard
    pub source: String,
}

impl HighlightedBlock {
    pub fn line_count(&self) -> usize {
        if self.source.is_empty() {
            0
        } else {
            self.source.lines().count()
        }
    }
}

/// A message part ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedPart {
    Code(HighlightedBlock),
    InlineCode { code: String },
    Bold { text: String },
    Text { text: String },
    LineBreak,
}

/// Highlight one code block and attach its style
pub fn highlight_block(block: &CodeBlock, styles: &StyleTable) -> HighlightedBlock {
    let language = block.language_or_default().to_string();
    HighlightedBlock {
        style: styles.resolve(&language).clone(),
        fragment: highlight(&block.content),
        source: block.content.clone(),
        language,
    }
}

/// Highlight a raw source string under a language tag
pub fn highlight_source(source: &str, language: &str, styles: &StyleTable) -> HighlightedBlock {
    let block = CodeBlock {
        language: Some(language.to_lowercase()).filter(|l| !l.is_empty()),
        content: source.to_string(),
        raw: source.to_string(),
    };
    highlight_block(&block, styles)
}

/// Split a message and highlight its code blocks
pub fn render_message(message: &str, styles: &StyleTable) -> Vec<RenderedPart> {
    let parts: Vec<RenderedPart> = split_message(message)
        .into_iter()
        .map(|part| match part {
            ContentPart::Code(block) => RenderedPart::Code(highlight_block(&block, styles)),
            ContentPart::InlineCode { code } => RenderedPart::InlineCode { code },
            ContentPart::Bold { text } => RenderedPart::Bold { text },
            ContentPart::Text { text } => RenderedPart::Text { text },
            ContentPart::LineBreak => RenderedPart::LineBreak,
        })
        .collect();

    tracing::debug!(
        parts = parts.len(),
        code_blocks = parts.iter().filter(|p| matches!(p, RenderedPart::Code(_))).count(),
        "rendered message"
    );
    parts
}

/// HTML for one highlighted block, header chrome included
pub fn block_to_html(block: &HighlightedBlock) -> String {
    let style = &block.style;
    format!(
        "<div class=\"code-block {border}\"><div class=\"code-header {background} {foreground}\">\
         <span class=\"code-icon\">{icon}</span><span class=\"code-label\">{label}</span></div>\
         <pre><code class=\"language-{language}\">{code}</code></pre></div>",
        border = escape_attribute(&style.border),
        background = escape_attribute(&style.background),
        foreground = escape_attribute(&style.foreground),
        icon = escape_html(&style.icon),
        label = escape_html(&style.label),
        language = escape_attribute(&block.language),
        code = block.fragment.to_html(),
    )
}

/// HTML for a rendered message. All text is escaped; the only markup is
/// produced here.
pub fn render_html(parts: &[RenderedPart]) -> String {
    let mut out = String::new();
    for part in parts {
        match part {
            RenderedPart::Code(block) => out.push_str(&block_to_html(block)),
            RenderedPart::InlineCode { code } => {
                out.push_str("<code class=\"inline-code\">");
                out.push_str(&escape_html(code));
                out.push_str("</code>");
            }
            RenderedPart::Bold { text } => {
                out.push_str("<strong>");
                out.push_str(&escape_html(text));
                out.push_str("</strong>");
            }
            RenderedPart::Text { text } => out.push_str(&escape_html(text)),
            RenderedPart::LineBreak => out.push_str("<br>"),
        }
    }
    out
}
