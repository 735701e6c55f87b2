//! Minimal text output formatting

use codeblock_core::{CodeBlock, RenderedPart, StyleEntry};

/// Format a rendered message as plain text, code blocks as their source
pub fn format_message(parts: &[RenderedPart]) -> String {
    parts
        .iter()
        .map(|part| match part {
            RenderedPart::Code(block) => block.source.as_str(),
            RenderedPart::InlineCode { code } => code.as_str(),
            RenderedPart::Bold { text } | RenderedPart::Text { text } => text.as_str(),
            RenderedPart::LineBreak => "\n",
        })
        .collect()
}

/// Format a `blocks` row as `index language`
pub fn format_block_summary(index: usize, block: &CodeBlock) -> String {
    format!("{}\t{}", index, block.language_or_default())
}

/// Format a `styles` row as `tag label`
pub fn format_style_row(tag: &str, entry: &StyleEntry) -> String {
    format!("{}\t{}", tag, entry.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeblock_core::{render_message, StyleTable};

    #[test]
    fn test_format_message_drops_markup() {
        let parts = render_message(
            "See **this** and `that`:\n```js\nlet a = b && c;\n```",
            &StyleTable::builtin(),
        );
        assert_eq!(
            format_message(&parts),
            "See this and that:\nlet a = b && c;"
        );
    }
}
