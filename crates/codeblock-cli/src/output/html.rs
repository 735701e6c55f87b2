//! HTML fragment output

use codeblock_core::{block_to_html, render_html, HighlightedBlock, RenderedPart};

/// Format a rendered message as an HTML fragment
pub fn format_message(parts: &[RenderedPart]) -> String {
    render_html(parts)
}

/// Format a single highlighted block as an HTML fragment
pub fn format_block(block: &HighlightedBlock) -> String {
    block_to_html(block)
}
