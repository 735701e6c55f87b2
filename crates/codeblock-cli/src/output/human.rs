//! Human-readable output formatting

use super::colors::*;
use codeblock_core::{
    unescape_html, CodeBlock, HighlightedBlock, MarkupFragment, RenderedPart, StyleEntry,
};

/// Split a fragment into terminal lines, each span painted by class
pub fn highlighted_lines(fragment: &MarkupFragment) -> Vec<String> {
    let mut lines = vec![String::new()];
    for span in fragment.spans() {
        let text = unescape_html(&span.text);
        for (i, piece) in text.split('\n').enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            let Some(current) = lines.last_mut().filter(|_| !piece.is_empty()) else {
                continue;
            };
            match span.class {
                Some(class) => current.push_str(&colored_token(class, piece).to_string()),
                None => current.push_str(piece),
            }
        }
    }
    lines
}

/// Format a highlighted block: header, then numbered lines
pub fn format_block(block: &HighlightedBlock) -> String {
    let count = block.line_count();
    let mut out = format!(
        "{} {} {}",
        block.style.icon,
        colored_language(&block.style.label, &block.style.foreground),
        label(&format!(
            "({} {})",
            count,
            if count == 1 { "line" } else { "lines" }
        )),
    );

    if block.source.is_empty() {
        return out;
    }

    let mut lines = highlighted_lines(&block.fragment);
    // a final newline ends the last line rather than opening a new one
    if block.source.ends_with('\n') {
        lines.pop();
    }
    for (i, line) in lines.iter().enumerate() {
        out.push('\n');
        out.push_str(&colored_line_num(i + 1));
        out.push_str("  ");
        out.push_str(line);
    }
    out
}

/// Format a rendered message for the terminal
pub fn format_message(parts: &[RenderedPart]) -> String {
    let mut out = String::new();
    for part in parts {
        match part {
            RenderedPart::Code(block) => out.push_str(&format_block(block)),
            RenderedPart::InlineCode { code } => out.push_str(&inline_code(code)),
            RenderedPart::Bold { text } => out.push_str(&bold(text)),
            RenderedPart::Text { text } => out.push_str(text),
            RenderedPart::LineBreak => out.push('\n'),
        }
    }
    out
}

/// Format one row of the `blocks` listing
pub fn format_block_summary(index: usize, block: &CodeBlock, style: &StyleEntry) -> String {
    let count = block.content.lines().count();
    let preview = block.content.lines().next().unwrap_or("").trim();
    let preview: String = if preview.chars().count() > 60 {
        let mut short: String = preview.chars().take(57).collect();
        short.push_str("...");
        short
    } else {
        preview.to_string()
    };

    format!(
        "{:>3}  {} {:<12} {:>4} {}  {}",
        index,
        style.icon,
        colored_language(block.language_or_default(), &style.foreground),
        count,
        label(if count == 1 { "line " } else { "lines" }),
        value(&preview),
    )
}

/// Format one row of the `styles` table
pub fn format_style_row(tag: &str, entry: &StyleEntry, aliases: &[&str]) -> String {
    let mut row = format!(
        "{} {:<12} {:<12} {}",
        entry.icon,
        colored_language(tag, &entry.foreground),
        value(&entry.label),
        label(&format!(
            "{} {} {}",
            entry.background, entry.foreground, entry.border
        )),
    );
    if !aliases.is_empty() {
        row.push_str(&format!("  {} {}", label("aka"), aliases.join(", ")));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeblock_core::{highlight, highlight_source, render_message, StyleTable};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_highlighted_lines_unescape() {
        plain();
        let lines = highlighted_lines(&highlight("if a < b {\n  x && y\n}"));
        assert_eq!(lines, vec!["if a < b {", "  x && y", "}"]);
    }

    #[test]
    fn test_multiline_comment_spans_lines() {
        plain();
        let lines = highlighted_lines(&highlight("/* one\ntwo */\nx"));
        assert_eq!(lines, vec!["/* one", "two */", "x"]);
    }

    #[test]
    fn test_format_block() {
        plain();
        let block = highlight_source("fn main() {\n}", "rust", &StyleTable::builtin());
        let out = format_block(&block);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "🦀 Rust (2 lines)");
        assert_eq!(lines[1], "   1  fn main() {");
        assert_eq!(lines[2], "   2  }");
    }

    #[test]
    fn test_trailing_newline_adds_no_row() {
        plain();
        let block = highlight_source("fn main() {\n}\n", "rust", &StyleTable::builtin());
        let out = format_block(&block);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "🦀 Rust (2 lines)");
        assert_eq!(lines[2], "   2  }");

        let blank = highlight_source("x\n\n", "rust", &StyleTable::builtin());
        let out = format_block(&blank);
        assert!(out.starts_with("🦀 Rust (2 lines)"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_format_message() {
        plain();
        let parts = render_message("Use `x` **now**\n```\nlet a = 1;\n```", &StyleTable::builtin());
        let out = format_message(&parts);
        assert!(out.starts_with("Use x now\n📄 Code (1 line)"));
        assert!(out.ends_with("   1  let a = 1;"));
    }

    #[test]
    fn test_block_summary_truncates_preview() {
        plain();
        let block = CodeBlock {
            language: Some("py".to_string()),
            content: "x".repeat(100),
            raw: String::new(),
        };
        let row = format_block_summary(1, &block, &StyleTable::builtin().resolve("py").clone());
        assert!(row.contains("py"));
        assert!(row.ends_with(&format!("{}...", "x".repeat(57))));
    }
}
