//! JSON output formatting

use serde::Serialize;

use codeblock_core::{CodeBlock, StyleEntry, StyleTable};

/// Serialize any value, compact or indented
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// A `blocks` listing row
#[derive(Debug, Serialize)]
pub struct BlockSummary<'a> {
    pub index: usize,
    pub language: &'a str,
    pub label: &'a str,
    pub lines: usize,
    pub content: &'a str,
}

impl<'a> BlockSummary<'a> {
    pub fn new(index: usize, block: &'a CodeBlock, style: &'a StyleEntry) -> Self {
        Self {
            index,
            language: block.language_or_default(),
            label: &style.label,
            lines: block.content.lines().count(),
            content: &block.content,
        }
    }
}

/// A `styles` table row
#[derive(Debug, Serialize)]
pub struct StyleRow<'a> {
    pub tag: &'a str,
    #[serde(flatten)]
    pub entry: &'a StyleEntry,
    pub aliases: Vec<&'a str>,
}

/// The style table as JSON: one row per language plus the default entry
pub fn format_styles(styles: &StyleTable, pretty: bool) -> serde_json::Result<String> {
    let rows: Vec<StyleRow> = styles
        .entries()
        .into_iter()
        .map(|(tag, entry, aliases)| StyleRow {
            tag,
            entry,
            aliases,
        })
        .collect();

    to_json(
        &serde_json::json!({
            "languages": rows,
            "default": styles.default_entry(),
        }),
        pretty,
    )
}
