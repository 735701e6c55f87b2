//! Copy command - put a code block on the system clipboard

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::time::Duration;

use codeblock_core::{code_blocks, ClipboardSink, CodeBlock, CopyIndicator};

use crate::cli::{Cli, OutputFormat};
use crate::clipboard::SystemClipboard;
use crate::config::read_input;
use crate::output::{colors, json};

/// Poll step while waiting for the indicator to reset
const WAIT_POLL: Duration = Duration::from_millis(50);

/// Pick block `index` (1-based) out of a message
pub fn select_block(message: &str, index: usize) -> Result<CodeBlock> {
    let mut blocks = code_blocks(message);
    if blocks.is_empty() {
        bail!("No code blocks found");
    }
    if index == 0 || index > blocks.len() {
        bail!(
            "Block {} out of range (message has {} code block(s))",
            index,
            blocks.len()
        );
    }
    Ok(blocks.swap_remove(index - 1))
}

pub fn run(cli: &Cli, file: Option<&Path>, index: usize, wait: bool) -> Result<()> {
    let message = read_input(file)?;
    let block = select_block(&message, index)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start timer runtime")?;

    runtime
        .block_on(copy_block(cli, SystemClipboard::new(), &block, index, wait))
        .map(|_| ())
}

async fn copy_block<C: ClipboardSink>(
    cli: &Cli,
    clipboard: C,
    block: &CodeBlock,
    index: usize,
    wait: bool,
) -> Result<CopyIndicator<C>> {
    let mut indicator = CopyIndicator::new(clipboard);
    indicator
        .copy(&block.content)
        .with_context(|| format!("Failed to copy block {}", index))?;

    match cli.effective_format() {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "block": index,
                "language": block.language_or_default(),
                "chars": block.content.chars().count(),
                "copied": indicator.is_copied(),
            });
            println!("{}", json::to_json(&report, cli.pretty)?);
        }
        OutputFormat::Minimal => {}
        OutputFormat::Human | OutputFormat::Html => {
            println!(
                "{}",
                colors::success(&format!(
                    "Copied block {} ({}, {} chars)",
                    index,
                    block.language_or_default(),
                    block.content.chars().count()
                ))
            );
        }
    }

    if wait {
        let deadline = tokio::time::Instant::now() + indicator.window() + WAIT_POLL;
        while indicator.is_copied() && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(WAIT_POLL).await;
        }
        if matches!(cli.effective_format(), OutputFormat::Human | OutputFormat::Html) {
            println!("{}", colors::label("Indicator reset"));
        }
    }

    Ok(indicator)
}
