//! Blocks command - list the fenced code blocks of a message

use anyhow::Result;
use std::path::Path;

use codeblock_core::{code_blocks, StyleTable};

use crate::cli::{Cli, OutputFormat};
use crate::config::read_input;
use crate::output::{colors, human, json, minimal};

pub fn run(cli: &Cli, styles: &StyleTable, file: Option<&Path>) -> Result<()> {
    let message = read_input(file)?;
    let blocks = code_blocks(&message);

    match cli.effective_format() {
        OutputFormat::Human | OutputFormat::Html => {
            if blocks.is_empty() {
                println!("{}", colors::warning("No code blocks found"));
                return Ok(());
            }
            println!(
                "{}",
                colors::header(&format!("{} code block(s)", blocks.len()))
            );
            println!();
            for (i, block) in blocks.iter().enumerate() {
                let style = styles.resolve(block.language_or_default());
                println!("{}", human::format_block_summary(i + 1, block, style));
            }
        }
        OutputFormat::Json => {
            let rows: Vec<json::BlockSummary> = blocks
                .iter()
                .enumerate()
                .map(|(i, block)| {
                    json::BlockSummary::new(
                        i + 1,
                        block,
                        styles.resolve(block.language_or_default()),
                    )
                })
                .collect();
            println!("{}", json::to_json(&rows, cli.pretty)?);
        }
        OutputFormat::Minimal => {
            for (i, block) in blocks.iter().enumerate() {
                println!("{}", minimal::format_block_summary(i + 1, block));
            }
        }
    }

    Ok(())
}
