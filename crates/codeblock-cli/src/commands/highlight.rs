//! Highlight command - highlight a whole source file as one block

use anyhow::Result;
use std::path::Path;

use codeblock_core::{highlight_source, StyleTable};

use crate::cli::{Cli, OutputFormat};
use crate::config::read_input;
use crate::output::{html, human, json};

pub fn run(cli: &Cli, styles: &StyleTable, file: Option<&Path>, lang: &str) -> Result<()> {
    let source = read_input(file)?;
    let block = highlight_source(&source, lang, styles);

    match cli.effective_format() {
        OutputFormat::Human => println!("{}", human::format_block(&block)),
        OutputFormat::Json => println!("{}", json::to_json(&block, cli.pretty)?),
        OutputFormat::Html => println!("{}", html::format_block(&block)),
        OutputFormat::Minimal => print!("{}", block.source),
    }

    Ok(())
}
