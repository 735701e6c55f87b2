//! Render command - split a message and highlight its code blocks

use anyhow::Result;
use std::path::Path;

use codeblock_core::{render_message, StyleTable};

use crate::cli::{Cli, OutputFormat};
use crate::config::read_input;
use crate::output::{html, human, json, minimal};

pub fn run(cli: &Cli, styles: &StyleTable, file: Option<&Path>) -> Result<()> {
    let message = read_input(file)?;
    let parts = render_message(&message, styles);

    match cli.effective_format() {
        OutputFormat::Human => println!("{}", human::format_message(&parts)),
        OutputFormat::Json => println!("{}", json::to_json(&parts, cli.pretty)?),
        OutputFormat::Html => println!("{}", html::format_message(&parts)),
        OutputFormat::Minimal => println!("{}", minimal::format_message(&parts)),
    }

    Ok(())
}
