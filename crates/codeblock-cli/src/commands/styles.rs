//! Styles command - show the language style table

use anyhow::Result;

use codeblock_core::StyleTable;

use crate::cli::{Cli, OutputFormat};
use crate::output::{colors, human, json, minimal};

pub fn run(cli: &Cli, styles: &StyleTable) -> Result<()> {
    let rows = styles.entries();

    match cli.effective_format() {
        OutputFormat::Human | OutputFormat::Html => {
            println!("{}", colors::header("Language Styles"));
            println!();
            for (tag, entry, aliases) in &rows {
                println!("{}", human::format_style_row(tag, entry, aliases));
            }
            println!();
            println!(
                "{} {}",
                colors::label("Unknown tags:"),
                human::format_style_row("*", styles.default_entry(), &[])
            );
        }
        OutputFormat::Json => println!("{}", json::format_styles(styles, cli.pretty)?),
        OutputFormat::Minimal => {
            for (tag, entry, _) in &rows {
                println!("{}", minimal::format_style_row(tag, entry));
            }
        }
    }

    Ok(())
}
