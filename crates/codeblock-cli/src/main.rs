//! codeblock - CLI for rendering and copying chat code blocks

mod cli;
mod clipboard;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    config::init_tracing(cli.verbose);
    colored::control::set_override(cli.use_color());

    let styles = config::load_styles(&cli)?;

    match &cli.command {
        Command::Render { file } => commands::render::run(&cli, &styles, file.as_deref()),

        Command::Highlight { file, lang } => {
            commands::highlight::run(&cli, &styles, file.as_deref(), lang)
        }

        Command::Blocks { file } => commands::blocks::run(&cli, &styles, file.as_deref()),

        Command::Copy { file, block, wait } => {
            commands::copy::run(&cli, file.as_deref(), *block, *wait)
        }

        Command::Styles => commands::styles::run(&cli, &styles),
    }
}
