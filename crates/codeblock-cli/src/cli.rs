//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Render chat messages with syntax-highlighted code blocks
#[derive(Parser, Debug)]
#[command(name = "codeblock")]
#[command(version)]
#[command(about = "Render chat messages with syntax-highlighted code blocks")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Style overrides file (JSON)
    #[arg(long, global = true, env = "CODEBLOCK_STYLES")]
    pub styles: Option<PathBuf>,

    /// Output format (auto-detects based on TTY if not specified)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Output JSON (alias for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output human-readable (alias for --format human)
    #[arg(long, short = 'H', global = true)]
    pub human: bool,

    /// Output minimal text (alias for --format minimal)
    #[arg(long, short = 'm', global = true)]
    pub minimal: bool,

    /// Pretty-print JSON with indentation
    #[arg(long, short = 'p', global = true)]
    pub pretty: bool,

    /// Force color output
    #[arg(long, global = true)]
    pub color: bool,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log pipeline details to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Get the effective output format
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            return OutputFormat::Json;
        }
        if self.human {
            return OutputFormat::Human;
        }
        if self.minimal {
            return OutputFormat::Minimal;
        }
        if let Some(f) = self.format {
            return f;
        }
        if atty::is(atty::Stream::Stdout) {
            OutputFormat::Human
        } else {
            OutputFormat::Json
        }
    }

    /// Check if colors should be used
    pub fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        if self.color {
            return true;
        }
        atty::is(atty::Stream::Stdout)
    }
}

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON output
    Json,
    /// HTML fragment with styled spans
    Html,
    /// Plain text, no styling
    Minimal,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a chat message and highlight its code blocks
    Render {
        /// Message file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Highlight a source file
    Highlight {
        /// Source file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Language tag used for the block style
        #[arg(short, long, default_value = "code")]
        lang: String,
    },

    /// List the fenced code blocks of a message
    Blocks {
        /// Message file (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Copy a code block of a message to the system clipboard
    Copy {
        /// Message file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Block number, starting at 1
        #[arg(short, long, default_value = "1")]
        block: usize,

        /// Stay until the copied indicator resets
        #[arg(short, long)]
        wait: bool,
    },

    /// Show the language style table
    Styles,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_aliases() {
        let cli = Cli::parse_from(["codeblock", "--json", "styles"]);
        assert_eq!(cli.effective_format(), OutputFormat::Json);

        let cli = Cli::parse_from(["codeblock", "-f", "html", "render", "msg.md"]);
        assert_eq!(cli.effective_format(), OutputFormat::Html);

        let cli = Cli::parse_from(["codeblock", "-m", "styles"]);
        assert_eq!(cli.effective_format(), OutputFormat::Minimal);
    }

    #[test]
    fn test_copy_defaults() {
        let cli = Cli::parse_from(["codeblock", "copy"]);
        match cli.command {
            Command::Copy { file, block, wait } => {
                assert!(file.is_none());
                assert_eq!(block, 1);
                assert!(!wait);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_no_color_wins() {
        let cli = Cli::parse_from(["codeblock", "--color", "--no-color", "styles"]);
        assert!(!cli.use_color());
    }
}
