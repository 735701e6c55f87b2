//! Start-up configuration: logging, style table and input

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use codeblock_core::StyleTable;

use crate::cli::Cli;

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Default style file location
pub fn default_styles_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codeblock").join("styles.json"))
}

/// Built-in styles, merged with the first style file found:
/// `--styles` / `CODEBLOCK_STYLES`, then the default location
pub fn load_styles(cli: &Cli) -> Result<StyleTable> {
    if let Some(path) = &cli.styles {
        return StyleTable::load(path)
            .with_context(|| format!("Failed to load styles from {}", path.display()));
    }

    match default_styles_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "using default style file");
            StyleTable::load(&path)
                .with_context(|| format!("Failed to load styles from {}", path.display()))
        }
        _ => Ok(StyleTable::builtin()),
    }
}

/// Read a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "```js\nx\n```").unwrap();
        assert_eq!(read_input(Some(file.path())).unwrap(), "```js\nx\n```");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/no/such/message.md"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/message.md"));
    }

    #[test]
    fn test_explicit_styles_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"aliases": {{"node": "javascript"}}}}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::parse_from(["codeblock", "--styles", path.as_str(), "styles"]);
        let styles = load_styles(&cli).unwrap();
        assert_eq!(styles.resolve("node").label, "JavaScript");
    }

    #[test]
    fn test_bad_styles_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::parse_from(["codeblock", "--styles", path.as_str(), "styles"]);
        let err = load_styles(&cli).unwrap_err();
        assert!(err.to_string().contains(&path));
    }
}
