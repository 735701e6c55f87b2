//! Per-language presentation styles for code blocks
//!
//! The built-in table is enumerated, not computed. Optional overrides are read
//! from a JSON file once at start-up and merged over the built-ins.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Style configuration errors
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid style file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Style file contains an empty language key")]
    EmptyKey,
}

/// Visual chrome for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEntry {
    /// Display name shown in the block header
    pub label: String,
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub icon: String,
}

impl StyleEntry {
    fn new(label: &str, color: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            background: format!("bg-{}-500/10", color),
            foreground: format!("text-{}-400", color),
            border: format!("border-{}-500/30", color),
            icon: icon.to_string(),
        }
    }

    /// Entry used for tags with no table row
    pub fn fallback() -> Self {
        Self {
            label: "Code".to_string(),
            background: "bg-gray-800/50".to_string(),
            foreground: "text-gray-300".to_string(),
            border: "border-gray-600/30".to_string(),
            icon: "📄".to_string(),
        }
    }
}

/// Overrides read from a style file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleOverrides {
    #[serde(default)]
    pub languages: BTreeMap<String, StyleEntry>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub default: Option<StyleEntry>,
}

/// Mapping from lowercase language tag to style entry
#[derive(Debug, Clone)]
pub struct StyleTable {
    entries: HashMap<String, StyleEntry>,
    aliases: HashMap<String, String>,
    default: StyleEntry,
}

static BUILTIN: LazyLock<StyleTable> = LazyLock::new(StyleTable::builtin);

impl StyleTable {
    /// The built-in table
    pub fn builtin() -> Self {
        let entries = [
            ("javascript", StyleEntry::new("JavaScript", "yellow", "⚡")),
            ("typescript", StyleEntry::new("TypeScript", "blue", "🔷")),
            ("python", StyleEntry::new("Python", "green", "🐍")),
            ("java", StyleEntry::new("Java", "orange", "☕")),
            ("rust", StyleEntry::new("Rust", "orange", "🦀")),
            ("go", StyleEntry::new("Go", "cyan", "🐹")),
            ("c", StyleEntry::new("C", "slate", "⚙️")),
            ("cpp", StyleEntry::new("C++", "indigo", "⚙️")),
            ("csharp", StyleEntry::new("C#", "purple", "🎯")),
            ("ruby", StyleEntry::new("Ruby", "red", "💎")),
            ("php", StyleEntry::new("PHP", "violet", "🐘")),
            ("html", StyleEntry::new("HTML", "orange", "🌐")),
            ("css", StyleEntry::new("CSS", "pink", "🎨")),
            ("sql", StyleEntry::new("SQL", "emerald", "🗃️")),
            ("bash", StyleEntry::new("Bash", "lime", "💻")),
            ("json", StyleEntry::new("JSON", "amber", "📋")),
            ("yaml", StyleEntry::new("YAML", "teal", "📝")),
            ("markdown", StyleEntry::new("Markdown", "sky", "📘")),
        ];
        let aliases = [
            ("js", "javascript"),
            ("jsx", "javascript"),
            ("mjs", "javascript"),
            ("ts", "typescript"),
            ("tsx", "typescript"),
            ("py", "python"),
            ("rs", "rust"),
            ("golang", "go"),
            ("c++", "cpp"),
            ("cs", "csharp"),
            ("c#", "csharp"),
            ("rb", "ruby"),
            ("htm", "html"),
            ("sh", "bash"),
            ("shell", "bash"),
            ("zsh", "bash"),
            ("yml", "yaml"),
            ("md", "markdown"),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|(tag, entry)| (tag.to_string(), entry))
                .collect(),
            aliases: aliases
                .into_iter()
                .map(|(alias, tag)| (alias.to_string(), tag.to_string()))
                .collect(),
            default: StyleEntry::fallback(),
        }
    }

    /// Built-ins merged with the overrides in a JSON style file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides: StyleOverrides =
            serde_json::from_str(&raw).map_err(|source| StyleError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let table = Self::builtin().with_overrides(overrides)?;
        tracing::debug!(path = %path.display(), languages = table.entries.len(), "loaded style file");
        Ok(table)
    }

    /// Merge overrides over this table. Keys are lowercased.
    pub fn with_overrides(mut self, overrides: StyleOverrides) -> Result<Self, StyleError> {
        for (tag, entry) in overrides.languages {
            let tag = normalize(&tag);
            if tag.is_empty() {
                return Err(StyleError::EmptyKey);
            }
            self.entries.insert(tag, entry);
        }
        for (alias, tag) in overrides.aliases {
            let alias = normalize(&alias);
            if alias.is_empty() {
                return Err(StyleError::EmptyKey);
            }
            self.aliases.insert(alias, normalize(&tag));
        }
        if let Some(default) = overrides.default {
            self.default = default;
        }
        Ok(self)
    }

    /// Resolve a language tag, case-insensitively; unknown tags get the default
    pub fn resolve(&self, tag: &str) -> &StyleEntry {
        let tag = normalize(tag);
        let key = self.aliases.get(&tag).unwrap_or(&tag);
        match self.entries.get(key) {
            Some(entry) => entry,
            None => {
                tracing::debug!(tag = %tag, "no style for language, using default");
                &self.default
            }
        }
    }

    pub fn default_entry(&self) -> &StyleEntry {
        &self.default
    }

    /// Entries sorted by tag, with the aliases pointing at each
    pub fn entries(&self) -> Vec<(&str, &StyleEntry, Vec<&str>)> {
        let mut rows: Vec<_> = self
            .entries
            .iter()
            .map(|(tag, entry)| {
                let mut aliases: Vec<&str> = self
                    .aliases
                    .iter()
                    .filter(|(_, target)| *target == tag)
                    .map(|(alias, _)| alias.as_str())
                    .collect();
                aliases.sort_unstable();
                (tag.as_str(), entry, aliases)
            })
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Resolve a language tag against the built-in table
pub fn resolve_style(tag: &str) -> &'static StyleEntry {
    BUILTIN.resolve(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_unknown_tag_falls_back() {
        assert_eq!(resolve_style("not-a-real-lang"), &StyleEntry::fallback());
        assert_eq!(resolve_style(""), &StyleEntry::fallback());
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        assert_eq!(resolve_style("PYTHON"), resolve_style("python"));
        assert_eq!(resolve_style("python").label, "Python");
    }

    #[test]
    fn test_aliases() {
        assert_eq!(resolve_style("js"), resolve_style("javascript"));
        assert_eq!(resolve_style("TSX"), resolve_style("typescript"));
        assert_eq!(resolve_style("c++").label, "C++");
    }

    #[test]
    fn test_entry_classes() {
        let entry = resolve_style("javascript");
        assert_eq!(entry.background, "bg-yellow-500/10");
        assert_eq!(entry.foreground, "text-yellow-400");
        assert_eq!(entry.border, "border-yellow-500/30");
    }

    #[test]
    fn test_overrides_merge() {
        let mut languages = BTreeMap::new();
        languages.insert("Elixir".to_string(), StyleEntry::new("Elixir", "purple", "💧"));
        let mut aliases = BTreeMap::new();
        aliases.insert("ex".to_string(), "ELIXIR".to_string());

        let table = StyleTable::builtin()
            .with_overrides(StyleOverrides {
                languages,
                aliases,
                default: None,
            })
            .unwrap();

        assert_eq!(table.resolve("ex").label, "Elixir");
        assert_eq!(table.resolve("python").label, "Python");
        assert_eq!(table.resolve("ELIXIR").icon, "💧");
    }

    #[test]
    fn test_empty_key_rejected() {
        let mut languages = BTreeMap::new();
        languages.insert("  ".to_string(), StyleEntry::fallback());
        let result = StyleTable::builtin().with_overrides(StyleOverrides {
            languages,
            ..Default::default()
        });
        assert!(matches!(result, Err(StyleError::EmptyKey)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "languages": {{
                    "zig": {{"label": "Zig", "background": "bg-amber-500/10",
                             "foreground": "text-amber-400", "border": "border-amber-500/30",
                             "icon": "⚡"}}
                }},
                "default": {{"label": "Text", "background": "bg", "foreground": "fg",
                             "border": "bd", "icon": "?"}}
            }}"#
        )
        .unwrap();

        let table = StyleTable::load(file.path()).unwrap();
        assert_eq!(table.resolve("zig").label, "Zig");
        assert_eq!(table.resolve("unknown").label, "Text");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            StyleTable::load(file.path()),
            Err(StyleError::Parse { .. })
        ));
        assert!(matches!(
            StyleTable::load("/definitely/not/here.json"),
            Err(StyleError::Io { .. })
        ));
    }

    #[test]
    fn test_entries_sorted_with_aliases() {
        let table = StyleTable::builtin();
        let rows = table.entries();
        let tags: Vec<&str> = rows.iter().map(|(tag, _, _)| *tag).collect();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        assert_eq!(tags, sorted);

        let (_, _, aliases) = rows.iter().find(|(tag, _, _)| *tag == "bash").unwrap();
        assert_eq!(aliases, &vec!["sh", "shell", "zsh"]);
    }
}
