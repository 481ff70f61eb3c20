//! TOML configuration loading, `source = "..."` include resolution, and per-app override merging.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle detection,
//! merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{AppConfig, FileConfig, GeneralConfig, TerminalConfig};

use crate::level::Level;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger — `#[serde(default)]`
/// on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Threshold, newline policy, and message cap apply to every sink.
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    pub file: FileConfig,
    /// Different apps sharing one config need to diverge on level, colors, or output file
    /// without maintaining separate config files for each.
    pub apps: HashMap<String, AppConfig>,
}

/// Scans raw TOML for `source = "..."` directives before deserialization,
/// since serde cannot handle them.
/// Returns the extracted paths and the remaining TOML content stripped of those lines.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("source") && trimmed.contains('=') {
            let path = trimmed
                .split_once('=')
                .map(|(_, value)| value.trim().trim_matches('"').trim_matches('\''));
            if let Some(path) = path.filter(|p| !p.is_empty()) {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

/// Folds `other` into `base` without overwriting keys `base` already has.
/// Nested tables are merged recursively, so `[general]` in an include can supply
/// `max_message_len` while the including file keeps its own `level`.
fn merge_tables(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (Some(_), _) => {}
            (None, value) => {
                base.insert(key, value);
            }
        }
    }
}

impl Config {
    /// Reads `<config dir>/clog/config.toml`; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// Includes are merged key by key before deserialization: the including file
    /// wins on conflicts, earlier `source` lines win over later ones, and anything
    /// the including file leaves unset is filled from its includes.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let table = Self::load_with_sources(path, &mut Vec::new())?;
        Ok(toml::Value::Table(table).try_into()?)
    }

    /// Recursive loader that expands `source = "..."` includes. `chain` holds the
    /// files currently being loaded, so only a file including one of its own
    /// ancestors is a cycle; the same file reached twice through siblings is not.
    fn load_with_sources(
        path: &Path,
        chain: &mut Vec<PathBuf>,
    ) -> Result<toml::Table, crate::Error> {
        if !path.exists() {
            return Ok(toml::Table::new());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if chain.contains(&canonical) {
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut table: toml::Table = toml::from_str(&toml_content)?;

        chain.push(canonical);
        for source_path in sources {
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            // Relative includes resolve against the including file.
            let source_file = match path.parent() {
                Some(dir) if source_file.is_relative() => dir.join(source_file),
                _ => source_file.to_path_buf(),
            };
            if source_file.exists() {
                let included = Self::load_with_sources(&source_file, chain)?;
                merge_tables(&mut table, included);
            }
        }
        chain.pop();

        Ok(table)
    }

    /// Applies `[apps.<name>]` on top of the general sections.
    #[must_use]
    pub fn for_app(&self, app_name: &str) -> Self {
        let mut config = self.clone();

        if let Some(app) = self.apps.get(app_name) {
            if let Some(ref level) = app.level {
                config.general.level.clone_from(level);
            }
            if let Some(append) = app.append_newline {
                config.general.append_newline = append;
            }
            if let Some(colors) = app.colors {
                config.terminal.colors = colors;
            }
            if let Some(ref file) = app.file {
                config.file.path = Some(file.clone());
            }
        }

        config
    }

    /// XDG-style `~/.config/clog/config.toml` on Linux, the platform equivalent elsewhere.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("clog").join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores level as a string for TOML ergonomics — this converts to the typed enum.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] when the string names no level.
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        self.general
            .level
            .parse()
            .map_err(|_| crate::Error::InvalidLevel(self.general.level.clone()))
    }

    /// Tilde-expanded output file path, if one is configured.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
    }
}
