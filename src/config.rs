// SPDX-License-Identifier: GPL-3.0-or-later
//! Configuration file support for Titlefix.
//!
//! This module loads and parses configuration files (`.titlefix.toml`) that
//! set the default conversion options for the command-line tool.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{CaseType, Options, Style};

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".titlefix.toml";

/// Configuration for Titlefix.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Case conversion to apply (default: `title`).
    pub case_type: CaseType,

    /// Citation style for title case (default: `apa`).
    pub style: Style,

    /// Replace curly quotes with straight ones (default: false).
    pub straight_quotes: bool,

    /// Keep words that are already fully uppercase (default: false).
    pub preserve_uppercase: bool,

    /// Extra acronyms, merged with the built-in list (default: empty).
    pub acronyms: Vec<String>,
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Discover and load configuration by searching up the directory tree.
    ///
    /// Starting from `start_dir`, searches for `.titlefix.toml` in each parent
    /// directory until the filesystem root is reached. Returns `None` if no
    /// configuration file is found.
    pub fn discover(start_dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                log::debug!("using configuration {}", config_path.display());
                let config = Self::from_file(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !current.pop() {
                break;
            }
        }
        log::debug!("no {} found from {}", CONFIG_FILE_NAME, start_dir.display());
        Ok(None)
    }

    /// Converts this configuration into conversion options.
    pub fn to_options(&self) -> Options {
        Options {
            case_type: self.case_type,
            style: self.style,
            straight_quotes: self.straight_quotes,
            acronyms: self.acronyms.clone(),
            preserve_uppercase: self.preserve_uppercase,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the configuration file.
    Io(PathBuf, std::io::Error),
    /// Error parsing the TOML configuration.
    Parse(PathBuf, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, err) => {
                write!(f, "failed to read {}: {}", path.display(), err)
            }
            ConfigError::Parse(path, err) => {
                write!(f, "failed to parse {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.case_type, CaseType::Title);
        assert_eq!(config.style, Style::Apa);
        assert!(!config.straight_quotes);
        assert!(!config.preserve_uppercase);
        assert!(config.acronyms.is_empty());
        assert_eq!(config.to_options(), Options::default());
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml(
            r#"
case_type = "title"
style = "Chicago"
straight_quotes = true
preserve_uppercase = true
acronyms = ["API", "SDK"]
"#,
        )
        .unwrap();
        assert_eq!(config.style, Style::Chicago);
        assert!(config.straight_quotes);
        assert!(config.preserve_uppercase);
        assert_eq!(config.acronyms, vec!["API", "SDK"]);

        let options = config.to_options();
        assert_eq!(options.style, Style::Chicago);
        assert_eq!(options.acronyms, vec!["API", "SDK"]);
    }

    #[test]
    fn test_parse_case_type() {
        let config = Config::from_toml("case_type = \"SENTENCE\"").unwrap();
        assert_eq!(config.case_type, CaseType::Sentence);
    }

    #[test]
    fn test_parse_unknown_style() {
        let err = Config::from_toml("style = \"klingon\"").unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::from_toml("straight_quotes = \"not a bool\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(ref p, _) if p == &path));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_file_parse_error_names_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "style = [").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(..)));
        assert!(err.to_string().starts_with("failed to parse "));
    }

    #[test]
    fn test_discover_config_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "style = \"nyt\"").unwrap();

        let result = Config::discover(temp_dir.path()).unwrap();
        assert!(result.is_some());
        let (path, config) = result.unwrap();
        assert_eq!(path, config_path);
        assert_eq!(config.style, Style::Nyt);
    }

    #[test]
    fn test_discover_config_in_parent_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sub_dir = temp_dir.path().join("subdir").join("nested");
        std::fs::create_dir_all(&sub_dir).unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "case_type = \"upper\"").unwrap();

        let result = Config::discover(&sub_dir).unwrap();
        assert!(result.is_some());
        let (path, config) = result.unwrap();
        assert_eq!(path, config_path);
        assert_eq!(config.case_type, CaseType::Upper);
    }

    #[test]
    fn test_discover_nearest_config_wins() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sub_dir = temp_dir.path().join("project");
        std::fs::create_dir_all(&sub_dir).unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "style = \"ap\"").unwrap();
        std::fs::write(sub_dir.join(CONFIG_FILE_NAME), "style = \"mla\"").unwrap();

        let (_, config) = Config::discover(&sub_dir).unwrap().unwrap();
        assert_eq!(config.style, Style::Mla);
    }
}
