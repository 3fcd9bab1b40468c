//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::store::DEFAULT_DB_FILE;

/// Environment variable naming the database file
pub const DB_ENV_VAR: &str = "AUTOSHOP_DB";

/// Autoshop configuration with layered hierarchy
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Global user config (~/.config/autoshop/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 2. Environment variables
        if let Ok(db) = std::env::var(DB_ENV_VAR) {
            if !db.is_empty() {
                config.database = Some(PathBuf::from(db));
            }
        }

        config
    }

    /// Parse a config file, ignoring missing or malformed files
    pub fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                None
            }
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "autoshop")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.database.is_some() {
            self.database = other.database;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Database path: explicit override, then config, then the default file
    pub fn database_path(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_database_path_precedence() {
        let config = Config {
            database: Some(PathBuf::from("/srv/shop.db")),
            default_format: None,
        };
        assert_eq!(
            config.database_path(Some(Path::new("cli.db"))),
            PathBuf::from("cli.db")
        );
        assert_eq!(config.database_path(None), PathBuf::from("/srv/shop.db"));
        assert_eq!(
            Config::default().database_path(None),
            PathBuf::from(DEFAULT_DB_FILE)
        );
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut base = Config {
            database: Some(PathBuf::from("a.db")),
            default_format: Some("json".to_string()),
        };
        base.merge(Config {
            database: Some(PathBuf::from("b.db")),
            default_format: None,
        });
        assert_eq!(base.database, Some(PathBuf::from("b.db")));
        assert_eq!(base.default_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_read_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.yaml");

        assert!(Config::read_file(&path).is_none());

        fs::write(&path, "database: /tmp/parts.db\ndefault_format: csv\n").unwrap();
        let config = Config::read_file(&path).unwrap();
        assert_eq!(config.database, Some(PathBuf::from("/tmp/parts.db")));
        assert_eq!(config.default_format.as_deref(), Some("csv"));

        fs::write(&path, "database: [unterminated").unwrap();
        assert!(Config::read_file(&path).is_none());
    }
}
