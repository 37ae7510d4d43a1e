//! Optional on-disk configuration and the resolved session settings.
//!
//! Everything works with no config file at all: the compiled-in defaults in
//! [`crate::core::constants`] cover the endpoint, roster, and theme.
//! Precedence when something is set in more than one place:
//! command line > config file > compiled-in default.

use crate::core::constants::{DEFAULT_ENDPOINT, DEFAULT_THEME};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Relay endpoint receiving chat posts.
    pub endpoint: Option<String>,
    /// UI theme name ("dark" or "light").
    pub theme: Option<String>,
    /// Transcript log file, appended to as messages settle.
    pub log: Option<String>,
}

/// Errors that can occur when loading configuration from disk.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`Config`].
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config at {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse config at {}: {source}", path.display())
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl Config {
    /// Platform config path (`<config dir>/parlor/config.toml`), if the
    /// platform exposes one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "parlor", "parlor").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the default config file. A missing file is not an error; it
    /// just means defaults.
    pub fn load() -> Result<Config, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Settings the session actually runs with, after precedence is applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
    pub theme: String,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Apply precedence: explicit overrides (the CLI) beat the config file,
    /// which beats the compiled-in defaults.
    pub fn resolve(
        endpoint: Option<String>,
        theme: Option<String>,
        log: Option<String>,
        config: &Config,
    ) -> Settings {
        Settings {
            endpoint: endpoint
                .or_else(|| config.endpoint.clone())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            theme: theme
                .or_else(|| config.theme.clone())
                .unwrap_or_else(|| DEFAULT_THEME.to_string()),
            log_file: log.or_else(|| config.log.clone()).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_from_path(&dir.path().join("config.toml")).expect("load");
        assert!(config.endpoint.is_none());
        assert!(config.theme.is_none());
    }

    #[test]
    fn file_values_are_parsed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).expect("create");
        writeln!(file, "endpoint = \"http://127.0.0.1:9000/chat\"").expect("write");
        writeln!(file, "theme = \"light\"").expect("write");

        let config = Config::load_from_path(&path).expect("load");
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://127.0.0.1:9000/chat")
        );
        assert_eq!(config.theme.as_deref(), Some("light"));
    }

    #[test]
    fn parse_errors_name_the_offending_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "endpoint = [not toml").expect("write");

        let err = Config::load_from_path(&path).expect_err("parse fails");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn cli_beats_file_beats_default() {
        let config = Config {
            endpoint: Some("http://file:1/chat".to_string()),
            theme: Some("light".to_string()),
            log: None,
        };

        let settings = Settings::resolve(
            Some("http://cli:2/chat".to_string()),
            None,
            Some("chat.log".to_string()),
            &config,
        );
        assert_eq!(settings.endpoint, "http://cli:2/chat");
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.log_file.as_deref(), Some(Path::new("chat.log")));

        let defaults = Settings::resolve(None, None, None, &Config::default());
        assert_eq!(defaults.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(defaults.theme, DEFAULT_THEME);
        assert!(defaults.log_file.is_none());
    }
}
