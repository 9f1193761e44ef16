//! Configuration loading for the skein server.
//!
//! Configuration is read from a TOML file with the following resolution order:
//! 1. `--config <path>` (CLI flag, must exist)
//! 2. `<platform config dir>/skein/config.toml` (if present)
//! 3. Built-in defaults
//!
//! ```toml
//! [server]
//! address = "127.0.0.1:8000"
//! cors_origins = ["http://localhost:5173"]
//!
//! [estimator]
//! safety_margin = 0.15
//! skein_grams = 50.0
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use skein_estimate::{DEFAULT_SAFETY_MARGIN, DEFAULT_SKEIN_GRAMS, YarnEstimator};
use skein_types::{Result, SkeinError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Yarn estimator settings.
    #[serde(default)]
    pub estimator: EstimatorConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000).
    #[serde(default = "default_address")]
    pub address: String,
    /// Browser origins allowed to call the API.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

/// Yarn estimator settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Extra yarn fraction added before rounding to whole skeins (default: 0.15).
    #[serde(default = "default_safety_margin")]
    pub safety_margin: f64,
    /// Grams per skein (default: 50).
    #[serde(default = "default_skein_grams")]
    pub skein_grams: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            safety_margin: DEFAULT_SAFETY_MARGIN,
            skein_grams: DEFAULT_SKEIN_GRAMS,
        }
    }
}

const fn default_safety_margin() -> f64 {
    DEFAULT_SAFETY_MARGIN
}

const fn default_skein_grams() -> f64 {
    DEFAULT_SKEIN_GRAMS
}

impl Config {
    /// Loads configuration from the standard locations and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::Config`] if an explicit path does not exist, a
    /// file cannot be read or parsed, or a value is out of range.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config = match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file without validating it.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SkeinError::Config(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            SkeinError::Config(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Returns the platform config file location, if one can be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "skein").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(SkeinError::Config(format!("Config file not found: {path:?}")));
        }

        Ok(Self::default_path().filter(|path| path.exists()))
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::Config`] describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        self.estimator()?;
        Ok(())
    }

    /// Returns the parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::Config`] if the address is not `ip:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.server.address.parse().map_err(|e| {
            SkeinError::Config(format!("Invalid server address '{}': {e}", self.server.address))
        })
    }

    /// Builds the estimator described by the `[estimator]` table.
    ///
    /// # Errors
    ///
    /// Returns [`SkeinError::Config`] if the margin or skein size is invalid.
    pub fn estimator(&self) -> Result<YarnEstimator> {
        YarnEstimator::new(self.estimator.safety_margin, self.estimator.skein_grams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.address, "127.0.0.1:8000");
        assert_eq!(config.server.cors_origins.len(), 2);
        assert_eq!(config.estimator.safety_margin, 0.15);
        assert_eq!(config.estimator.skein_grams, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [estimator]
            safety_margin = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(config.estimator.safety_margin, 0.2);
        assert_eq!(config.estimator.skein_grams, 50.0);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [server]
            address = "0.0.0.0:9000"
            cors_origins = []

            [estimator]
            skein_grams = 100.0
            "#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.socket_addr().unwrap().port(), 9000);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.estimator().unwrap().skein_grams(), 100.0);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, SkeinError::Config(msg) if msg.contains("not found")));
    }

    #[test]
    fn test_load_rejects_bad_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "[estimator]\nsafety_margin = -1.0\n").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(SkeinError::Config(_))));

        fs::write(&path, "[server]\naddress = \"localhost\"\n").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(SkeinError::Config(_))));

        fs::write(&path, "[server\n").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, SkeinError::Config(msg) if msg.contains("Failed to parse")));
    }
}
