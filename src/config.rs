//! Runtime configuration loaded from `seatshow.json`
//!
//! Every field has a default, so a missing file is not an error. A file that
//! exists but does not parse, or that carries out-of-range values, is.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShowError};

/// The default config file name.
pub const CONFIG_FILE_NAME: &str = "seatshow.json";

const fn default_cooldown_ms() -> u64 {
    500
}

fn default_export_dir() -> String {
    ".".to_string()
}

fn default_log_file() -> String {
    "seatshow.log".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Slide-change cooldown in milliseconds; input during it is dropped
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,

    /// Directory the PPTX deck is written into
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Log file used while the terminal UI owns the screen
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
            export_dir: default_export_dir(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Load `seatshow.json` from `dir`, falling back to defaults if absent.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load_from_file(&dir.join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ShowError::config_parse(
                    path,
                    format!("failed to read file: {e}"),
                ));
            }
        };

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ShowError::config_parse(path, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cooldown_ms == 0 {
            return Err(ShowError::ConfigValidation(
                "cooldownMs must be greater than 0".to_string(),
            ));
        }
        if self.export_dir.trim().is_empty() {
            return Err(ShowError::ConfigValidation(
                "exportDir must not be empty (use '.' for the current directory)".to_string(),
            ));
        }
        if self.log_file.trim().is_empty() {
            return Err(ShowError::ConfigValidation(
                "logFile must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn export_dir(&self) -> PathBuf {
        PathBuf::from(&self.export_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cooldown(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"cooldownMs": 250}"#).unwrap();

        let config = Config::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.cooldown_ms, 250);
        assert_eq!(config.export_dir, ".");
        assert_eq!(config.log_file, "seatshow.log");
    }

    #[test]
    fn test_zero_cooldown_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"cooldownMs": 0}"#).unwrap();

        let err = Config::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ShowError::ConfigValidation(_)));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();

        let err = Config::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ShowError::ConfigParse { .. }));
    }
}
