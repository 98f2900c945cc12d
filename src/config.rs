//! Game configuration loaded from an optional JSON file.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::{
    round::{MAX_OPTIONS, MIN_OPTIONS},
    session::Rules,
};

const APP_DIR: &str = "guess-the-hex";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_health: u32,
    pub points_per_correct: u32,
    pub option_count: usize,
    pub feedback_flash_ms: u64,
    pub copy_notice_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        let rules = Rules::default();
        Self {
            max_health: rules.max_health,
            points_per_correct: rules.points_per_correct,
            option_count: rules.option_count,
            feedback_flash_ms: 500,
            copy_notice_ms: 2000,
        }
    }
}

impl GameConfig {
    /// Load from `path` if given, else from the platform config directory
    /// if a file exists there, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_health == 0 {
            bail!("max_health must be at least 1");
        }

        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&self.option_count) {
            bail!(
                "option_count must be between {} and {}, got {}",
                MIN_OPTIONS,
                MAX_OPTIONS,
                self.option_count
            );
        }

        Ok(())
    }

    pub fn rules(&self) -> Rules {
        Rules {
            max_health: self.max_health,
            points_per_correct: self.points_per_correct,
            option_count: self.option_count,
        }
    }

    pub fn feedback_flash(&self) -> Duration {
        Duration::from_millis(self.feedback_flash_ms)
    }

    pub fn copy_notice(&self) -> Duration {
        Duration::from_millis(self.copy_notice_ms)
    }
}

/// `<config dir>/guess-the-hex/config.json`, when the platform has one.
pub fn default_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(APP_DIR);
    path.push(CONFIG_FILE);
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.rules(), Rules::default());
        assert_eq!(config.feedback_flash(), Duration::from_millis(500));
        assert_eq!(config.copy_notice(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(r#"{ "max_health": 3, "option_count": 5 }"#);

        let config = GameConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.max_health, 3);
        assert_eq!(config.option_count, 5);
        assert_eq!(config.points_per_correct, 100);
        assert_eq!(config.feedback_flash_ms, 500);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero_health = write_config(r#"{ "max_health": 0 }"#);
        assert!(GameConfig::load(Some(zero_health.path())).is_err());

        let one_option = write_config(r#"{ "option_count": 1 }"#);
        assert!(GameConfig::load(Some(one_option.path())).is_err());

        let too_many = write_config(r#"{ "option_count": 10 }"#);
        assert!(GameConfig::load(Some(too_many.path())).is_err());
    }

    #[test]
    fn test_malformed_file() {
        let file = write_config("not json");
        let err = GameConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(GameConfig::load(Some(&missing)).is_err());
    }
}
