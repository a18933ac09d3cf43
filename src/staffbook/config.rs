//! # Configuration
//!
//! Configuration lives in `<home>/config.json`. The home directory resolves, in
//! priority order, from:
//!
//! 1. The `--home` command-line flag
//! 2. The `STAFFBOOK_HOME` environment variable
//! 3. The OS data directory (via the `directories` crate)
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `picture-dir` | `<home>/images` | Managed directory for employee pictures |
//!
//! Relative `picture-dir` values are resolved against the home directory.

use crate::error::{Result, StaffError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PICTURE_DIR: &str = "images";
pub const HOME_ENV: &str = "STAFFBOOK_HOME";

pub const KEYS: [&str; 1] = ["picture-dir"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffConfig {
    /// Managed picture directory. When absent, `<home>/images`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_dir: Option<PathBuf>,
}

impl StaffConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StaffError::Io)?;
        let config: StaffConfig =
            serde_json::from_str(&content).map_err(StaffError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StaffError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(StaffError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(StaffError::Io)?;
        Ok(())
    }

    pub fn picture_dir(&self, home: &Path) -> PathBuf {
        match &self.picture_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => home.join(dir),
            None => home.join(DEFAULT_PICTURE_DIR),
        }
    }

    pub fn get(&self, key: &str, home: &Path) -> Option<String> {
        match key {
            "picture-dir" => Some(self.picture_dir(home).display().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "picture-dir" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("picture-dir cannot be empty".to_string());
                }
                self.picture_dir = Some(PathBuf::from(value));
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

/// Resolves the home directory from the flag, the environment, then the OS default.
pub fn resolve_home(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = flag {
        return Ok(home);
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "staffbook", "staffbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StaffError::Config("could not determine a data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_picture_dir_is_under_home() {
        let config = StaffConfig::default();
        assert_eq!(
            config.picture_dir(Path::new("/srv/staff")),
            PathBuf::from("/srv/staff/images")
        );
    }

    #[test]
    fn relative_picture_dir_resolves_against_home() {
        let mut config = StaffConfig::default();
        config.set("picture-dir", "pics").unwrap();
        assert_eq!(
            config.picture_dir(Path::new("/srv/staff")),
            PathBuf::from("/srv/staff/pics")
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = StaffConfig::default();
        assert!(config.set("theme", "dark").is_err());
        assert!(config.get("theme", Path::new("/")).is_none());
    }

    #[test]
    fn empty_picture_dir_is_rejected() {
        let mut config = StaffConfig::default();
        assert!(config.set("picture-dir", "  ").is_err());
        assert_eq!(config, StaffConfig::default());
    }

    #[test]
    fn load_missing_config() {
        let temp = tempfile::tempdir().unwrap();
        let config = StaffConfig::load(temp.path()).unwrap();
        assert_eq!(config, StaffConfig::default());
    }

    #[test]
    fn save_and_load() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("home");

        let mut config = StaffConfig::default();
        config.set("picture-dir", "/var/pictures").unwrap();
        config.save(&dir).unwrap();

        let loaded = StaffConfig::load(&dir).unwrap();
        assert_eq!(loaded.picture_dir, Some(PathBuf::from("/var/pictures")));
    }

    #[test]
    fn explicit_flag_is_used_verbatim() {
        let home = resolve_home(Some(PathBuf::from("/from/flag"))).unwrap();
        assert_eq!(home, PathBuf::from("/from/flag"));
    }
}
