//! JSON config file adapter.
//!
//! Implements [`ConfigPort`] over a path on disk.  Read-only: the screen
//! never writes its config back.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::ScreenConfig;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<ScreenConfig, ConfigError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => {
                warn!("Config read failed for {}: {}", self.path.display(), e);
                ConfigError::IoError
            }
        })?;

        let config: ScreenConfig = serde_json::from_str(&raw).map_err(|e| {
            warn!("Config parse failed for {}: {}", self.path.display(), e);
            ConfigError::Corrupted
        })?;

        config.validate()?;
        info!("Config loaded from {}", self.path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "tempconv-{}-{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_is_not_found() {
        let cfg = JsonConfigFile::new("/nonexistent/tempconv/config.json");
        assert_eq!(cfg.load(), Err(ConfigError::NotFound));
    }

    #[test]
    fn valid_file_loads() {
        let path = scratch_file("valid", r#"{"fraction_digits": 1, "unit_suffix": " F"}"#);
        let loaded = JsonConfigFile::new(&path).load().unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(loaded.fraction_digits, 1);
        assert_eq!(loaded.unit_suffix, " F");
        assert!(!loaded.replay_keystrokes);
    }

    #[test]
    fn garbage_is_corrupted() {
        let path = scratch_file("garbage", "{ not json");
        let result = JsonConfigFile::new(&path).load();
        fs::remove_file(&path).ok();
        assert_eq!(result, Err(ConfigError::Corrupted));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let path = scratch_file("range", r#"{"fraction_digits": 12}"#);
        let result = JsonConfigFile::new(&path).load();
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
    }
}
