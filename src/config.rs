//! Preferences persistence
//!
//! A single JSON file holding the preferred unit system:
//! `{"unit": "metric"}`. Location: `<config dir>/bmi_calc/config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::bmi::UnitSystem;
use crate::errors::{BmiError, Result};

const APP_DIR: &str = "bmi_calc";
const CONFIG_FILE: &str = "config.json";

/// Persisted user preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub unit: UnitSystem,
}

/// On-disk shape; the unit stays a string so unknown values can fall back
#[derive(Deserialize)]
struct RawPreferences {
    unit: Option<String>,
}

impl Preferences {
    /// Default preferences file location
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .ok_or_else(|| BmiError::ConfigError("Could not determine config directory".to_string()))?;

        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load preferences, using metric on any failure
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(prefs) => prefs,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "using default preferences");
                Self::default()
            }
        }
    }

    /// Load preferences, reporting why the file could not be used
    pub fn try_load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let raw: RawPreferences = serde_json::from_str(&contents)?;

        let unit = match raw.unit {
            None => UnitSystem::default(),
            Some(text) => text.parse().unwrap_or_else(|_| {
                debug!(unit = %text, "unknown unit in preferences, using metric");
                UnitSystem::default()
            }),
        };

        Ok(Self { unit })
    }

    /// Write preferences, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| BmiError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        let contents = serde_json::to_string(self)?;
        fs::write(path, contents)
            .map_err(|e| BmiError::ConfigError(format!("Failed to write config: {}", e)))?;

        debug!(path = %path.display(), unit = %self.unit, "saved preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[test]
    fn test_default_is_metric() {
        assert_eq!(Preferences::default().unit, UnitSystem::Metric);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let prefs = Preferences { unit: UnitSystem::Imperial };
        prefs.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"unit":"imperial"}"#);
        assert_eq!(Preferences::load(&path), prefs);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        assert!(Preferences::try_load(&path).is_err());
        assert_eq!(Preferences::load(&path).unit, UnitSystem::Metric);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(Preferences::load(&path).unit, UnitSystem::Metric);
    }

    #[test]
    fn test_unknown_or_missing_unit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        fs::write(&path, r#"{"unit": "stone"}"#).unwrap();
        assert_eq!(Preferences::load(&path).unit, UnitSystem::Metric);

        fs::write(&path, r#"{}"#).unwrap();
        assert_eq!(Preferences::try_load(&path).unwrap().unit, UnitSystem::Metric);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unknown_unit_is_quiet_at_warn_level() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"unit": "stone"}"#).unwrap();

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let prefs = tracing::subscriber::with_default(subscriber, || Preferences::load(&path));
        assert_eq!(prefs.unit, UnitSystem::Metric);
        assert!(logs.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = PathBuf::from("/tmp/prefs.json");
        assert_eq!(Preferences::resolve_path(Some(path.as_path())).unwrap(), path);
    }
}
