//! Loading and saving the settings file.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::types::Settings;
use crate::error_handling::SettingsError;
use crate::utils::write_atomically;

impl Settings {
    /// Loads settings from `path`, merged over the defaults.
    ///
    /// A missing file yields the defaults. Each known key replaces its default
    /// only when its value has the right shape; otherwise the default stays
    /// and a warning is logged. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Io` if the file exists but cannot be read, and
    /// `SettingsError::Malformed` if it is not a JSON object.
    pub fn load(path: &Path) -> Result<Settings, SettingsError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings file at {}, using defaults", path.display());
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let value: Value =
            serde_json::from_str(&contents).map_err(|e| SettingsError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        let Value::Object(map) = value else {
            return Err(SettingsError::Malformed {
                path: path.to_path_buf(),
                reason: "expected a JSON object".to_string(),
            });
        };

        Ok(Settings::merged_over_defaults(&map))
    }

    fn merged_over_defaults(map: &Map<String, Value>) -> Settings {
        let mut settings = Settings::default();
        merge_field(map, "privacy_level", &mut settings.privacy_level);
        merge_field(map, "map_provider", &mut settings.map_provider);
        merge_field(map, "save_reports", &mut settings.save_reports);
        merge_field(map, "report_folder", &mut settings.report_folder);
        settings
    }

    /// Writes the four settings to `path`, replacing the whole file.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Io` if the file cannot be written; the previous
    /// file, if any, is left as it was.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomically(path, json.as_bytes()).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }
}

fn merge_field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str, slot: &mut T) {
    if let Some(value) = map.get(key) {
        match serde_json::from_value::<T>(value.clone()) {
            Ok(parsed) => *slot = parsed,
            Err(e) => warn!("Ignoring invalid settings value for '{key}': {e}"),
        }
    }
}
