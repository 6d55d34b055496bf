//! User settings.
//!
//! Four values (privacy level, map provider, auto-save flag and report folder)
//! kept in a flat JSON file. Built-in defaults fill in whatever the file lacks.

mod store;
mod types;

// Re-export public API
pub use types::{MapProvider, PrivacyLevel, Settings};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::SettingsError;
    use std::fs;
    use std::path::PathBuf;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.privacy_level, PrivacyLevel::Medium);
        assert_eq!(settings.map_provider, MapProvider::OpenStreetMap);
        assert!(settings.save_reports);
        assert_eq!(settings.report_folder, PathBuf::from("reports"));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = Settings::load(&dir.path().join("absent.json")).expect("not an error");
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"map_provider": "google", "save_reports": false}"#).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.map_provider, MapProvider::Google);
        assert!(!loaded.save_reports);
        assert_eq!(loaded.privacy_level, PrivacyLevel::Medium);
        assert_eq!(loaded.report_folder, PathBuf::from("reports"));
    }

    #[test]
    fn test_invalid_value_keeps_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"privacy_level": "extreme", "save_reports": "yes", "report_folder": "out"}"#,
        )
        .unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.privacy_level, PrivacyLevel::Medium);
        assert!(loaded.save_reports);
        assert_eq!(loaded.report_folder, PathBuf::from("out"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme": "dark", "privacy_level": "high"}"#).unwrap();
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.privacy_level, PrivacyLevel::High);
    }

    #[test]
    fn test_non_object_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Malformed { .. })
        ));

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Malformed { .. })
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            privacy_level: PrivacyLevel::Low,
            map_provider: MapProvider::Mapbox,
            save_reports: false,
            report_folder: PathBuf::from("/tmp/geo"),
        };
        settings.save(&path).expect("save should succeed");
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_saved_file_has_exactly_four_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        Settings::default().save(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let object = value.as_object().expect("settings are an object");
        assert_eq!(object.len(), 4);
        assert_eq!(object["privacy_level"], "medium");
        assert_eq!(object["map_provider"], "openstreetmap");
        assert_eq!(object["save_reports"], true);
        assert_eq!(object["report_folder"], "reports");
    }

    #[test]
    fn test_enum_names_match_file_format() {
        for provider in MapProvider::iter() {
            let json = serde_json::to_string(&provider).unwrap();
            assert_eq!(json, format!("\"{provider}\""));
            assert_eq!(MapProvider::from_str(&provider.to_string()).unwrap(), provider);
        }
        for level in PrivacyLevel::iter() {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
        }
    }
}
