//! Settings data structures.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Privacy level chosen by the user.
///
/// Stored and shown only; no lookup behaviour depends on it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PrivacyLevel {
    /// Low privacy
    Low,
    /// Medium privacy (default)
    #[default]
    Medium,
    /// High privacy
    High,
}

/// Tile source used by the map renderer.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MapProvider {
    /// OpenStreetMap standard tiles (default, no key needed)
    #[default]
    #[value(name = "openstreetmap")]
    OpenStreetMap,
    /// Google road map tiles
    Google,
    /// Mapbox streets style, needs an access token
    Mapbox,
}

/// User settings persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Privacy level
    pub privacy_level: PrivacyLevel,
    /// Map tile provider
    pub map_provider: MapProvider,
    /// Save a report automatically after every successful lookup
    pub save_reports: bool,
    /// Folder receiving reports and, by default, the map document
    pub report_folder: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            privacy_level: PrivacyLevel::Medium,
            map_provider: MapProvider::OpenStreetMap,
            save_reports: true,
            report_folder: PathBuf::from("reports"),
        }
    }
}
