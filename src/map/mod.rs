//! Map rendering.
//!
//! Writes a self-contained Leaflet page with one marker. Tiles come from the
//! provider selected in the settings.

mod document;
mod providers;

use std::path::{Path, PathBuf};

use log::info;

use crate::config::MAPBOX_TOKEN_ENV;
use crate::error_handling::LookupError;
use crate::settings::MapProvider;
use crate::utils::write_atomically;

// Re-export public API
pub use document::{popup_text, render_map_document};
pub use providers::TileSource;

/// Renders the map for the coordinates and writes it to `output`.
///
/// The Mapbox token is read from `MAPBOX_ACCESS_TOKEN` at call time.
///
/// # Errors
///
/// Returns `LookupError::MapRenderError` if the document cannot be written;
/// an existing document at `output` is left untouched.
pub fn render_map(
    latitude: f64,
    longitude: f64,
    provider: MapProvider,
    output: &Path,
) -> Result<PathBuf, LookupError> {
    let token = std::env::var(MAPBOX_TOKEN_ENV).ok();
    let tiles = provider.tile_source(token.as_deref());
    let html = render_map_document(latitude, longitude, &tiles);

    write_atomically(output, html.as_bytes())
        .map_err(|e| LookupError::MapRenderError(format!("{}: {e}", output.display())))?;
    info!("Wrote {provider} map to {}", output.display());
    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_map_writes_document() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("reports").join("location_map.html");
        let path = render_map(48.85, 2.35, MapProvider::OpenStreetMap, &output).unwrap();
        assert_eq!(path, output);
        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("[48.85, 2.35]"));
    }

    #[test]
    fn test_render_map_uses_provider_tiles() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("map.html");
        render_map(1.0, 2.0, MapProvider::Google, &output).unwrap();
        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("mt1.google.com"));
        assert!(!html.contains("openstreetmap.org"));
    }

    #[test]
    fn test_render_map_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let err = render_map(1.0, 2.0, MapProvider::OpenStreetMap, &blocker.join("map.html"))
            .unwrap_err();
        assert!(matches!(err, LookupError::MapRenderError(_)));
    }
}
