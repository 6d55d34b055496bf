//! Tile sources for each map provider.

use crate::config::MAPBOX_TOKEN_PLACEHOLDER;
use crate::settings::MapProvider;

/// A tile URL template and the attribution it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSource {
    /// Leaflet URL template (`{z}`, `{x}`, `{y}`, optional `{s}`)
    pub url_template: String,
    /// Attribution shown in the map corner
    pub attribution: &'static str,
}

impl MapProvider {
    /// Tile source for this provider.
    ///
    /// `mapbox_token` is only used by [`MapProvider::Mapbox`]; without it the
    /// template carries a placeholder and tiles will not load.
    pub fn tile_source(&self, mapbox_token: Option<&str>) -> TileSource {
        match self {
            MapProvider::OpenStreetMap => TileSource {
                url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                attribution: "&copy; OpenStreetMap contributors",
            },
            MapProvider::Google => TileSource {
                url_template: "https://mt1.google.com/vt/lyrs=m&x={x}&y={y}&z={z}".to_string(),
                attribution: "Google",
            },
            MapProvider::Mapbox => {
                let token = mapbox_token
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or(MAPBOX_TOKEN_PLACEHOLDER);
                TileSource {
                    url_template: format!(
                        "https://api.mapbox.com/styles/v1/mapbox/streets-v11/tiles/{{z}}/{{x}}/{{y}}?access_token={token}"
                    ),
                    attribution: "Mapbox",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openstreetmap_is_default_and_keyless() {
        let source = MapProvider::default().tile_source(Some("ignored"));
        assert_eq!(
            source.url_template,
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
        );
    }

    #[test]
    fn test_mapbox_token_substitution() {
        let source = MapProvider::Mapbox.tile_source(Some("pk.abc"));
        assert!(source.url_template.ends_with("?access_token=pk.abc"));
        assert!(source.url_template.contains("/tiles/{z}/{x}/{y}"));
    }

    #[test]
    fn test_mapbox_without_token_uses_placeholder() {
        let source = MapProvider::Mapbox.tile_source(None);
        assert!(source.url_template.ends_with("access_token=YOUR_MAPBOX_TOKEN"));
        let blank = MapProvider::Mapbox.tile_source(Some(" "));
        assert_eq!(blank, source);
    }

    #[test]
    fn test_google_template() {
        let source = MapProvider::Google.tile_source(None);
        assert_eq!(source.attribution, "Google");
        assert!(source.url_template.contains("lyrs=m"));
    }
}
