//! HTML map document.

use super::providers::TileSource;
use crate::config::MAP_ZOOM;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>Estimated location</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { width: 100%; height: 100%; margin: 0; padding: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map("map").setView([@LAT@, @LON@], @ZOOM@);
L.tileLayer(@TILE_URL@, { attribution: @ATTRIBUTION@, maxZoom: 19 }).addTo(map);
var icon = L.divIcon({
  className: "",
  html: '<div style="width:18px;height:18px;border-radius:50%;background:#d63e2a;border:2px solid #fff;box-shadow:0 0 4px #333;"></div>',
  iconSize: [22, 22],
  iconAnchor: [11, 11]
});
L.marker([@LAT@, @LON@], { icon: icon }).addTo(map).bindPopup(@POPUP@);
</script>
</body>
</html>
"#;

/// Popup text of the marker.
pub fn popup_text(latitude: f64, longitude: f64) -> String {
    format!("Estimated location: {latitude}, {longitude}")
}

/// Renders a standalone Leaflet page with one marker at the coordinates.
pub fn render_map_document(latitude: f64, longitude: f64, tiles: &TileSource) -> String {
    TEMPLATE
        .replace("@LAT@", &latitude.to_string())
        .replace("@LON@", &longitude.to_string())
        .replace("@ZOOM@", &MAP_ZOOM.to_string())
        .replace("@TILE_URL@", &js_string(&tiles.url_template))
        .replace("@ATTRIBUTION@", &js_string(tiles.attribution))
        .replace("@POPUP@", &js_string(&popup_text(latitude, longitude)))
}

/// Quotes `s` as a JavaScript string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}
