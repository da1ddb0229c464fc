//! Map artifact writer.
//!
//! Renders a self-contained Leaflet HTML document with a single marker at the
//! given coordinates and saves it to one fixed path, overwritten per call.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::lookup::Coordinates;

/// Default artifact path, relative to the working directory.
pub const DEFAULT_MAP_PATH: &str = "location_map.html";

#[derive(Debug)]
pub enum MapError {
    /// The lookup produced no coordinates; nothing is written.
    NoCoordinates,
    Io(std::io::Error),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCoordinates => write!(f, "Location coordinates not available"),
            Self::Io(e) => write!(f, "Cannot write map file: {}", e),
        }
    }
}

impl std::error::Error for MapError {}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Write the map artifact for the given coordinates, overwriting any previous
/// one. Fails with [`MapError::NoCoordinates`] when the pair is absent, and
/// leaves the artifact untouched in that case.
pub fn write_map(coords: Option<&Coordinates>, path: &Path) -> Result<(), MapError> {
    let coords = coords.ok_or(MapError::NoCoordinates)?;
    fs::write(path, render_html(coords))?;
    Ok(())
}

fn render_html(coords: &Coordinates) -> String {
    let (lat, lon) = coords.rounded();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Tracked Location</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([{lat:.4}, {lon:.4}], 10);
L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
L.marker([{lat:.4}, {lon:.4}])
    .addTo(map)
    .bindTooltip('Click for details')
    .bindPopup('Tracked Location<br>Lat: {lat:.4}<br>Lon: {lon:.4}');
</script>
</body>
</html>
"#,
        lat = lat,
        lon = lon,
    )
}
