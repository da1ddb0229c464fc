//! Geocoding adapter: free-text place name → coordinates via OpenStreetMap
//! Nominatim. Best-effort by contract; the pipeline absorbs every error here
//! into absent coordinates.

use serde::Deserialize;
use std::fmt;

use crate::lookup::Coordinates;

/// Geocoding faults. All variants are non-fatal to a lookup.
#[derive(Debug)]
pub enum GeocodeError {
    Network(String),
    InvalidResponse(String),
    NoMatch(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid geocoder response: {}", msg),
            Self::NoMatch(q) => write!(f, "No match for '{}'", q),
        }
    }
}

impl std::error::Error for GeocodeError {}

/// Narrow interface the pipeline consumes. One call per lookup, no retries.
pub trait Geocoder: Send + Sync {
    fn geocode(&self, query: &str) -> Result<Coordinates, GeocodeError>;
}

#[derive(Deserialize, Debug, Clone)]
pub struct NominatimResult {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

/// Nominatim-backed [`Geocoder`].
pub struct NominatimGeocoder;

impl NominatimGeocoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, query: &str) -> Result<Coordinates, GeocodeError> {
        let url = format!(
            "https://nominatim.openstreetmap.org/search?q={}&format=json&limit=1&addressdetails=0",
            urlencod(query),
        );

        let response = ureq::get(&url)
            .set("User-Agent", "numwatch/0.3 (phone-number-lookup)")
            .call()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let results: Vec<NominatimResult> = response
            .into_json()
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

        coordinates_from_results(&results, query)
    }
}

/// Pick the top result and parse its coordinates.
fn coordinates_from_results(
    results: &[NominatimResult],
    query: &str,
) -> Result<Coordinates, GeocodeError> {
    let top = results
        .first()
        .ok_or_else(|| GeocodeError::NoMatch(query.to_string()))?;

    let lat: f64 = top
        .lat
        .parse()
        .map_err(|_| GeocodeError::InvalidResponse(format!("bad latitude '{}'", top.lat)))?;
    let lon: f64 = top
        .lon
        .parse()
        .map_err(|_| GeocodeError::InvalidResponse(format!("bad longitude '{}'", top.lon)))?;

    if !lat.is_finite() || !lon.is_finite() {
        return Err(GeocodeError::InvalidResponse("non-finite coordinates".into()));
    }

    Ok(Coordinates { lat, lon })
}

// ─── URL encoding (minimal, no extra dep) ───────────────────────

fn urlencod(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ' ' => "%20".to_string(),
            '&' => "%26".to_string(),
            '=' => "%3D".to_string(),
            '+' => "%2B".to_string(),
            ',' => "%2C".to_string(),
            _ if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == '~' => {
                c.to_string()
            }
            _ => format!("%{:02X}", c as u32),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_urlencod() {
        assert_eq!(urlencod("India"), "India");
        assert_eq!(urlencod("United States"), "United%20States");
        assert_eq!(urlencod("a+b=c"), "a%2Bb%3Dc");
    }

    #[test]
    fn test_coordinates_from_top_result() {
        let results: Vec<NominatimResult> = serde_json::from_str(
            r#"[
                {"lat": "20.5937", "lon": "78.9629", "display_name": "India"},
                {"lat": "0.0", "lon": "0.0", "display_name": "Other"}
            ]"#,
        )
        .unwrap();

        let coords = coordinates_from_results(&results, "India").unwrap();
        assert_relative_eq!(coords.lat, 20.5937, max_relative = 1e-9);
        assert_relative_eq!(coords.lon, 78.9629, max_relative = 1e-9);
    }

    #[test]
    fn test_empty_results_is_no_match() {
        let err = coordinates_from_results(&[], "Atlantis").unwrap_err();
        assert!(matches!(err, GeocodeError::NoMatch(_)));
    }

    #[test]
    fn test_unparsable_coordinates_are_invalid_response() {
        let results = vec![NominatimResult {
            lat: "north".into(),
            lon: "78.9629".into(),
            display_name: "India".into(),
        }];
        let err = coordinates_from_results(&results, "India").unwrap_err();
        assert!(matches!(err, GeocodeError::InvalidResponse(_)));
    }
}
