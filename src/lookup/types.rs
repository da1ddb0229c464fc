//! Core types for the lookup subsystem.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::currency::CurrencyInfo;
use crate::lookup::metadata;

/// Sentinel used when the provider has no carrier or timezone data.
pub const UNKNOWN: &str = "Unknown";

/// Structured form of a valid phone number, derived once per request.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedNumber {
    /// Country calling code (e.g. 91 for India).
    pub country_code: u16,
    /// National significant number.
    pub national_number: u64,
    /// ISO 3166-1 alpha-2 region code, if the number maps to one.
    pub region_code: Option<String>,
    pub valid: bool,
}

impl ParsedNumber {
    /// E.164-style rendering: "+919876543210".
    pub fn e164(&self) -> String {
        format!("+{}{}", self.country_code, self.national_number)
    }
}

/// A latitude/longitude pair in finite floating-point degrees.
///
/// The pair exists as a whole or not at all; callers hold an
/// `Option<Coordinates>`, never one field without the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Round both fields to 4 decimal places for display and reporting.
    pub fn rounded(&self) -> (f64, f64) {
        (round4(self.lat), round4(self.lon))
    }
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Aggregate output of one successful pipeline run. Immutable, caller-owned.
#[derive(Debug, Clone)]
pub struct LookupResult {
    pub number: ParsedNumber,
    /// Human-readable region description (e.g. "India").
    pub region_description: String,
    /// Carrier name, or "Unknown" when unregistered (VOIP/landline numbers often are).
    pub carrier: String,
    /// First IANA timezone of the number's region, or "Unknown".
    pub time_zone: String,
    pub currency: CurrencyInfo,
    /// Present only when geocoding succeeded.
    pub coordinates: Option<Coordinates>,
    pub checked_at: DateTime<Utc>,
}

impl LookupResult {
    /// Flatten into the serializable output record for presentation layers.
    pub fn report(&self) -> LookupReport {
        let (lat, lon) = match self.coordinates {
            Some(c) => {
                let (lat, lon) = c.rounded();
                (Some(lat), Some(lon))
            }
            None => (None, None),
        };
        LookupReport {
            number: self.number.e164(),
            region_code: self.number.region_code.clone(),
            region: self.region_description.clone(),
            carrier: self.carrier.clone(),
            time_zone: self.time_zone.clone(),
            tz_label: metadata::utc_offset_label(&self.time_zone),
            currency_name: self.currency.name.to_string(),
            currency_symbol: self.currency.symbol.to_string(),
            latitude: lat,
            longitude: lon,
            map_available: self.coordinates.is_some(),
            checked_at: self.checked_at,
        }
    }

    /// Multi-line human-readable block for the CLI banner.
    pub fn display_block(&self) -> String {
        let coords = match self.coordinates {
            Some(c) => {
                let (lat, lon) = c.rounded();
                format!("{:.4}, {:.4}", lat, lon)
            }
            None => "Not available".to_string(),
        };
        format!(
            "\u{1F4F1} {}\n  \u{1F30D} {}\n  \u{1F4E1} {}\n  \u{1F552} {}\n  \u{1F4B0} {} ({})\n  \u{1F4D0} {}",
            self.number.e164(),
            self.region_description,
            self.carrier,
            self.time_zone,
            self.currency.name,
            self.currency.symbol,
            coords,
        )
    }
}

/// The output record handed to presentation layers (CLI JSON, web API).
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub number: String,
    pub region_code: Option<String>,
    pub region: String,
    pub carrier: String,
    pub time_zone: String,
    /// UTC offset label for the timezone (e.g. "UTC+05:30"), when resolvable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tz_label: Option<String>,
    pub currency_name: String,
    pub currency_symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// True iff both coordinates are present.
    pub map_available: bool,
    pub checked_at: DateTime<Utc>,
}

/// Terminal lookup failures, surfaced to the caller as distinct kinds.
///
/// Geocoding faults are deliberately absent here: they are absorbed by the
/// pipeline and manifest only as `coordinates: None` on the result.
#[derive(Debug)]
pub enum LookupFailure {
    /// The input could not be parsed as a phone number at all.
    InvalidFormat(Option<String>),
    /// The input parsed but failed the validity check.
    InvalidNumber(Option<String>),
    /// Any other provider fault.
    Unexpected(String),
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(Some(msg)) => {
                write!(f, "Invalid number format: {}", msg)
            }
            Self::InvalidFormat(None) => {
                write!(f, "Invalid number format. Use international format, e.g. +919876543210")
            }
            Self::InvalidNumber(Some(msg)) => write!(f, "Invalid phone number: {}", msg),
            Self::InvalidNumber(None) => write!(f, "Invalid phone number"),
            Self::Unexpected(msg) => write!(f, "Unexpected lookup error: {}", msg),
        }
    }
}

impl std::error::Error for LookupFailure {}
