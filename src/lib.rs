//! Core library for numwatch.
//!
//! This crate defines:
//! - The lookup pipeline: phone number → region, carrier, timezone, currency,
//!   best-effort coordinates
//! - The static region/currency tables backing it
//! - The Nominatim geocoding adapter and the map artifact writer
//! - An axum web form as an optional presentation surface
//!
//! It is used by the `numwatch` binary, but can also be reused by other
//! binaries or services.

pub mod currency;
pub mod geocode;
pub mod lookup;
pub mod mapgen;
pub mod server;

pub use currency::{currency_for, CurrencyInfo};
pub use geocode::{GeocodeError, Geocoder, NominatimGeocoder};
pub use lookup::{Coordinates, LookupFailure, LookupPipeline, LookupReport, LookupResult, ParsedNumber};
pub use mapgen::{write_map, MapError, DEFAULT_MAP_PATH};
