//! Lookup subsystem for numwatch.
//!
//! Parses and validates phone numbers, derives region/carrier/timezone
//! metadata, maps the region to currency data, and attaches best-effort
//! geocoded coordinates.

pub mod metadata;
pub mod pipeline;
pub mod types;

pub use pipeline::LookupPipeline;
pub use types::{Coordinates, LookupFailure, LookupReport, LookupResult, ParsedNumber};
