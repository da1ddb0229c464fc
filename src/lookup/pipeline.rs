//! The lookup pipeline — turns a raw phone-number string into one
//! [`LookupResult`] or a typed failure.
//!
//! Flow: local empty guard → parse → validate → region/carrier/timezone →
//! currency table → best-effort geocode → assemble.

use chrono::Utc;

use super::metadata;
use super::types::{LookupFailure, LookupResult, UNKNOWN};
use crate::currency;
use crate::geocode::{Geocoder, NominatimGeocoder};

/// The pipeline, holding only its geocoding collaborator. Stateless across
/// calls: concurrent lookups through separate instances are independent.
pub struct LookupPipeline {
    geocoder: Box<dyn Geocoder>,
}

impl LookupPipeline {
    pub fn new() -> Self {
        Self {
            geocoder: Box::new(NominatimGeocoder::new()),
        }
    }

    /// Build with a specific geocoder (for testing).
    pub fn with_geocoder(geocoder: Box<dyn Geocoder>) -> Self {
        Self { geocoder }
    }

    /// Run one lookup. Format/validity faults are terminal; geocoding faults
    /// degrade only the coordinates field.
    pub fn lookup(&self, raw: &str) -> Result<LookupResult, LookupFailure> {
        // Local guard: never spend a provider call on blank input.
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(LookupFailure::InvalidFormat(Some("empty input".into())));
        }

        let number = metadata::parse_number(raw)?;
        if !number.valid {
            // Stop before the metadata lookups: carrier/timezone data for a
            // malformed number would be misleading.
            return Err(LookupFailure::InvalidNumber(None));
        }

        let region_code = number.region_code.as_deref().unwrap_or("");
        let region_description = metadata::region_description(region_code);

        let carrier = metadata::carrier_for(number.country_code, number.national_number)
            .unwrap_or(UNKNOWN)
            .to_string();

        let time_zone = metadata::time_zones_for_region(region_code)
            .first()
            .copied()
            .unwrap_or(UNKNOWN)
            .to_string();

        let currency = currency::currency_for(region_code);

        // Best-effort: swallow geocoding faults, keep the rest of the result.
        let coordinates = region_description
            .and_then(|desc| self.geocoder.geocode(desc).ok());

        Ok(LookupResult {
            number,
            region_description: region_description.unwrap_or(UNKNOWN).to_string(),
            carrier,
            time_zone,
            currency,
            coordinates,
            checked_at: Utc::now(),
        })
    }
}

impl Default for LookupPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::GeocodeError;
    use crate::lookup::Coordinates;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubGeocoder {
        calls: Arc<AtomicUsize>,
        response: Result<Coordinates, ()>,
    }

    impl Geocoder for StubGeocoder {
        fn geocode(&self, query: &str) -> Result<Coordinates, GeocodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response
                .map_err(|_| GeocodeError::NoMatch(query.to_string()))
        }
    }

    fn stub_pipeline(response: Result<Coordinates, ()>) -> (LookupPipeline, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let pipeline = LookupPipeline::with_geocoder(Box::new(StubGeocoder {
            calls: calls.clone(),
            response,
        }));
        (pipeline, calls)
    }

    const DELHI: Coordinates = Coordinates { lat: 28.6139, lon: 77.2090 };

    #[test]
    fn test_empty_input_rejected_before_any_provider_call() {
        let (pipeline, calls) = stub_pipeline(Ok(DELHI));
        for input in ["", "   ", "\t\n"] {
            let err = pipeline.lookup(input).unwrap_err();
            assert!(matches!(err, LookupFailure::InvalidFormat(_)), "input {:?}", input);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unparsable_input_is_invalid_format() {
        let (pipeline, calls) = stub_pipeline(Ok(DELHI));
        let err = pipeline.lookup("not a number").unwrap_err();
        assert!(matches!(err, LookupFailure::InvalidFormat(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_parsable_but_invalid_is_invalid_number() {
        let (pipeline, calls) = stub_pipeline(Ok(DELHI));
        let err = pipeline.lookup("+911234567890").unwrap_err();
        assert!(matches!(err, LookupFailure::InvalidNumber(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_valid_indian_mobile_full_result() {
        let (pipeline, calls) = stub_pipeline(Ok(DELHI));
        let result = pipeline.lookup("+919876543210").unwrap();

        assert_eq!(result.region_description, "India");
        assert_eq!(result.carrier, "Airtel");
        assert_eq!(result.time_zone, "Asia/Kolkata");
        assert_eq!(result.currency.name, "Indian Rupee");
        assert_eq!(result.currency.symbol, "₹");
        assert_eq!(result.coordinates, Some(DELHI));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_input_is_trimmed() {
        let (pipeline, _) = stub_pipeline(Ok(DELHI));
        let result = pipeline.lookup("  +919876543210  ").unwrap();
        assert_eq!(result.number.e164(), "+919876543210");
    }

    #[test]
    fn test_geocode_failure_degrades_to_absent_coordinates() {
        let (pipeline, calls) = stub_pipeline(Err(()));
        let result = pipeline.lookup("+919876543210").unwrap();

        assert!(result.coordinates.is_none());
        // Everything else is independent of the geocoding outcome.
        assert_eq!(result.region_description, "India");
        assert_eq!(result.carrier, "Airtel");
        assert_eq!(result.time_zone, "Asia/Kolkata");
        assert_eq!(result.currency.symbol, "₹");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unregistered_carrier_is_unknown_not_empty() {
        let (pipeline, _) = stub_pipeline(Err(()));
        let result = pipeline.lookup("+16502530000").unwrap();
        assert_eq!(result.carrier, "Unknown");
        assert_eq!(result.region_description, "United States");
        assert_eq!(result.time_zone, "America/New_York");
        assert_eq!(result.currency.name, "US Dollar");
    }

    #[test]
    fn test_report_round_trips_through_pipeline() {
        let (pipeline, _) = stub_pipeline(Ok(DELHI));
        let report = pipeline.lookup("+919876543210").unwrap().report();
        assert!(report.map_available);
        assert_eq!(report.region_code.as_deref(), Some("IN"));
        assert_eq!(report.number, "+919876543210");
    }
}
