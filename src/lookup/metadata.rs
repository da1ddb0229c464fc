//! Phone metadata provider: parsing/validation via libphonenumber, plus the
//! static region tables the pipeline draws descriptions, timezones, and
//! carrier names from.

use chrono::Utc;
use chrono_tz::Tz;

use super::types::{LookupFailure, ParsedNumber};

/// Parse a raw string into a [`ParsedNumber`].
///
/// Any parse fault maps to `InvalidFormat`. The validity flag is carried on
/// the result; enforcing it is the pipeline's job.
pub fn parse_number(raw: &str) -> Result<ParsedNumber, LookupFailure> {
    let number = phonenumber::parse(None, raw)
        .map_err(|e| LookupFailure::InvalidFormat(Some(e.to_string())))?;

    let region_code = number
        .country()
        .id()
        .map(|id| id.as_ref().to_string());

    Ok(ParsedNumber {
        country_code: number.code().value(),
        national_number: number.national().value(),
        region_code,
        valid: phonenumber::is_valid(&number),
    })
}

// ─── Region metadata ────────────────────────────────────────────

struct RegionMeta {
    region: &'static str,
    name: &'static str,
    /// IANA zones covering the region. Multi-zone regions list several;
    /// the pipeline surfaces only the first, deterministically.
    zones: &'static [&'static str],
}

const REGIONS: &[RegionMeta] = &[
    RegionMeta {
        region: "US", name: "United States",
        zones: &[
            "America/New_York", "America/Chicago", "America/Denver",
            "America/Los_Angeles", "America/Anchorage", "Pacific/Honolulu",
        ],
    },
    RegionMeta {
        region: "CA", name: "Canada",
        zones: &["America/Toronto", "America/Winnipeg", "America/Edmonton", "America/Vancouver", "America/Halifax"],
    },
    RegionMeta {
        region: "AU", name: "Australia",
        zones: &["Australia/Sydney", "Australia/Adelaide", "Australia/Brisbane", "Australia/Darwin", "Australia/Perth"],
    },
    RegionMeta {
        region: "BR", name: "Brazil",
        zones: &["America/Sao_Paulo", "America/Manaus", "America/Rio_Branco"],
    },
    RegionMeta {
        region: "RU", name: "Russia",
        zones: &["Europe/Moscow", "Asia/Yekaterinburg", "Asia/Novosibirsk", "Asia/Vladivostok"],
    },
    RegionMeta {
        region: "MX", name: "Mexico",
        zones: &["America/Mexico_City", "America/Tijuana"],
    },
    RegionMeta { region: "IN", name: "India", zones: &["Asia/Kolkata"] },
    RegionMeta { region: "GB", name: "United Kingdom", zones: &["Europe/London"] },
    RegionMeta { region: "JP", name: "Japan", zones: &["Asia/Tokyo"] },
    RegionMeta { region: "CN", name: "China", zones: &["Asia/Shanghai"] },
    RegionMeta { region: "DE", name: "Germany", zones: &["Europe/Berlin"] },
    RegionMeta { region: "FR", name: "France", zones: &["Europe/Paris"] },
    RegionMeta { region: "IT", name: "Italy", zones: &["Europe/Rome"] },
    RegionMeta { region: "ES", name: "Spain", zones: &["Europe/Madrid"] },
    RegionMeta { region: "KR", name: "South Korea", zones: &["Asia/Seoul"] },
    RegionMeta { region: "ZA", name: "South Africa", zones: &["Africa/Johannesburg"] },
    RegionMeta { region: "PK", name: "Pakistan", zones: &["Asia/Karachi"] },
    RegionMeta { region: "BD", name: "Bangladesh", zones: &["Asia/Dhaka"] },
    RegionMeta { region: "NP", name: "Nepal", zones: &["Asia/Kathmandu"] },
    RegionMeta { region: "SA", name: "Saudi Arabia", zones: &["Asia/Riyadh"] },
    RegionMeta { region: "AE", name: "United Arab Emirates", zones: &["Asia/Dubai"] },
    RegionMeta { region: "SE", name: "Sweden", zones: &["Europe/Stockholm"] },
    RegionMeta { region: "NO", name: "Norway", zones: &["Europe/Oslo"] },
    RegionMeta { region: "DK", name: "Denmark", zones: &["Europe/Copenhagen"] },
    RegionMeta { region: "FI", name: "Finland", zones: &["Europe/Helsinki"] },
    RegionMeta { region: "NL", name: "Netherlands", zones: &["Europe/Amsterdam"] },
    RegionMeta { region: "BE", name: "Belgium", zones: &["Europe/Brussels"] },
    RegionMeta { region: "CH", name: "Switzerland", zones: &["Europe/Zurich"] },
    RegionMeta { region: "AT", name: "Austria", zones: &["Europe/Vienna"] },
    RegionMeta { region: "PT", name: "Portugal", zones: &["Europe/Lisbon"] },
    RegionMeta { region: "GR", name: "Greece", zones: &["Europe/Athens"] },
    RegionMeta { region: "PL", name: "Poland", zones: &["Europe/Warsaw"] },
    RegionMeta { region: "TR", name: "Turkey", zones: &["Europe/Istanbul"] },
    RegionMeta { region: "EG", name: "Egypt", zones: &["Africa/Cairo"] },
    RegionMeta { region: "MA", name: "Morocco", zones: &["Africa/Casablanca"] },
    RegionMeta { region: "NG", name: "Nigeria", zones: &["Africa/Lagos"] },
    RegionMeta { region: "KE", name: "Kenya", zones: &["Africa/Nairobi"] },
    RegionMeta { region: "IR", name: "Iran", zones: &["Asia/Tehran"] },
    RegionMeta { region: "IQ", name: "Iraq", zones: &["Asia/Baghdad"] },
    RegionMeta { region: "IL", name: "Israel", zones: &["Asia/Jerusalem"] },
    RegionMeta { region: "ID", name: "Indonesia", zones: &["Asia/Jakarta"] },
    RegionMeta { region: "MY", name: "Malaysia", zones: &["Asia/Kuala_Lumpur"] },
    RegionMeta { region: "SG", name: "Singapore", zones: &["Asia/Singapore"] },
    RegionMeta { region: "TH", name: "Thailand", zones: &["Asia/Bangkok"] },
    RegionMeta { region: "VN", name: "Vietnam", zones: &["Asia/Ho_Chi_Minh"] },
    RegionMeta { region: "PH", name: "Philippines", zones: &["Asia/Manila"] },
    RegionMeta { region: "NZ", name: "New Zealand", zones: &["Pacific/Auckland"] },
    RegionMeta { region: "AR", name: "Argentina", zones: &["America/Argentina/Buenos_Aires"] },
    RegionMeta { region: "CO", name: "Colombia", zones: &["America/Bogota"] },
    RegionMeta { region: "PE", name: "Peru", zones: &["America/Lima"] },
    RegionMeta { region: "CL", name: "Chile", zones: &["America/Santiago"] },
    RegionMeta { region: "LK", name: "Sri Lanka", zones: &["Asia/Colombo"] },
];

fn region_meta(region_code: &str) -> Option<&'static RegionMeta> {
    REGIONS.iter().find(|m| m.region.eq_ignore_ascii_case(region_code))
}

/// Country display name for a region code (e.g. "IN" → "India").
pub fn region_description(region_code: &str) -> Option<&'static str> {
    region_meta(region_code).map(|m| m.name)
}

/// IANA timezone identifiers for a region code. Empty slice when unknown.
pub fn time_zones_for_region(region_code: &str) -> &'static [&'static str] {
    region_meta(region_code).map(|m| m.zones).unwrap_or(&[])
}

// ─── Carrier prefixes ───────────────────────────────────────────

/// (country calling code, national-number prefix, carrier name).
///
/// Mobile allocations only; longest prefix wins. Misses are normal — carriers
/// are frequently unregistered for VOIP and landline ranges.
const CARRIER_PREFIXES: &[(u16, &str, &str)] = &[
    (91, "98", "Airtel"),
    (91, "99", "Vodafone Idea"),
    (91, "70", "Reliance Jio"),
    (91, "79", "Reliance Jio"),
    (91, "63", "Reliance Jio"),
    (92, "30", "Jazz"),
    (92, "31", "Zong"),
    (92, "33", "Ufone"),
    (92, "34", "Telenor Pakistan"),
    (880, "17", "Grameenphone"),
    (880, "18", "Robi"),
    (880, "19", "Banglalink"),
    (880, "16", "Airtel Bangladesh"),
    (880, "15", "Teletalk"),
    (977, "980", "Ncell"),
    (977, "981", "Ncell"),
    (977, "984", "Nepal Telecom"),
    (977, "985", "Nepal Telecom"),
];

/// Carrier name for a number, by longest matching national prefix.
pub fn carrier_for(country_code: u16, national_number: u64) -> Option<&'static str> {
    let national = national_number.to_string();
    CARRIER_PREFIXES
        .iter()
        .filter(|(cc, prefix, _)| *cc == country_code && national.starts_with(prefix))
        .max_by_key(|(_, prefix, _)| prefix.len())
        .map(|(_, _, name)| *name)
}

// ─── Timezone labels ────────────────────────────────────────────

/// Current UTC offset label for an IANA timezone, e.g. "UTC+05:30".
/// None when the identifier is not a known zone (including the
/// "Unknown" sentinel).
pub fn utc_offset_label(time_zone: &str) -> Option<String> {
    use chrono::{Offset, TimeZone};

    let tz: Tz = time_zone.parse().ok()?;
    let offset = tz.offset_from_utc_datetime(&Utc::now().naive_utc()).fix();
    let secs = offset.local_minus_utc();
    let sign = if secs < 0 { '-' } else { '+' };
    let abs = secs.unsigned_abs();
    Some(format!("UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_indian_mobile() {
        let n = parse_number("+919876543210").unwrap();
        assert_eq!(n.country_code, 91);
        assert_eq!(n.national_number, 9876543210);
        assert_eq!(n.region_code.as_deref(), Some("IN"));
        assert!(n.valid);
    }

    #[test]
    fn test_parse_garbage_is_format_error() {
        let err = parse_number("not a number").unwrap_err();
        assert!(matches!(err, LookupFailure::InvalidFormat(_)));
    }

    #[test]
    fn test_parse_wrong_length_is_invalid() {
        // Parses structurally but fails the validity predicate.
        let n = parse_number("+911234567890").unwrap();
        assert!(!n.valid);
    }

    #[test]
    fn test_region_description() {
        assert_eq!(region_description("IN"), Some("India"));
        assert_eq!(region_description("us"), Some("United States"));
        assert_eq!(region_description("ZZ"), None);
    }

    #[test]
    fn test_time_zones_first_entry_is_deterministic() {
        let zones = time_zones_for_region("US");
        assert!(zones.len() > 1);
        assert_eq!(zones[0], "America/New_York");
        assert_eq!(time_zones_for_region("IN"), &["Asia/Kolkata"]);
        assert!(time_zones_for_region("ZZ").is_empty());
    }

    #[test]
    fn test_all_zones_are_valid_iana_identifiers() {
        for meta in REGIONS {
            assert!(!meta.zones.is_empty(), "{} has no zones", meta.region);
            for zone in meta.zones {
                assert!(
                    zone.parse::<Tz>().is_ok(),
                    "{} is not a valid IANA zone",
                    zone
                );
            }
        }
    }

    #[test]
    fn test_carrier_prefix_match() {
        assert_eq!(carrier_for(91, 9876543210), Some("Airtel"));
        assert_eq!(carrier_for(880, 1712345678), Some("Grameenphone"));
        assert_eq!(carrier_for(1, 6502530000), None);
    }

    #[test]
    fn test_carrier_longest_prefix_wins() {
        // 980x (Ncell) must not be shadowed by any shorter entry.
        assert_eq!(carrier_for(977, 9801234567), Some("Ncell"));
        assert_eq!(carrier_for(977, 9841234567), Some("Nepal Telecom"));
    }

    #[test]
    fn test_utc_offset_label() {
        // Asia/Kolkata has no DST, so the label is stable year-round.
        assert_eq!(utc_offset_label("Asia/Kolkata").as_deref(), Some("UTC+05:30"));
        assert_eq!(utc_offset_label("Asia/Kathmandu").as_deref(), Some("UTC+05:45"));
        assert!(utc_offset_label("Unknown").is_none());
        assert!(utc_offset_label("").is_none());
    }
}
