//! Static region → currency table.
//!
//! A small hand-maintained mapping from ISO 3166-1 alpha-2 region codes to a
//! currency display name and symbol. Unmapped regions get a sentinel entry.
//! No exchange rates, no locale formatting.

use serde::Serialize;

/// Currency display metadata for a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    pub name: &'static str,
    pub symbol: &'static str,
}

impl CurrencyInfo {
    /// Sentinel returned for regions the table does not cover.
    pub const UNKNOWN: CurrencyInfo = CurrencyInfo {
        name: "Unknown",
        symbol: "-",
    };
}

const CURRENCIES: &[(&str, CurrencyInfo)] = &[
    ("US", CurrencyInfo { name: "US Dollar", symbol: "$" }),
    ("IN", CurrencyInfo { name: "Indian Rupee", symbol: "\u{20B9}" }),
    ("GB", CurrencyInfo { name: "British Pound", symbol: "\u{A3}" }),
    ("CA", CurrencyInfo { name: "Canadian Dollar", symbol: "C$" }),
    ("AU", CurrencyInfo { name: "Australian Dollar", symbol: "A$" }),
    ("JP", CurrencyInfo { name: "Japanese Yen", symbol: "\u{A5}" }),
    ("CN", CurrencyInfo { name: "Chinese Yuan", symbol: "\u{A5}" }),
    ("DE", CurrencyInfo { name: "Euro", symbol: "\u{20AC}" }),
    ("FR", CurrencyInfo { name: "Euro", symbol: "\u{20AC}" }),
    ("IT", CurrencyInfo { name: "Euro", symbol: "\u{20AC}" }),
    ("ES", CurrencyInfo { name: "Euro", symbol: "\u{20AC}" }),
    ("BR", CurrencyInfo { name: "Brazilian Real", symbol: "R$" }),
    ("MX", CurrencyInfo { name: "Mexican Peso", symbol: "$" }),
    ("RU", CurrencyInfo { name: "Russian Ruble", symbol: "\u{20BD}" }),
    ("KR", CurrencyInfo { name: "South Korean Won", symbol: "\u{20A9}" }),
    ("ZA", CurrencyInfo { name: "South African Rand", symbol: "R" }),
    ("PK", CurrencyInfo { name: "Pakistani Rupee", symbol: "\u{20A8}" }),
    ("BD", CurrencyInfo { name: "Bangladeshi Taka", symbol: "\u{9F3}" }),
    ("NP", CurrencyInfo { name: "Nepalese Rupee", symbol: "\u{930}\u{942}" }),
];

/// Look up the currency for a region code. Total: unknown or empty input
/// returns [`CurrencyInfo::UNKNOWN`], never an error.
pub fn currency_for(region_code: &str) -> CurrencyInfo {
    let code = region_code.trim();
    CURRENCIES
        .iter()
        .find(|(rc, _)| rc.eq_ignore_ascii_case(code))
        .map(|(_, info)| *info)
        .unwrap_or(CurrencyInfo::UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_regions() {
        let inr = currency_for("IN");
        assert_eq!(inr.name, "Indian Rupee");
        assert_eq!(inr.symbol, "₹");

        let usd = currency_for("US");
        assert_eq!(usd.name, "US Dollar");
        assert_eq!(usd.symbol, "$");

        let gbp = currency_for("GB");
        assert_eq!(gbp.name, "British Pound");
        assert_eq!(gbp.symbol, "£");
    }

    #[test]
    fn test_euro_shared_by_eurozone_regions() {
        for code in ["DE", "FR", "IT", "ES"] {
            let info = currency_for(code);
            assert_eq!(info.name, "Euro");
            assert_eq!(info.symbol, "€");
        }
    }

    #[test]
    fn test_unknown_region_is_sentinel() {
        assert_eq!(currency_for("ZZ"), CurrencyInfo::UNKNOWN);
        assert_eq!(currency_for(""), CurrencyInfo::UNKNOWN);
        assert_eq!(currency_for("  "), CurrencyInfo::UNKNOWN);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(currency_for("in"), currency_for("IN"));
        assert_eq!(currency_for("uS"), currency_for("US"));
    }

    #[test]
    fn test_table_has_no_duplicate_regions() {
        for (i, (code, _)) in CURRENCIES.iter().enumerate() {
            for (other, _) in &CURRENCIES[i + 1..] {
                assert_ne!(code, other, "duplicate region {}", code);
            }
        }
    }

    #[test]
    fn test_sentinel_shape() {
        assert_eq!(CurrencyInfo::UNKNOWN.name, "Unknown");
        assert_eq!(CurrencyInfo::UNKNOWN.symbol, "-");
    }
}
