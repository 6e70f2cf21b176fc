//! SVG flag data embedded at compile time.
//!
//! Simplified 4:3 renditions drawn for this crate. Countries outside this set
//! are served from the CDN or as placeholders.

// =============================================================================
// Americas & Oceania
// =============================================================================
const FLAG_US: &str = include_str!("../../assets/flags/us.svg");

// =============================================================================
// Europe - Western
// =============================================================================
const FLAG_AT: &str = include_str!("../../assets/flags/at.svg");
const FLAG_BE: &str = include_str!("../../assets/flags/be.svg");
const FLAG_CH: &str = include_str!("../../assets/flags/ch.svg");
const FLAG_DE: &str = include_str!("../../assets/flags/de.svg");
const FLAG_FR: &str = include_str!("../../assets/flags/fr.svg");
const FLAG_IE: &str = include_str!("../../assets/flags/ie.svg");
const FLAG_LU: &str = include_str!("../../assets/flags/lu.svg");
const FLAG_MC: &str = include_str!("../../assets/flags/mc.svg");
const FLAG_NL: &str = include_str!("../../assets/flags/nl.svg");

// =============================================================================
// Europe - Southern
// =============================================================================
const FLAG_IT: &str = include_str!("../../assets/flags/it.svg");

// =============================================================================
// Europe - Central & Eastern
// =============================================================================
const FLAG_PL: &str = include_str!("../../assets/flags/pl.svg");
const FLAG_RO: &str = include_str!("../../assets/flags/ro.svg");
const FLAG_RU: &str = include_str!("../../assets/flags/ru.svg");
const FLAG_UA: &str = include_str!("../../assets/flags/ua.svg");

// =============================================================================
// Europe - Nordic & Baltic
// =============================================================================
const FLAG_DK: &str = include_str!("../../assets/flags/dk.svg");
const FLAG_EE: &str = include_str!("../../assets/flags/ee.svg");
const FLAG_FI: &str = include_str!("../../assets/flags/fi.svg");
const FLAG_LT: &str = include_str!("../../assets/flags/lt.svg");
const FLAG_NO: &str = include_str!("../../assets/flags/no.svg");
const FLAG_SE: &str = include_str!("../../assets/flags/se.svg");

// =============================================================================
// Asia
// =============================================================================
const FLAG_BD: &str = include_str!("../../assets/flags/bd.svg");
const FLAG_ID: &str = include_str!("../../assets/flags/id.svg");
const FLAG_JP: &str = include_str!("../../assets/flags/jp.svg");

// =============================================================================
// Africa
// =============================================================================
const FLAG_NG: &str = include_str!("../../assets/flags/ng.svg");

/// Codes with embedded artwork, uppercase.
pub const EMBEDDED_CODES: &[&str] = &[
    "AT", "BD", "BE", "CH", "DE", "DK", "EE", "FI", "FR", "ID", "IE", "IT", "JP", "LT", "LU",
    "MC", "NG", "NL", "NO", "PL", "RO", "RU", "SE", "UA", "US",
];

/// Get embedded SVG markup for a country code (case-insensitive).
///
/// Returns `None` when the code has no embedded artwork.
pub fn get_flag_svg(country_code: &str) -> Option<&'static str> {
    let svg = match country_code.to_ascii_uppercase().as_str() {
        // Americas & Oceania
        "US" => FLAG_US,

        // Europe - Western
        "AT" => FLAG_AT,
        "BE" => FLAG_BE,
        "CH" => FLAG_CH,
        "DE" => FLAG_DE,
        "FR" => FLAG_FR,
        "IE" => FLAG_IE,
        "LU" => FLAG_LU,
        "MC" => FLAG_MC,
        "NL" => FLAG_NL,

        // Europe - Southern
        "IT" => FLAG_IT,

        // Europe - Central & Eastern
        "PL" => FLAG_PL,
        "RO" => FLAG_RO,
        "RU" => FLAG_RU,
        "UA" => FLAG_UA,

        // Europe - Nordic & Baltic
        "DK" => FLAG_DK,
        "EE" => FLAG_EE,
        "FI" => FLAG_FI,
        "LT" => FLAG_LT,
        "NO" => FLAG_NO,
        "SE" => FLAG_SE,

        // Asia
        "BD" => FLAG_BD,
        "ID" => FLAG_ID,
        "JP" => FLAG_JP,

        // Africa
        "NG" => FLAG_NG,

        _ => return None,
    };
    Some(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_code_has_markup() {
        for code in EMBEDDED_CODES {
            let svg = get_flag_svg(code).unwrap_or_else(|| panic!("missing {code}"));
            assert!(svg.starts_with("<svg"), "{code}");
            assert!(svg.trim_end().ends_with("</svg>"), "{code}");
            assert!(crate::countries::exists(code), "{code} not in directory");
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(get_flag_svg("fr"), get_flag_svg("FR"));
        assert!(get_flag_svg("zw").is_none());
        assert!(get_flag_svg("").is_none());
    }
}
