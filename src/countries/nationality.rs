//! Nationality adjective to country code mapping.
//!
//! The core set is american, british, english, canadian, german, french,
//! japanese, indian, brazilian, australian and swiss. The remaining entries
//! (scottish, welsh, irish, mexican, italian, spanish, dutch, chinese) are
//! additions on top of it.

/// Map a nationality adjective to its ISO 3166-1 alpha-2 code.
///
/// Matching ignores case ("American", "american" -> "US").
/// Returns `None` for adjectives that are not in the table.
pub fn nationality_to_code(term: &str) -> Option<&'static str> {
    let code = match term.to_lowercase().as_str() {
        // Americas
        "american" => "US",
        "canadian" => "CA",
        "mexican" => "MX",
        "brazilian" => "BR",

        // British Isles
        "british" | "english" | "scottish" | "welsh" => "GB",
        "irish" => "IE",

        // Europe
        "german" => "DE",
        "french" => "FR",
        "swiss" => "CH",
        "italian" => "IT",
        "spanish" => "ES",
        "dutch" => "NL",

        // Asia & Oceania
        "japanese" => "JP",
        "chinese" => "CN",
        "indian" => "IN",
        "australian" => "AU",

        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_adjectives() {
        assert_eq!(nationality_to_code("American"), Some("US"));
        assert_eq!(nationality_to_code("english"), Some("GB"));
        assert_eq!(nationality_to_code("DUTCH"), Some("NL"));
    }

    #[test]
    fn core_set() {
        let core = [
            ("american", "US"),
            ("british", "GB"),
            ("english", "GB"),
            ("canadian", "CA"),
            ("german", "DE"),
            ("french", "FR"),
            ("japanese", "JP"),
            ("indian", "IN"),
            ("brazilian", "BR"),
            ("australian", "AU"),
            ("swiss", "CH"),
        ];
        for (term, code) in core {
            assert_eq!(nationality_to_code(term), Some(code), "{term}");
        }
    }

    #[test]
    fn unknown_adjectives() {
        assert_eq!(nationality_to_code("martian"), None);
        assert_eq!(nationality_to_code(""), None);
        assert_eq!(nationality_to_code(" american"), None);
    }

    #[test]
    fn every_code_is_in_the_directory() {
        for term in [
            "american", "canadian", "mexican", "brazilian", "british", "english", "scottish",
            "welsh", "irish", "german", "french", "swiss", "italian", "spanish", "dutch",
            "japanese", "chinese", "indian", "australian",
        ] {
            let code = nationality_to_code(term).unwrap();
            assert!(crate::countries::exists(code), "{term} -> {code}");
        }
    }
}
