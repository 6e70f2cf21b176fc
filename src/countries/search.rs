//! Relevance-ranked country search.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::data::COUNTRIES;
use super::Country;

/// Result count used when the caller has no preference.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// How closely a row matches the query. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    /// Name or code equals the query.
    Exact,
    /// Name or code starts with the query.
    Prefix,
    /// Query appears somewhere inside the name or code.
    Partial,
}

/// Search names and codes for `query`, best matches first.
///
/// Rows whose lowercased name or code contains the lowercased query are kept,
/// ordered by rank and then alphabetically by name (accents ignored, so
/// "Åland Islands" sorts with the A's), and cut to `limit`.
pub fn search(query: &str, limit: usize) -> Vec<&'static Country> {
    if limit == 0 {
        return Vec::new();
    }

    let query = query.to_lowercase();

    let mut ranked: Vec<(Rank, String, &'static Country)> = COUNTRIES
        .iter()
        .filter_map(|country| {
            let name = country.name.to_lowercase();
            let code = country.iso.to_ascii_lowercase();
            rank(&query, &name, &code).map(|r| (r, sort_key(&name), country))
        })
        .collect();

    // Stable, so equal (rank, key) pairs keep directory order.
    ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    ranked.truncate(limit);

    ranked.into_iter().map(|(_, _, country)| country).collect()
}

/// Lowercased name with diacritics stripped, for alphabetical ordering.
fn sort_key(lower_name: &str) -> String {
    lower_name.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

fn rank(query: &str, name: &str, code: &str) -> Option<Rank> {
    if name == query || code == query {
        Some(Rank::Exact)
    } else if name.starts_with(query) || code.starts_with(query) {
        Some(Rank::Prefix)
    } else if name.contains(query) || code.contains(query) {
        Some(Rank::Partial)
    } else {
        None
    }
}
