//! Country directory - static ISO 3166-1 metadata and lookups.
//!
//! The table is compiled into the binary and never mutated. Every lookup is
//! a linear scan; with a few hundred rows that is cheaper than building an
//! index at startup.

mod data;
mod nationality;
mod search;

use serde::Serialize;

pub use nationality::nationality_to_code;
pub use search::{search, DEFAULT_SEARCH_LIMIT};

use data::COUNTRIES;

/// A single directory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, uppercase.
    pub iso: &'static str,
    /// English short name.
    pub name: &'static str,
    /// Regional-indicator flag emoji, if one exists for the code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<&'static str>,
}

impl Country {
    pub(crate) const fn new(iso: &'static str, name: &'static str, emoji: Option<&'static str>) -> Self {
        Self { iso, name, emoji }
    }
}

/// All countries, in directory order (alphabetical by name).
pub fn all() -> &'static [Country] {
    &COUNTRIES
}

/// Find a country by ISO code, ignoring ASCII case.
///
/// ```
/// let us = flagkit::countries::get_by_code("us").unwrap();
/// assert_eq!(us.name, "United States");
/// assert!(flagkit::countries::get_by_code("XX").is_none());
/// ```
pub fn get_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.iso.eq_ignore_ascii_case(code))
}

/// Find the first country whose name contains `name`, or whose name is
/// contained in `name`, ignoring case.
///
/// The result is the first match in directory order, so a partial query such
/// as "United" picks whichever "United ..." row sorts first.
pub fn get_by_name(name: &str) -> Option<&'static Country> {
    let query = name.to_lowercase();
    if query.is_empty() {
        return None;
    }

    COUNTRIES.iter().find(|c| {
        let candidate = c.name.to_lowercase();
        candidate.contains(&query) || query.contains(&candidate)
    })
}

/// Find a country by nationality adjective (e.g. "American", "swiss").
pub fn get_by_nationality(term: &str) -> Option<&'static Country> {
    nationality_to_code(term).and_then(get_by_code)
}

/// Whether `code` names a directory entry.
pub fn exists(code: &str) -> bool {
    get_by_code(code).is_some()
}
