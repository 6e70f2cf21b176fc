//! Deterministic placeholder artwork for codes without a real flag.

use crate::countries;
use crate::error::{FlagError, Result};

/// Background colours, indexed by the first character of the code.
pub const PALETTE: [&str; 6] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD"];

/// Build a 400x300 placeholder showing the uppercased code on a solid colour.
///
/// Pure: the same input always produces byte-identical output.
pub fn placeholder(country_code: &str) -> String {
    let lower = country_code.to_lowercase();
    let color = PALETTE[palette_index(&lower)];
    let label = escape_text(&lower.to_uppercase());

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 300">"#,
            "\n",
            r#"  <rect width="400" height="300" fill="{color}"/>"#,
            "\n",
            r#"  <text x="200" y="150" text-anchor="middle" dominant-baseline="middle" fill="white" font-family="Arial, sans-serif" font-size="32" font-weight="bold">{label}</text>"#,
            "\n",
            "</svg>",
        ),
        color = color,
        label = label,
    )
}

/// Placeholder for a directory-known code, `InvalidCode` otherwise.
pub fn placeholder_for_country(country_code: &str) -> Result<String> {
    if countries::exists(country_code) {
        Ok(placeholder(country_code))
    } else {
        Err(FlagError::InvalidCode(country_code.to_string()))
    }
}

fn palette_index(lower_code: &str) -> usize {
    lower_code
        .chars()
        .next()
        .map_or(0, |c| c as usize % PALETTE.len())
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
