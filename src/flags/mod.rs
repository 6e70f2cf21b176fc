//! Flag artwork - embedded SVGs, CDN fetching, placeholders and the caching
//! resolver that ties them together.
//!
//! Rendering is left to the caller: everything here produces SVG markup as a
//! string.

mod placeholder;
mod resolver;
mod source;
mod svg_data;

pub use placeholder::{placeholder, placeholder_for_country, PALETTE};
pub use resolver::FlagResolver;
pub use source::{source_from_config, ArtworkSource, CdnSource, EmbeddedSource};
pub use svg_data::{get_flag_svg, EMBEDDED_CODES};
