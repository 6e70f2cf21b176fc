//! Country metadata and flag artwork.
//!
//! [`countries`] is a static ISO 3166-1 directory with exact, partial,
//! nationality and ranked lookups. [`flags`] turns a country code into SVG
//! markup, from embedded artwork or a CDN, with caching and a deterministic
//! placeholder when no real flag exists.
//!
//! ```no_run
//! # async fn demo() -> flagkit::Result<()> {
//! use flagkit::{countries, flags::FlagResolver};
//!
//! let resolver = FlagResolver::embedded();
//! for country in countries::search("united", 3) {
//!     let svg = resolver.resolve(country.iso).await?;
//!     println!("{} {} ({} bytes)", country.iso, country.name, svg.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod countries;
pub mod error;
pub mod flags;
pub mod logging;

pub use countries::Country;
pub use error::{FlagError, Result};
pub use flags::FlagResolver;
