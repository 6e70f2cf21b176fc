//! Code to SVG resolution with caching and placeholder fallback.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::join_all;
use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use super::placeholder::placeholder;
use super::source::{source_from_config, ArtworkSource, EmbeddedSource};
use crate::config::Config;
use crate::countries;
use crate::error::{FlagError, Result};

/// One cache slot per lowercase code. The cell is created before the fetch
/// starts, so concurrent callers for the same code await a single load.
type Slot = Arc<OnceCell<Arc<str>>>;

/// Resolves country codes to SVG markup.
///
/// Codes unknown to both the directory and the artwork source are rejected
/// with [`FlagError::InvalidCode`]. Known codes always resolve: to artwork
/// when the source has it, otherwise to a [`placeholder`]. Results are cached
/// until [`clear_cache`](Self::clear_cache).
pub struct FlagResolver {
    source: Box<dyn ArtworkSource>,
    cache: Mutex<HashMap<String, Slot>>,
}

impl FlagResolver {
    pub fn new(source: impl ArtworkSource + 'static) -> Self {
        Self::with_boxed_source(Box::new(source))
    }

    pub fn with_boxed_source(source: Box<dyn ArtworkSource>) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolver backed by the embedded artwork table.
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    /// Resolver using the source selected in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_boxed_source(source_from_config(config)?))
    }

    /// Resolve a code to SVG markup.
    pub async fn resolve(&self, country_code: &str) -> Result<Arc<str>> {
        let key = country_code.to_lowercase();

        if let Some(svg) = self.cached(&key) {
            debug!(code = %key, "Flag cache hit");
            return Ok(svg);
        }

        if !self.exists(&key) {
            return Err(FlagError::InvalidCode(country_code.to_string()));
        }

        let slot = self.cache.lock().entry(key.clone()).or_default().clone();
        let svg = slot.get_or_init(|| self.load(&key)).await;
        Ok(Arc::clone(svg))
    }

    /// Whether a flag can be produced for the code, either real artwork or a
    /// placeholder for a directory entry.
    pub fn exists(&self, country_code: &str) -> bool {
        self.source.has_artwork(country_code) || countries::exists(country_code)
    }

    /// Resolve every code concurrently, ignoring failures.
    ///
    /// Returns how many codes resolved once all attempts have finished.
    pub async fn preload<I, S>(&self, country_codes: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let attempts = country_codes.into_iter().map(|code| async move {
            let code = code.as_ref();
            match self.resolve(code).await {
                Ok(_) => true,
                Err(e) => {
                    debug!(code, error = %e, "Skipping flag during preload");
                    false
                }
            }
        });

        let outcomes = join_all(attempts).await;
        let resolved = outcomes.iter().filter(|ok| **ok).count();
        info!(requested = outcomes.len(), resolved, "Flag preload finished");
        resolved
    }

    /// Drop every cached entry.
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        debug!(entries = cache.len(), "Clearing flag cache");
        cache.clear();
    }

    /// Number of codes with a cached result.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().values().filter(|slot| slot.initialized()).count()
    }

    fn cached(&self, key: &str) -> Option<Arc<str>> {
        self.cache.lock().get(key).and_then(|slot| slot.get().cloned())
    }

    async fn load(&self, key: &str) -> Arc<str> {
        debug!(code = %key, "Flag cache miss");
        match self.source.fetch_artwork(key).await {
            Ok(svg) => Arc::from(svg),
            Err(e) => {
                warn!(code = %key, error = %e, "Using placeholder flag");
                Arc::from(placeholder(key))
            }
        }
    }
}

impl Default for FlagResolver {
    fn default() -> Self {
        Self::embedded()
    }
}

impl std::fmt::Debug for FlagResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagResolver")
            .field("cached", &self.cached_len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embedded_artwork_is_returned() {
        let resolver = FlagResolver::embedded();
        let svg = resolver.resolve("FR").await.unwrap();
        assert_eq!(&*svg, crate::flags::get_flag_svg("fr").unwrap());
    }

    #[tokio::test]
    async fn missing_artwork_falls_back_to_placeholder() {
        let resolver = FlagResolver::embedded();
        let svg = resolver.resolve("zw").await.unwrap();
        assert_eq!(&*svg, placeholder("zw"));
        assert_eq!(resolver.cached_len(), 1);
    }

    #[tokio::test]
    async fn unknown_code_is_rejected_and_not_cached() {
        let resolver = FlagResolver::embedded();
        let err = resolver.resolve("INVALID").await.unwrap_err();
        assert!(matches!(err, FlagError::InvalidCode(code) if code == "INVALID"));
        assert_eq!(resolver.cached_len(), 0);
    }

    #[tokio::test]
    async fn case_variants_share_an_entry() {
        let resolver = FlagResolver::embedded();
        let upper = resolver.resolve("US").await.unwrap();
        let lower = resolver.resolve("us").await.unwrap();
        assert!(Arc::ptr_eq(&upper, &lower));
        assert_eq!(resolver.cached_len(), 1);
    }

    #[tokio::test]
    async fn clear_cache_empties_everything() {
        let resolver = FlagResolver::embedded();
        resolver.preload(["de", "jp", "zw"]).await;
        assert_eq!(resolver.cached_len(), 3);
        resolver.clear_cache();
        assert_eq!(resolver.cached_len(), 0);
    }

    #[test]
    fn exists_checks_source_and_directory() {
        let resolver = FlagResolver::embedded();
        assert!(resolver.exists("US"));
        assert!(resolver.exists("zw"));
        assert!(!resolver.exists("INVALID"));
    }
}
