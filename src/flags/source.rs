//! Where real flag artwork comes from.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};

use super::svg_data::get_flag_svg;
use crate::config::{Config, SourceKind};
use crate::error::{FlagError, Result};

/// Supplier of authoritative flag artwork.
///
/// `fetch_artwork` returns [`FlagError::AssetUnavailable`] when the source has
/// nothing for the code, whatever the underlying reason.
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    /// Fetch SVG markup for a lowercase country code.
    async fn fetch_artwork(&self, country_code: &str) -> Result<String>;

    /// Whether artwork is known to exist without performing I/O.
    fn has_artwork(&self, country_code: &str) -> bool;
}

/// Artwork compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

#[async_trait]
impl ArtworkSource for EmbeddedSource {
    async fn fetch_artwork(&self, country_code: &str) -> Result<String> {
        get_flag_svg(country_code)
            .map(str::to_string)
            .ok_or_else(|| FlagError::unavailable(country_code, "no embedded artwork"))
    }

    fn has_artwork(&self, country_code: &str) -> bool {
        get_flag_svg(country_code).is_some()
    }
}

/// Artwork fetched from `<base_url>/<code>.svg`.
#[derive(Debug, Clone)]
pub struct CdnSource {
    client: reqwest::Client,
    base_url: String,
}

impl CdnSource {
    /// Create a source with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the artwork for a code.
    pub fn url_for(&self, country_code: &str) -> String {
        format!("{}/{}.svg", self.base_url, country_code.to_lowercase())
    }
}

#[async_trait]
impl ArtworkSource for CdnSource {
    async fn fetch_artwork(&self, country_code: &str) -> Result<String> {
        let url = self.url_for(country_code);
        trace!(%url, "Fetching flag artwork");

        let response = self.client.get(&url).send().await.map_err(|e| {
            let reason = if e.is_timeout() {
                "request timed out".to_string()
            } else {
                format!("request failed: {e}")
            };
            FlagError::unavailable(country_code, reason)
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(%url, %status, "CDN has no artwork");
            return Err(FlagError::unavailable(country_code, format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| FlagError::unavailable(country_code, format!("failed to read body: {e}")))
    }

    fn has_artwork(&self, _country_code: &str) -> bool {
        false
    }
}

/// Build the source selected in the configuration.
pub fn source_from_config(config: &Config) -> Result<Box<dyn ArtworkSource>> {
    Ok(match config.source {
        SourceKind::Embedded => Box::new(EmbeddedSource),
        SourceKind::Cdn => Box::new(CdnSource::new(&config.cdn_base_url, config.fetch_timeout())?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embedded_hit_and_miss() {
        let source = EmbeddedSource;
        assert!(source.fetch_artwork("fr").await.unwrap().starts_with("<svg"));
        assert!(source.has_artwork("FR"));

        let err = source.fetch_artwork("zw").await.unwrap_err();
        assert!(matches!(err, FlagError::AssetUnavailable { ref code, .. } if code == "zw"));
        assert!(!source.has_artwork("zw"));
    }

    #[test]
    fn cdn_url_layout() {
        let source = CdnSource::new("https://flags.example.com/svg/", Duration::from_secs(1)).unwrap();
        assert_eq!(source.base_url(), "https://flags.example.com/svg");
        assert_eq!(source.url_for("GB"), "https://flags.example.com/svg/gb.svg");
        assert!(!source.has_artwork("gb"));
    }
}
