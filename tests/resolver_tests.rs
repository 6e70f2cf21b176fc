//! Integration tests for flag resolution, caching and concurrency.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;

use flagkit::flags::{placeholder, ArtworkSource, FlagResolver};
use flagkit::FlagError;

/// Source that serves a fixed SVG for "us", fails everything else, and
/// counts every fetch.
struct CountingSource {
    fetches: Arc<AtomicUsize>,
    delay: Duration,
}

impl CountingSource {
    fn new(delay: Duration) -> (Self, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        (
            Self {
                fetches: Arc::clone(&fetches),
                delay,
            },
            fetches,
        )
    }
}

const US_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 300 200"><rect width="300" height="200" fill="#b22234"/></svg>"##;

#[async_trait]
impl ArtworkSource for CountingSource {
    async fn fetch_artwork(&self, country_code: &str) -> flagkit::Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if country_code == "us" {
            Ok(US_SVG.to_string())
        } else {
            Err(FlagError::AssetUnavailable {
                code: country_code.to_string(),
                reason: "not in test source".into(),
            })
        }
    }

    fn has_artwork(&self, country_code: &str) -> bool {
        country_code.eq_ignore_ascii_case("us")
    }
}

#[tokio::test]
async fn test_resolve_is_idempotent_and_cached() {
    let (source, fetches) = CountingSource::new(Duration::ZERO);
    let resolver = FlagResolver::new(source);

    let first = resolver.resolve("US").await.unwrap();
    let second = resolver.resolve("us").await.unwrap();

    assert_eq!(&*first, US_SVG);
    assert_eq!(first, second);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_placeholder_is_cached_like_artwork() {
    let (source, fetches) = CountingSource::new(Duration::ZERO);
    let resolver = FlagResolver::new(source);

    let first = resolver.resolve("ZW").await.unwrap();
    let second = resolver.resolve("zw").await.unwrap();

    assert_eq!(&*first, placeholder("zw"));
    assert!(first.contains("ZW"));
    assert_eq!(first, second);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalid_code_never_reaches_the_source() {
    let (source, fetches) = CountingSource::new(Duration::ZERO);
    let resolver = FlagResolver::new(source);

    let err = resolver.resolve("INVALID").await.unwrap_err();
    assert!(matches!(err, FlagError::InvalidCode(_)));
    assert_eq!(fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_share_one_fetch() {
    let (source, fetches) = CountingSource::new(Duration::from_millis(50));
    let resolver = Arc::new(FlagResolver::new(source));

    let tasks = (0..8).map(|i| {
        let resolver = Arc::clone(&resolver);
        let code = if i % 2 == 0 { "US" } else { "us" };
        tokio::spawn(async move { resolver.resolve(code).await })
    });

    let results = join_all(tasks).await;
    for result in results {
        let svg = result.expect("task panicked").unwrap();
        assert_eq!(&*svg, US_SVG);
    }
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_clear_cache_forces_refetch() {
    let (source, fetches) = CountingSource::new(Duration::ZERO);
    let resolver = FlagResolver::new(source);

    resolver.resolve("us").await.unwrap();
    resolver.clear_cache();
    assert_eq!(resolver.cached_len(), 0);

    resolver.resolve("us").await.unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_preload_swallows_failures() {
    let (source, fetches) = CountingSource::new(Duration::from_millis(10));
    let resolver = FlagResolver::new(source);

    let resolved = resolver.preload(["us", "de", "INVALID", "zw", "xx"]).await;

    assert_eq!(resolved, 3);
    assert_eq!(resolver.cached_len(), 3);
    assert_eq!(fetches.load(Ordering::SeqCst), 3);

    // Everything preloaded is now a cache hit.
    resolver.resolve("de").await.unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_preload_empty_list() {
    let resolver = FlagResolver::embedded();
    assert_eq!(resolver.preload(Vec::<String>::new()).await, 0);
}

#[test]
fn test_exists() {
    let resolver = FlagResolver::embedded();
    assert!(resolver.exists("US"));
    assert!(resolver.exists("zw"));
    assert!(!resolver.exists("INVALID"));
}
