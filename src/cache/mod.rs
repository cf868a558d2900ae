//! Single-slot query cache for the snapshot.
//!
//! The display layer drives the same contract the aggregation core is
//! written against: one slot under a fixed key, get-or-fetch semantics, and
//! an invalidate operation that forces the next read to refetch. The slot
//! holds a finished snapshot only; a failed fetch leaves it empty, so the
//! retry path is simply another `get_or_fetch`. Replacement is whole-record,
//! last write wins; nothing is ever merged across invocations.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::SNAPSHOT_CACHE_KEY;
use crate::snapshot::ClientSnapshot;

/// Keyed single-slot cache over the snapshot fetch.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCache {
    slot: Arc<Mutex<Option<Arc<ClientSnapshot>>>>,
}

impl SnapshotCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The constant key the single slot lives under.
    pub fn key(&self) -> &'static str {
        SNAPSHOT_CACHE_KEY
    }

    /// Returns the cached snapshot, or runs `fetch` and stores its result.
    ///
    /// Expensive setup belongs inside `fetch`: it only runs on a miss, so a
    /// hit costs nothing but the lock. The slot lock is held across the
    /// fetch, which gives the slot exactly one writer at a time; a
    /// successful fetch replaces the previous value whole. A failed fetch
    /// stores nothing.
    pub async fn get_or_fetch<F, Fut, E>(&self, fetch: F) -> Result<Arc<ClientSnapshot>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ClientSnapshot, E>>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(snapshot) = slot.as_ref() {
            log::debug!("Snapshot cache hit for key {}", self.key());
            return Ok(Arc::clone(snapshot));
        }

        log::debug!("Snapshot cache miss for key {}, fetching", self.key());
        let snapshot = Arc::new(fetch().await?);
        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Clears the slot; the next `get_or_fetch` refetches.
    pub async fn invalidate(&self) {
        log::debug!("Invalidating snapshot cache key {}", self.key());
        self.slot.lock().await.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEVICE_MEMORY_UNAVAILABLE;
    use crate::error_handling::SnapshotError;
    use crate::snapshot::{IspInfo, Location};
    use reqwest::StatusCode;

    fn snapshot_with_ip(ip: &str) -> ClientSnapshot {
        ClientSnapshot {
            ip: ip.to_string(),
            location: Location {
                city: None,
                region_name: None,
                country: None,
                zip: None,
                timezone: None,
                currency: None,
                lat: None,
                lon: None,
            },
            isp: IspInfo {
                isp: None,
                org: None,
                asname: None,
                proxy: None,
                mobile: None,
            },
            platform: None,
            browser: "Unknown".to_string(),
            user_agent: "test-agent".to_string(),
            language: None,
            timezone: None,
            accept_languages: None,
            screen_resolution: None,
            window_resolution: None,
            host: None,
            referer: None,
            webdriver: false,
            hardware_concurrency: 0,
            device_memory: DEVICE_MEMORY_UNAVAILABLE,
        }
    }

    #[tokio::test]
    async fn test_second_read_hits_the_cache() {
        let cache = SnapshotCache::new();

        let first = cache
            .get_or_fetch(|| async { Ok::<_, SnapshotError>(snapshot_with_ip("203.0.113.7")) })
            .await
            .unwrap();
        // Second fetcher would answer a different address; it must not run
        let second = cache
            .get_or_fetch(|| async { Ok::<_, SnapshotError>(snapshot_with_ip("198.51.100.1")) })
            .await
            .unwrap();

        assert_eq!(first.ip, "203.0.113.7");
        assert_eq!(second.ip, "203.0.113.7");
    }

    #[tokio::test]
    async fn test_invalidate_replaces_whole_record() {
        let cache = SnapshotCache::new();

        let first = cache
            .get_or_fetch(|| async { Ok::<_, SnapshotError>(snapshot_with_ip("203.0.113.7")) })
            .await
            .unwrap();
        cache.invalidate().await;
        let second = cache
            .get_or_fetch(|| async { Ok::<_, SnapshotError>(snapshot_with_ip("198.51.100.1")) })
            .await
            .unwrap();

        // Nothing carries over from the first record
        assert_eq!(first.ip, "203.0.113.7");
        assert_eq!(second.ip, "198.51.100.1");
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_slot_empty() {
        let cache = SnapshotCache::new();

        let failed = cache
            .get_or_fetch(|| async {
                Err(SnapshotError::status(
                    "address service",
                    StatusCode::BAD_GATEWAY,
                ))
            })
            .await;
        assert!(failed.is_err());

        // The next read fetches again rather than serving an error state
        let second = cache
            .get_or_fetch(|| async { Ok::<_, SnapshotError>(snapshot_with_ip("203.0.113.7")) })
            .await
            .unwrap();
        assert_eq!(second.ip, "203.0.113.7");
    }

    #[tokio::test]
    async fn test_key_is_constant() {
        let cache = SnapshotCache::new();
        assert_eq!(cache.key(), SNAPSHOT_CACHE_KEY);
    }
}
