//! TTL Sweep Task
//!
//! Periodically drops expired response bodies from the cache. Reads already
//! drop expired entries lazily; the sweep bounds memory for paths that stop
//! being requested before their TTL runs out.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the periodic sweep over the response cache.
///
/// Each tick takes the write lock, drops expired entries, and logs the
/// result. The returned handle is aborted during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<CacheStore>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_secs = sweep_interval_secs, "cache sweep task started");

        let mut ticker = tokio::time::interval(Duration::from_secs(sweep_interval_secs));
        // The first tick completes immediately; the first sweep should wait
        // a full interval.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let (removed, remaining, hit_rate) = {
                let mut store = cache.write().await;
                let removed = store.cleanup_expired();
                (removed, store.len(), store.stats().hit_rate())
            };

            if removed > 0 {
                info!(removed, remaining, "swept expired responses");
            } else {
                debug!(remaining, hit_rate, "sweep found nothing expired");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sweep_drops_entries_once_their_ttl_elapses() {
        let cache = Arc::new(RwLock::new(CacheStore::new(1)));
        cache
            .write()
            .await
            .set("/surah/1".to_string(), "body".to_string());

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // TTL is 1s and the sweep runs every 1s; by 2.5s the entry is gone
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert!(cache.read().await.is_empty());
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_leaves_live_entries_alone() {
        let cache = Arc::new(RwLock::new(CacheStore::new(3600)));
        cache
            .write()
            .await
            .set("/surah/1".to_string(), "body".to_string());

        let handle = spawn_cleanup_task(cache.clone(), 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            cache.write().await.get("/surah/1").as_deref(),
            Some("body")
        );
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_stops_on_abort() {
        let cache = Arc::new(RwLock::new(CacheStore::new(60)));
        let handle = spawn_cleanup_task(cache, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished());
    }
}
