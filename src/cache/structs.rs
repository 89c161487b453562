use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use log::info;

use crate::ranking::types::RankingStats;

struct CacheEntry {
    stats: RankingStats,
    expires_at: DateTime<Utc>,
}

/// Process-wide memo for ranking computations, keyed by query shape.
///
/// Entries carry an absolute expiry timestamp; a stale entry is evicted on
/// the read that finds it. There is no invalidation on data mutation beyond
/// `invalidate_all`. The map is mutex-guarded because requests are served
/// from a multi-threaded runtime.
pub struct RankingCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl RankingCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fresh cached value for the key, if any. Evicts a stale entry.
    pub fn get(&self, key: &str) -> Option<RankingStats> {
        let mut entries = self.lock();

        if let Some(entry) = entries.get(key) {
            if Utc::now() < entry.expires_at {
                info!("Serving rankings from cache: {}", key);
                return Some(entry.stats.clone());
            }
        }

        entries.remove(key);
        None
    }

    /// Store a computation result under the key for one TTL window.
    pub fn set(&self, key: String, stats: RankingStats) {
        let expires_at = Utc::now() + self.ttl;
        info!("Caching rankings: {}", key);
        self.lock().insert(key, CacheEntry { stats, expires_at });
    }

    /// Empty the entire cache unconditionally.
    pub fn invalidate_all(&self) {
        self.lock().clear();
        info!("Cleared ranking cache");
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().expect("ranking cache mutex poisoned")
    }
}
