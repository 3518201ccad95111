//! Memoization cache for synonym resolution.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::synonym::{EvictionPolicy, ResolveMethod, SynonymSet};

type CacheKey = (String, ResolveMethod);

struct CacheEntry {
    synonyms: Arc<SynonymSet>,
    last_used: u64,
}

struct CacheInner {
    entries: AHashMap<CacheKey, CacheEntry>,
    /// Monotonic counter stamping entry recency
    clock: u64,
}

/// Lock-protected memoization cache keyed by `(word, method)`.
///
/// Resolved sets are stored as `Arc<SynonymSet>` so hits are cheap clones.
/// With [`EvictionPolicy::Lru`] the least recently used entry is evicted
/// once the capacity is reached; [`EvictionPolicy::Unbounded`] never evicts.
pub struct SynonymCache {
    inner: RwLock<CacheInner>,
    policy: EvictionPolicy,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl SynonymCache {
    /// Create a new cache with the given eviction policy.
    pub fn new(policy: EvictionPolicy) -> Self {
        SynonymCache {
            inner: RwLock::new(CacheInner {
                entries: AHashMap::new(),
                clock: 0,
            }),
            policy,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Look up a cached synonym set, refreshing its recency on a hit.
    pub fn get(&self, word: &str, method: ResolveMethod) -> Option<Arc<SynonymSet>> {
        let mut inner = self.inner.write();
        inner.clock += 1;
        let clock = inner.clock;

        match inner.entries.get_mut(&(word.to_string(), method)) {
            Some(entry) => {
                entry.last_used = clock;
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(Arc::clone(&entry.synonyms))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insert a resolved synonym set, evicting the least recently used entry
    /// if the cache is at capacity.
    pub fn insert(&self, word: String, method: ResolveMethod, synonyms: Arc<SynonymSet>) {
        let mut inner = self.inner.write();
        inner.clock += 1;
        let clock = inner.clock;
        let key = (word, method);

        if let EvictionPolicy::Lru { capacity } = self.policy {
            if capacity == 0 {
                return;
            }
            if !inner.entries.contains_key(&key) && inner.entries.len() >= capacity {
                let oldest = inner
                    .entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.last_used)
                    .map(|(key, _)| key.clone());
                if let Some(oldest) = oldest {
                    tracing::trace!(word = %oldest.0, method = %oldest.1, "evicting cache entry");
                    inner.entries.remove(&oldest);
                }
            }
        }

        inner.entries.insert(
            key,
            CacheEntry {
                synonyms,
                last_used: clock,
            },
        );
    }

    /// Get the number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
            capacity: match self.policy {
                EvictionPolicy::Unbounded => None,
                EvictionPolicy::Lru { capacity } => Some(capacity),
            },
        }
    }
}

/// Cache performance statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
    /// Current number of cached entries
    pub entries: usize,
    /// Entry capacity, `None` for an unbounded cache
    pub capacity: Option<usize>,
}

impl CacheStats {
    /// Calculate the hit ratio.
    pub fn hit_ratio(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> Arc<SynonymSet> {
        Arc::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_cache_get_and_insert() {
        let cache = SynonymCache::new(EvictionPolicy::Unbounded);
        assert!(cache.get("big", ResolveMethod::Direct).is_none());

        cache.insert("big".to_string(), ResolveMethod::Direct, set(&["large"]));
        let hit = cache.get("big", ResolveMethod::Direct).unwrap();
        assert!(hit.contains("large"));
    }

    #[test]
    fn test_cache_keys_include_method() {
        let cache = SynonymCache::new(EvictionPolicy::Unbounded);
        cache.insert("big".to_string(), ResolveMethod::Direct, set(&["large"]));

        assert!(cache.get("big", ResolveMethod::Stem).is_none());
        assert!(cache.get("big", ResolveMethod::Direct).is_some());
    }

    #[test]
    fn test_lru_eviction() {
        let cache = SynonymCache::new(EvictionPolicy::Lru { capacity: 2 });
        cache.insert("a".to_string(), ResolveMethod::Direct, set(&["x"]));
        cache.insert("b".to_string(), ResolveMethod::Direct, set(&["y"]));

        // Touch "a" so "b" is the least recently used
        cache.get("a", ResolveMethod::Direct);
        cache.insert("c".to_string(), ResolveMethod::Direct, set(&["z"]));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a", ResolveMethod::Direct).is_some());
        assert!(cache.get("b", ResolveMethod::Direct).is_none());
        assert!(cache.get("c", ResolveMethod::Direct).is_some());
    }

    #[test]
    fn test_zero_capacity_caches_nothing() {
        let cache = SynonymCache::new(EvictionPolicy::Lru { capacity: 0 });
        cache.insert("a".to_string(), ResolveMethod::Direct, set(&["x"]));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_stats() {
        let cache = SynonymCache::new(EvictionPolicy::Lru { capacity: 8 });
        cache.get("a", ResolveMethod::Direct);
        cache.insert("a".to_string(), ResolveMethod::Direct, set(&["x"]));
        cache.get("a", ResolveMethod::Direct);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.capacity, Some(8));
        assert!((stats.hit_ratio() - 0.5).abs() < f64::EPSILON);
    }
}
