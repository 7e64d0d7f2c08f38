//! Bounded LRU cache for memoized fix/contract results.
//!
//! Entries are keyed on the direction of the rewrite and the exact input
//! text, and stamped with the vocabulary generation they were computed
//! under. An entry from an older generation is never returned.

use std::collections::BTreeMap;

use ahash::AHashMap;

/// Rewrite direction a cached result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Contractions expanded.
    Fix,
    /// Expansions contracted.
    Contract,
}

impl Direction {
    fn slot(self) -> usize {
        match self {
            Direction::Fix => 0,
            Direction::Contract => 1,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    generation: u64,
    tick: u64,
}

/// Hit/miss counters of a [`ResultCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Least-recently-used result cache with a fixed capacity.
#[derive(Debug)]
pub struct ResultCache {
    capacity: usize,
    maps: [AHashMap<String, CacheEntry>; 2],
    recency: BTreeMap<u64, (Direction, String)>,
    tick: u64,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    /// Create a cache holding at most `capacity` results. 0 disables caching.
    pub fn new(capacity: usize) -> Self {
        ResultCache {
            capacity,
            maps: [AHashMap::new(), AHashMap::new()],
            recency: BTreeMap::new(),
            tick: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a result computed under `generation`.
    pub fn get(&mut self, direction: Direction, generation: u64, text: &str) -> Option<String> {
        if self.capacity == 0 {
            return None;
        }

        self.tick += 1;
        let tick = self.tick;
        let map = &mut self.maps[direction.slot()];

        let Some(entry) = map.get_mut(text) else {
            self.misses += 1;
            return None;
        };

        if entry.generation != generation {
            let stale_tick = entry.tick;
            map.remove(text);
            self.recency.remove(&stale_tick);
            self.misses += 1;
            return None;
        }

        let previous = std::mem::replace(&mut entry.tick, tick);
        let value = entry.value.clone();
        if let Some(key) = self.recency.remove(&previous) {
            self.recency.insert(tick, key);
        }
        self.hits += 1;
        Some(value)
    }

    /// Store a result, evicting the least recently used entry when full.
    pub fn insert(&mut self, direction: Direction, generation: u64, text: &str, value: &str) {
        if self.capacity == 0 {
            return;
        }

        self.tick += 1;
        let tick = self.tick;

        if let Some(entry) = self.maps[direction.slot()].get_mut(text) {
            let previous = std::mem::replace(&mut entry.tick, tick);
            entry.value = value.to_string();
            entry.generation = generation;
            if let Some(key) = self.recency.remove(&previous) {
                self.recency.insert(tick, key);
            }
            return;
        }

        while self.len() >= self.capacity {
            if !self.evict_oldest() {
                break;
            }
        }

        self.maps[direction.slot()].insert(
            text.to_string(),
            CacheEntry {
                value: value.to_string(),
                generation,
                tick,
            },
        );
        self.recency.insert(tick, (direction, text.to_string()));
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        for map in &mut self.maps {
            map.clear();
        }
        self.recency.clear();
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.maps.iter().map(|m| m.len()).sum()
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of cached results.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.len(),
            capacity: self.capacity,
        }
    }

    fn evict_oldest(&mut self) -> bool {
        match self.recency.pop_first() {
            Some((_, (direction, text))) => {
                self.maps[direction.slot()].remove(&text);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_after_insert() {
        let mut cache = ResultCache::new(4);
        cache.insert(Direction::Fix, 0, "can't", "cannot");

        assert_eq!(cache.get(Direction::Fix, 0, "can't").as_deref(), Some("cannot"));
        assert_eq!(cache.get(Direction::Contract, 0, "can't"), None);
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_stale_generation_is_miss() {
        let mut cache = ResultCache::new(4);
        cache.insert(Direction::Fix, 1, "gonna", "gonna");

        assert_eq!(cache.get(Direction::Fix, 2, "gonna"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = ResultCache::new(2);
        cache.insert(Direction::Fix, 0, "a", "A");
        cache.insert(Direction::Fix, 0, "b", "B");

        // Touch "a" so that "b" becomes the oldest.
        assert!(cache.get(Direction::Fix, 0, "a").is_some());
        cache.insert(Direction::Contract, 0, "c", "C");

        assert_eq!(cache.len(), 2);
        assert!(cache.get(Direction::Fix, 0, "b").is_none());
        assert!(cache.get(Direction::Fix, 0, "a").is_some());
        assert!(cache.get(Direction::Contract, 0, "c").is_some());
    }

    #[test]
    fn test_zero_capacity_disables_cache() {
        let mut cache = ResultCache::new(0);
        cache.insert(Direction::Fix, 0, "a", "A");
        assert!(cache.is_empty());
        assert_eq!(cache.get(Direction::Fix, 0, "a"), None);
    }

    #[test]
    fn test_reinsert_updates_value() {
        let mut cache = ResultCache::new(2);
        cache.insert(Direction::Fix, 0, "a", "A");
        cache.insert(Direction::Fix, 1, "a", "AA");

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(Direction::Fix, 1, "a").as_deref(), Some("AA"));
    }

    #[test]
    fn test_clear() {
        let mut cache = ResultCache::new(8);
        cache.insert(Direction::Fix, 0, "a", "A");
        cache.insert(Direction::Contract, 0, "b", "B");
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 8);
    }
}
