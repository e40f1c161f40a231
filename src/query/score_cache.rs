//! Per-query memoization of document scores.
//!
//! A ranking pass may ask for the same document's distance or overlap
//! score more than once (once per matching clause). The cache is owned by
//! the caller, scoped to one query's lifetime, and bounded: once full, new
//! documents are computed but not retained.

use std::collections::HashMap;

/// Bounded memoization map from document id to score.
///
/// # Examples
///
/// ```
/// use graticule::query::DistanceScoreCache;
///
/// let mut cache = DistanceScoreCache::new(1024);
/// let score = cache.get_or_compute(42, || 3.5);
/// assert_eq!(score, 3.5);
/// // the closure is not called again for a cached document
/// assert_eq!(cache.get_or_compute(42, || unreachable!()), 3.5);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceScoreCache {
    capacity: usize,
    scores: HashMap<u64, f64>,
}

impl DistanceScoreCache {
    /// Create a cache retaining at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        DistanceScoreCache {
            capacity,
            scores: HashMap::new(),
        }
    }

    /// Return the cached score for `doc_id`, computing and (space
    /// permitting) retaining it on a miss.
    pub fn get_or_compute<F>(&mut self, doc_id: u64, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        if let Some(&score) = self.scores.get(&doc_id) {
            return score;
        }
        let score = compute();
        if self.scores.len() < self.capacity {
            self.scores.insert(doc_id, score);
        }
        score
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether nothing has been retained yet.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Drop all retained entries.
    pub fn clear(&mut self) {
        self.scores.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computes_once_per_document() {
        let mut cache = DistanceScoreCache::new(16);
        let mut calls = 0;
        for _ in 0..3 {
            let score = cache.get_or_compute(7, || {
                calls += 1;
                1.25
            });
            assert_eq!(score, 1.25);
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_bounds_retention() {
        let mut cache = DistanceScoreCache::new(2);
        cache.get_or_compute(1, || 1.0);
        cache.get_or_compute(2, || 2.0);
        // full: computed but not retained
        assert_eq!(cache.get_or_compute(3, || 3.0), 3.0);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get_or_compute(3, || 4.0), 4.0);
    }

    #[test]
    fn test_clear() {
        let mut cache = DistanceScoreCache::new(4);
        cache.get_or_compute(1, || 1.0);
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
