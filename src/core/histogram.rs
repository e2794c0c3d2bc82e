use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sample counts keyed by integer ULP error, iterated in ascending key order.
///
/// The running total always equals the sum of the bucket counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram {
    buckets: BTreeMap<u64, u64>,
    total: u64,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one sample in bucket `key`.
    #[inline]
    pub fn record(&mut self, key: u64) {
        self.add(key, 1);
    }

    /// Count `count` samples in bucket `key`. A zero count leaves no bucket behind.
    pub fn add(&mut self, key: u64, count: u64) {
        if count == 0 {
            return;
        }
        *self.buckets.entry(key).or_insert(0) += count;
        self.total += count;
    }

    /// Number of samples recorded.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, key: u64) -> u64 {
        self.buckets.get(&key).copied().unwrap_or(0)
    }

    /// Largest per-bucket count, 0 when empty.
    pub fn max_count(&self) -> u64 {
        self.buckets.values().copied().max().unwrap_or(0)
    }

    pub fn min_key(&self) -> Option<u64> {
        self.buckets.keys().next().copied()
    }

    pub fn max_key(&self) -> Option<u64> {
        self.buckets.keys().next_back().copied()
    }

    /// `(key, count)` pairs in ascending key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u64, u64)> + '_ {
        self.buckets.iter().map(|(&k, &c)| (k, c))
    }
}

impl FromIterator<(u64, u64)> for Histogram {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        let mut h = Histogram::new();
        h.extend(iter);
        h
    }
}

impl Extend<(u64, u64)> for Histogram {
    fn extend<I: IntoIterator<Item = (u64, u64)>>(&mut self, iter: I) {
        for (key, count) in iter {
            self.add(key, count);
        }
    }
}
