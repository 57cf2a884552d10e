// Keycase Key Cache
// Memoization table for identifier conversions, shared across threads
//
// The table is indexed first by the original identifier, then by the
// requested convention. Entries are never evicted: conversions are pure
// functions of (identifier, convention), so a stored result cannot go stale.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Serialize;
use smallvec::{smallvec, SmallVec};

use crate::Convention;

/// Result cell for one (identifier, convention) pair
///
/// Filled outside the table lock, so a conversion may itself fetch other
/// pairs from the same cache.
type Slot = Arc<OnceLock<Arc<str>>>;

/// Conversions stored for one identifier
///
/// One slot per convention at most, so a linear scan over an inline
/// vector beats hashing and avoids a heap allocation per identifier.
type CacheEntry = SmallVec<[(Convention, Slot); 5]>;

/// Hit/miss counters and table size for a [`KeyCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the table
    pub hits: u64,
    /// Lookups that ran the conversion
    pub misses: u64,
    /// Distinct identifiers seen
    pub identifiers: usize,
    /// Stored (identifier, convention) results
    pub entries: usize,
}

/// Thread-safe two-level memoization table
///
/// Each `(identifier, convention)` pair is computed at most once per cache.
/// The table lock is only held to find or create the pair's slot; the
/// conversion then runs against the slot alone. Racing callers for the same
/// pair wait on that slot, callers for other pairs are not blocked.
///
/// A conversion must not fetch its own pair.
#[derive(Debug, Default)]
pub struct KeyCache {
    table: RwLock<IndexMap<Arc<str>, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl KeyCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored result for `(identifier, convention)`, computing
    /// and storing it on first use
    ///
    /// `compute` is only invoked on a miss. It runs without the table lock
    /// held and may fetch other pairs from this cache.
    pub fn fetch<F>(&self, identifier: &str, convention: Convention, compute: F) -> Arc<str>
    where
        F: FnOnce() -> String,
    {
        let slot = self.slot(identifier, convention);
        if let Some(found) = slot.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return found.clone();
        }

        let mut computed = false;
        let result = slot
            .get_or_init(|| {
                computed = true;
                Arc::from(compute())
            })
            .clone();

        if computed {
            log::trace!("key cache miss: {identifier:?} as {convention} -> {result:?}");
            self.misses.fetch_add(1, Ordering::Relaxed);
        } else {
            // Another caller filled the slot while we waited
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        result
    }

    /// Find the slot for a pair, creating it under a short write lock
    fn slot(&self, identifier: &str, convention: Convention) -> Slot {
        if let Some(slot) = self
            .table
            .read()
            .get(identifier)
            .and_then(|entry| find(entry, convention))
        {
            return slot;
        }

        let mut table = self.table.write();
        if let Some(entry) = table.get_mut(identifier) {
            if let Some(slot) = find(entry, convention) {
                return slot;
            }
            let slot = Slot::default();
            entry.push((convention, slot.clone()));
            return slot;
        }

        let slot = Slot::default();
        table.insert(Arc::from(identifier), smallvec![(convention, slot.clone())]);
        slot
    }

    /// Look up a stored result without computing anything
    pub fn get(&self, identifier: &str, convention: Convention) -> Option<Arc<str>> {
        let table = self.table.read();
        table
            .get(identifier)
            .and_then(|entry| find(entry, convention))
            .and_then(|slot| slot.get().cloned())
    }

    /// Number of distinct identifiers in the table
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    /// Current counters and table size
    pub fn stats(&self) -> CacheStats {
        let table = self.table.read();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            identifiers: table.len(),
            entries: table
                .values()
                .flat_map(|entry| entry.iter())
                .filter(|(_, slot)| slot.get().is_some())
                .count(),
        }
    }

    /// Copy of the whole table, identifiers in first-seen order
    ///
    /// Pairs still being computed are left out.
    pub fn snapshot(&self) -> IndexMap<String, IndexMap<Convention, String>> {
        self.table
            .read()
            .iter()
            .map(|(identifier, entry)| {
                let conversions = entry
                    .iter()
                    .filter_map(|(convention, slot)| {
                        slot.get().map(|result| (*convention, result.to_string()))
                    })
                    .collect();
                (identifier.to_string(), conversions)
            })
            .collect()
    }
}

fn find(entry: &CacheEntry, convention: Convention) -> Option<Slot> {
    entry
        .iter()
        .find(|(stored, _)| *stored == convention)
        .map(|(_, slot)| slot.clone())
}
