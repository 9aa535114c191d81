//! Lazy-deletion indexed priority queue.
//!
//! Composes one owning arena ([`slab::Slab`]), a handle [`Heap`] over it, and
//! an identity-key index. Removal only flips a soft-delete flag; the physical
//! heap slot is reclaimed the next time a `pop` or `peek` walks over it.

use core::cmp::Ordering;
use core::fmt;

use rustc_hash::{FxBuildHasher, FxHashMap};
use slab::Slab;

use crate::heap::Heap;
use crate::key::Keyed;
use crate::score::Score;

/// Error returned by [`LazyQueue::remove`] when no live entry exists for the
/// payload's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no live entry for key")
    }
}

impl std::error::Error for NotFound {}

/// One arena record: score, payload, cached identity key, soft-delete flag.
///
/// Ordering is by score alone; tie order among equal scores is unspecified
/// and callers must not rely on it.
struct Entry<T: Keyed> {
    score: Score,
    item: T,
    key: T::Key,
    removed: bool,
}

impl<T: Keyed> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl<T: Keyed> Eq for Entry<T> {}

impl<T: Keyed> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Keyed> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

/// An indexed priority queue with lazy deletion.
///
/// Three containers cooperate, none sharing ownership:
///
/// - a [`Slab`] arena owning every entry, addressed by stable handle;
/// - a [`Heap`] of handles keeping the max-score entry at the root;
/// - an identity-key index mapping each live key to its handle.
///
/// `insert` is O(log n), `pop` is O(log n) amortized over the queue's whole
/// history, `remove` and `contains` are O(1) amortized.
///
/// # Lazy deletion
///
/// `remove` never restructures the heap: it marks the entry soft-deleted and
/// erases the index slot. Dead entries are freed as `pop` (or `peek`) walks
/// over them. A workload that inserts and removes heavily without ever
/// popping therefore accumulates dead heap entries until drained; that is the
/// accepted trade-off of the design, observable via [`dead_len`](Self::dead_len).
///
/// # Upsert
///
/// Inserting under a key that already has a live entry supersedes the old
/// entry: it is soft-deleted before the new one is registered, so draining
/// the queue returns the payload exactly once, at the newer score.
///
/// # Example
///
/// ```
/// use schedq::{Keyed, LazyQueue};
///
/// #[derive(Debug, PartialEq)]
/// struct Job {
///     id: u64,
/// }
///
/// impl Keyed for Job {
///     type Key = u64;
///
///     fn key(&self) -> u64 {
///         self.id
///     }
/// }
///
/// let mut queue = LazyQueue::new();
/// queue.insert(Job { id: 1 }, 5.0);
/// queue.insert(Job { id: 2 }, 10.0);
///
/// assert_eq!(queue.pop(), Some(Job { id: 2 }));
/// assert!(queue.contains(&Job { id: 1 }));
/// assert_eq!(queue.pop(), Some(Job { id: 1 }));
/// assert_eq!(queue.pop(), None);
/// ```
pub struct LazyQueue<T: Keyed> {
    arena: Slab<Entry<T>>,
    heap: Heap,
    index: FxHashMap<T::Key, usize>,
}

impl<T: Keyed> LazyQueue<T> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Slab::new(),
            heap: Heap::new(),
            index: FxHashMap::default(),
        }
    }

    /// Creates a queue with pre-allocated capacity in all three containers.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Slab::with_capacity(capacity),
            heap: Heap::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
        }
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no live entry remains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns `true` if at least one live entry remains.
    #[inline]
    pub fn has_items(&self) -> bool {
        !self.index.is_empty()
    }

    /// Returns the number of soft-deleted entries still physically resident
    /// in the heap.
    ///
    /// Dead entries are freed only as a side effect of [`pop`](Self::pop) and
    /// [`peek`](Self::peek); this counter lets callers decide when a drain is
    /// worth it.
    #[inline]
    pub fn dead_len(&self) -> usize {
        self.arena.len() - self.index.len()
    }

    /// Returns the arena capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Inserts a payload with the given score.
    ///
    /// Upsert semantics: if a live entry already exists under the payload's
    /// key, that entry is soft-deleted and superseded. Draining the queue
    /// afterwards yields the payload once, ordered by the newer score.
    ///
    /// O(log n).
    pub fn insert(&mut self, item: T, score: impl Into<Score>) {
        let key = item.key();
        let handle = self.arena.insert(Entry {
            score: score.into(),
            item,
            key: key.clone(),
            removed: false,
        });

        // Supersede any live entry under the same key before registering the
        // new one, so the index never points at a dead entry.
        if let Some(old) = self.index.insert(key, handle) {
            self.arena[old].removed = true;
        }

        self.heap.push(&self.arena, handle);
    }

    /// Removes and returns the live payload with the maximum score.
    ///
    /// Soft-deleted entries encountered on the way are destroyed and their
    /// arena slots released. Returns `None` when no live entry remains.
    ///
    /// Amortized O(log n) per item ever inserted: each dead entry is paid for
    /// exactly once, when it is skipped here.
    pub fn pop(&mut self) -> Option<T> {
        if self.index.is_empty() {
            return None;
        }

        while let Some(handle) = self.heap.pop(&self.arena) {
            let entry = self.arena.remove(handle);
            if entry.removed {
                continue;
            }

            self.index.remove(&entry.key);
            return Some(entry.item);
        }

        // Only reachable if the heap ran out while the index still claims
        // live entries; report exhaustion rather than faulting.
        None
    }

    /// Returns a reference to the live payload with the maximum score,
    /// without removing it.
    ///
    /// Takes `&mut self` because soft-deleted entries at the root are pruned
    /// first.
    pub fn peek(&mut self) -> Option<&T> {
        if self.index.is_empty() {
            return None;
        }

        self.scrub();
        self.heap.peek().map(|handle| &self.arena[handle].item)
    }

    /// Soft-deletes the entry for this payload's key.
    ///
    /// The heap is untouched; the physical slot is reclaimed lazily by a
    /// future [`pop`](Self::pop). O(1) amortized.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no live entry exists for the key.
    pub fn remove(&mut self, item: &T) -> Result<(), NotFound> {
        match self.index.remove(&item.key()) {
            Some(handle) => {
                self.arena[handle].removed = true;
                Ok(())
            }
            None => Err(NotFound),
        }
    }

    /// Returns `true` if a live, not-yet-popped entry exists for this
    /// payload's key. O(1) amortized.
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(&item.key())
    }

    /// Returns the score of the live entry for this payload's key.
    #[inline]
    pub fn score_of(&self, item: &T) -> Option<Score> {
        self.index
            .get(&item.key())
            .map(|&handle| self.arena[handle].score)
    }

    /// Iterates over all live payloads in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.index.values().map(|&handle| &self.arena[handle].item)
    }

    /// Returns a snapshot of all live payloads in unspecified order.
    ///
    /// Soft-deleted entries still resident in the heap are never included.
    pub fn to_list(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Drops all entries, live and dead.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
        self.arena.clear();
    }

    /// Pops dead entries off the heap root until a live one (or nothing)
    /// remains on top.
    fn scrub(&mut self) {
        while let Some(handle) = self.heap.peek() {
            if !self.arena[handle].removed {
                break;
            }

            if let Some(dead) = self.heap.pop(&self.arena) {
                self.arena.remove(dead);
            }
        }
    }
}

impl<T: Keyed> Default for LazyQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> fmt::Debug for LazyQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyQueue")
            .field("live", &self.len())
            .field("dead", &self.dead_len())
            .finish_non_exhaustive()
    }
}
