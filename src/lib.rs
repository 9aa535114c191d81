//! Indexed priority queue with lazy deletion.
//!
//! This crate provides the standard building block behind event schedulers,
//! pathfinding open-sets and AI task dispatch: a max-priority queue where
//! items are frequently superseded or cancelled before they are ever
//! processed, so cancellation has to be cheap.
//!
//! # Design Philosophy
//!
//! A naive heap makes arbitrary removal O(n) (find the entry, then rebuild):
//!
//! ```text
//! BinaryHeap<T>  - owns items, no removal by identity
//! Vec + re-sort  - O(n log n) per change
//! ```
//!
//! This crate splits the problem into three containers that never share
//! ownership of an entry:
//!
//! ```text
//! Slab arena   - owns every entry, addressed by stable handle
//! Heap         - handles only, max-score at the root
//! Index        - identity key -> handle, live entries only
//! ```
//!
//! Removal just flips a soft-delete flag and erases the index slot; the heap
//! slot is reclaimed lazily the next time a `pop` walks over it. Each dead
//! entry is paid for exactly once.
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `insert` | O(log n) | upsert: same key supersedes the live entry |
//! | `pop` | O(log n) amortized | skips and frees dead entries |
//! | `remove` | O(1) amortized | soft delete, heap untouched |
//! | `contains` | O(1) amortized | index lookup |
//! | `has_items` / `len` | O(1) | live entries only |
//! | `to_list` / `iter` | O(live) | unspecified order |
//!
//! # Quick Start
//!
//! ```
//! use schedq::{Keyed, LazyQueue};
//!
//! #[derive(Debug, PartialEq)]
//! struct Task {
//!     id: u64,
//! }
//!
//! impl Keyed for Task {
//!     type Key = u64;
//!
//!     fn key(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let mut queue = LazyQueue::new();
//!
//! queue.insert(Task { id: 1 }, 5.0);
//! queue.insert(Task { id: 2 }, 10.0);
//! queue.insert(Task { id: 3 }, 7.5);
//!
//! // Cancel a task before it runs - O(1), the heap is untouched
//! queue.remove(&Task { id: 3 }).unwrap();
//!
//! assert_eq!(queue.pop(), Some(Task { id: 2 }));
//! assert_eq!(queue.pop(), Some(Task { id: 1 }));
//! assert_eq!(queue.pop(), None);
//! ```
//!
//! # Identity
//!
//! Payloads identify themselves through the [`Keyed`] trait: a deterministic,
//! caller-supplied key extraction instead of runtime object hashes. Keys must
//! be unique per logically distinct payload; inserting under an existing live
//! key is an upsert and supersedes the old entry.
//!
//! # Concurrency
//!
//! Single-threaded by construction: every mutating operation takes
//! `&mut self`, so exclusion is enforced at compile time. Wrap the queue in a
//! mutex (or confine it to one scheduling thread) for concurrent use.
//!
//! # Trade-off: unbounded dead entries
//!
//! A workload that inserts and removes heavily without popping accumulates
//! soft-deleted heap entries until drained. This is inherent to lazy
//! deletion, not a defect; [`LazyQueue::dead_len`] exposes the count so
//! callers can decide when to drain.

#![warn(missing_docs)]

pub mod heap;
pub mod key;
pub mod queue;
pub mod score;

pub use heap::Heap;
pub use key::Keyed;
pub use queue::{LazyQueue, NotFound};
pub use score::Score;
