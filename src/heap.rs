//! Max-heap over external slab storage.
//!
//! The heap itself holds only `usize` handles into a [`slab::Slab`]; the slab
//! owns the elements. Ordering comparisons go through the storage, so the
//! same element is never duplicated between the two containers.

use slab::Slab;

/// A binary max-heap of slab handles.
///
/// Elements live in an external [`Slab`] and are referenced by handle. The
/// heap maintains the max-at-root discipline over whatever the handles point
/// at; it never removes from storage itself.
///
/// # Handle validity
///
/// Every handle pushed must stay occupied in the storage for as long as it is
/// physically in the heap. Methods take the storage as an argument and all
/// calls for one heap must use the same storage instance (the same discipline
/// as the `slab` crate itself).
///
/// # Example
///
/// ```
/// use schedq::Heap;
/// use slab::Slab;
///
/// let mut storage: Slab<u64> = Slab::new();
/// let mut heap = Heap::new();
///
/// let a = storage.insert(3);
/// let b = storage.insert(9);
/// let c = storage.insert(6);
///
/// heap.push(&storage, a);
/// heap.push(&storage, b);
/// heap.push(&storage, c);
///
/// // Pops largest first
/// assert_eq!(heap.pop(&storage), Some(b));
/// assert_eq!(heap.pop(&storage), Some(c));
/// assert_eq!(heap.pop(&storage), Some(a));
/// assert_eq!(heap.pop(&storage), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Heap {
    /// Heap-ordered storage handles.
    slots: Vec<usize>,
}

impl Heap {
    /// Creates an empty heap.
    #[inline]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates a heap with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of handles physically in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the heap holds no handles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the capacity of the heap.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns the handle of the maximum element without removing it.
    ///
    /// Returns `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.slots.first().copied()
    }

    /// Pushes a handle onto the heap.
    ///
    /// The element must already exist in storage.
    pub fn push<T: Ord>(&mut self, storage: &Slab<T>, handle: usize) {
        debug_assert!(storage.contains(handle), "handle not occupied in storage");

        let pos = self.slots.len();
        self.slots.push(handle);
        self.sift_up(storage, pos);
    }

    /// Removes and returns the handle of the maximum element.
    ///
    /// Returns `None` if the heap is empty. The element itself stays in
    /// storage; releasing the slot is the caller's job.
    pub fn pop<T: Ord>(&mut self, storage: &Slab<T>) -> Option<usize> {
        let top = *self.slots.first()?;

        let last = self.slots.pop()?;
        if !self.slots.is_empty() {
            self.slots[0] = last;
            self.sift_down(storage, 0);
        }

        Some(top)
    }

    /// Drops every handle without touching storage.
    #[inline]
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn sift_up<T: Ord>(&mut self, storage: &Slab<T>, pos: usize) {
        let handle = self.slots[pos];
        let mut hole = pos;

        while hole > 0 {
            let parent = (hole - 1) / 2;
            let parent_handle = self.slots[parent];

            if storage[handle] > storage[parent_handle] {
                self.slots[hole] = parent_handle;
                hole = parent;
            } else {
                break;
            }
        }

        self.slots[hole] = handle;
    }

    fn sift_down<T: Ord>(&mut self, storage: &Slab<T>, pos: usize) {
        let len = self.slots.len();
        let handle = self.slots[pos];
        let mut hole = pos;

        loop {
            let left = 2 * hole + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && storage[self.slots[right]] > storage[self.slots[left]] {
                right
            } else {
                left
            };

            if storage[self.slots[child]] > storage[handle] {
                self.slots[hole] = self.slots[child];
                hole = child;
            } else {
                break;
            }
        }

        self.slots[hole] = handle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let heap = Heap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert!(heap.peek().is_none());
    }

    #[test]
    fn push_pop_single() {
        let mut storage: Slab<u32> = Slab::new();
        let mut heap = Heap::new();

        let handle = storage.insert(5);
        heap.push(&storage, handle);

        assert_eq!(heap.len(), 1);
        assert_eq!(heap.peek(), Some(handle));

        assert_eq!(heap.pop(&storage), Some(handle));
        assert!(heap.is_empty());

        // Element still in storage; heap never frees slots
        assert_eq!(storage.get(handle), Some(&5));
    }

    #[test]
    fn max_heap_order() {
        let mut storage: Slab<u32> = Slab::new();
        let mut heap = Heap::new();

        for value in [10, 1, 5, 3, 8] {
            let handle = storage.insert(value);
            heap.push(&storage, handle);
        }

        let mut popped = Vec::new();
        while let Some(handle) = heap.pop(&storage) {
            popped.push(storage.remove(handle));
        }

        assert_eq!(popped, vec![10, 8, 5, 3, 1]);
    }

    #[test]
    fn duplicates() {
        let mut storage: Slab<u32> = Slab::new();
        let mut heap = Heap::new();

        for _ in 0..3 {
            let handle = storage.insert(7);
            heap.push(&storage, handle);
        }

        assert_eq!(heap.len(), 3);
        for _ in 0..3 {
            let handle = heap.pop(&storage).unwrap();
            assert_eq!(storage.remove(handle), 7);
        }
        assert_eq!(heap.pop(&storage), None);
    }

    #[test]
    fn interleaved_push_pop() {
        let mut storage: Slab<u32> = Slab::new();
        let mut heap = Heap::new();

        let a = storage.insert(4);
        let b = storage.insert(9);
        heap.push(&storage, a);
        heap.push(&storage, b);

        assert_eq!(heap.pop(&storage), Some(b));
        storage.remove(b);

        let c = storage.insert(1);
        heap.push(&storage, c);

        assert_eq!(heap.pop(&storage), Some(a));
        storage.remove(a);
        assert_eq!(heap.pop(&storage), Some(c));
    }

    #[test]
    fn clear_leaves_storage_alone() {
        let mut storage: Slab<u32> = Slab::new();
        let mut heap = Heap::new();

        let a = storage.insert(1);
        let b = storage.insert(2);
        heap.push(&storage, a);
        heap.push(&storage, b);

        heap.clear();

        assert!(heap.is_empty());
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn stress_push_pop() {
        let mut storage: Slab<u32> = Slab::new();
        let mut heap = Heap::with_capacity(1024);

        for i in 0..1000u32 {
            let value = (i * 7 + 13) % 1000; // Deterministic scramble
            let handle = storage.insert(value);
            heap.push(&storage, handle);
        }

        // Pop all and verify descending order
        let mut last = u32::MAX;
        while let Some(handle) = heap.pop(&storage) {
            let value = storage.remove(handle);
            assert!(value <= last, "heap order violated");
            last = value;
        }
        assert!(storage.is_empty());
    }
}
