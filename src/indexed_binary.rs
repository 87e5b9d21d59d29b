//! Indexed Binary Heap implementation
//!
//! A binary min-heap paired with a [`PositionIndex`] mapping each value to the
//! heap slots holding it. Keeping the index in sync on every swap lets the
//! heap remove *any* element by value in O(log n), not only the minimum.
//!
//! Values act as their own priorities, so `T` must be `Ord` for heap order,
//! `Hash` for the index, and `Clone` because the index keys are copies of the
//! stored values.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity     |
//! |-----------------|----------------|
//! | `insert`        | O(log n)       |
//! | `poll`          | O(log n)       |
//! | `remove`        | O(log n)       |
//! | `peek`          | O(1)           |
//! | `contains`      | O(1) expected  |
//! | `from_vec`      | O(n)           |
//! | `from_iter`     | O(n log n)     |
//!
//! # Duplicates
//!
//! Equal values may be inserted any number of times. `remove` takes out
//! exactly one of them: the one in the largest slot. Equal elements never
//! trigger a swap while sifting.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heap::indexed_binary::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//!
//! assert!(heap.remove(&3));
//! assert_eq!(heap.peek(), Some(&5));
//! assert_eq!(heap.poll(), Some(5));
//! assert_eq!(heap.poll(), Some(8));
//! assert_eq!(heap.poll(), None);
//! ```

use std::hash::Hash;

use crate::position_index::PositionIndex;
use crate::traits::{HeapError, PriorityQueue, RemovableQueue};

/// Capacity hint used by [`IndexedMinHeap::new`]
pub const DEFAULT_CAPACITY: usize = 1;

/// A binary min-heap supporting removal of arbitrary elements by value
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T> {
    /// Live elements in heap order; `data.len()` is the heap size
    data: Vec<T>,
    /// Slots currently holding each distinct value
    index: PositionIndex<T>,
}

impl<T: Ord + Hash + Clone> IndexedMinHeap<T> {
    /// Creates an empty heap with the default capacity hint
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            index: PositionIndex::with_capacity(capacity),
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the allocation cannot be
    /// satisfied. Nothing is allocated in that case.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, HeapError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| HeapError::InvalidArgument("capacity exceeds available memory"))?;
        let mut index = PositionIndex::new();
        index
            .try_reserve(capacity)
            .map_err(|_| HeapError::InvalidArgument("capacity exceeds available memory"))?;
        Ok(Self { data, index })
    }

    /// Builds a heap from `data` in O(n)
    ///
    /// The elements keep their positions while the index is populated, then
    /// heap order is established by sifting down from the last parent to the
    /// root.
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut index = PositionIndex::with_capacity(data.len());
        for (slot, value) in data.iter().enumerate() {
            index.add(value.clone(), slot);
        }

        let mut heap = Self { data, index };
        for i in (0..heap.data.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
        self.index.reserve(additional);
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns true if an element equal to `value` is in the heap
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains(value)
    }

    /// Inserts `value`, sifting it up toward the root
    pub fn insert(&mut self, value: T) {
        let slot = self.data.len();
        self.index.add(value.clone(), slot);
        self.data.push(value);
        self.sift_up(slot);
    }

    /// Inserts `value`, reserving the needed room fallibly first
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the heap cannot grow. The
    /// heap is left unchanged in that case.
    pub fn try_insert(&mut self, value: T) -> Result<(), HeapError> {
        self.data
            .try_reserve(1)
            .map_err(|_| HeapError::InvalidArgument("heap cannot grow"))?;
        self.index
            .try_reserve(1)
            .map_err(|_| HeapError::InvalidArgument("heap cannot grow"))?;
        self.insert(value);
        Ok(())
    }

    /// Removes one element equal to `value`, returning whether one was found
    ///
    /// Among equal elements the one in the largest slot is removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index.last(value) {
            Some(slot) => {
                self.remove_at(slot);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the minimum element
    pub fn poll(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
        self.index.clear();
    }

    /// Returns the live elements in slot order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the elements in slot order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning the elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.poll() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks the heap-order property for the subtree rooted at slot `i`
    pub fn is_min_heap(&self, i: usize) -> bool {
        let len = self.data.len();
        if i >= len {
            return true;
        }

        let left = 2 * i + 1;
        let right = 2 * i + 2;

        if left < len && self.data[i] > self.data[left] {
            return false;
        }
        if right < len && self.data[i] > self.data[right] {
            return false;
        }

        self.is_min_heap(left) && self.is_min_heap(right)
    }

    /// Checks heap order and that the index describes exactly the live slots
    ///
    /// Every indexed slot must be live and hold an equal value, and the total
    /// number of indexed slots must equal the heap size.
    pub fn check_invariants(&self) -> bool {
        if !self.is_min_heap(0) {
            return false;
        }

        let mut indexed = 0;
        for (value, slots) in self.index.iter() {
            for &slot in slots {
                if self.data.get(slot) != Some(value) {
                    return false;
                }
                indexed += 1;
            }
        }
        indexed == self.data.len()
    }

    /// Removes and returns the element at slot `i`
    fn remove_at(&mut self, i: usize) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        debug_assert!(i < self.data.len());

        let last = self.data.len() - 1;
        self.swap(i, last);

        let removed = self.data.pop()?;
        self.index.remove(&removed, last);

        if i == last {
            return Some(removed);
        }

        // The element moved into `i` may belong above or below it.
        if self.sift_down(i) == i {
            self.sift_up(i);
        }

        Some(removed)
    }

    /// Swaps slots `a` and `b`, moving both index entries
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.data.swap(a, b);
        self.index.swap(&self.data[b], &self.data[a], a, b);
    }

    /// Moves the element at `index` up while it is strictly less than its
    /// parent, returning its final slot
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Moves the element at `index` down while a child is strictly less,
    /// returning its final slot
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left >= len {
                break;
            }

            // left wins ties
            let mut smallest = left;
            if right < len && self.data[right] < self.data[left] {
                smallest = right;
            }

            if self.data[index] <= self.data[smallest] {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
        index
    }
}

impl<T: Ord + Hash + Clone> Default for IndexedMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Hash + Clone> PriorityQueue<T> for IndexedMinHeap<T> {
    fn new() -> Self {
        IndexedMinHeap::new()
    }

    fn is_empty(&self) -> bool {
        IndexedMinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        IndexedMinHeap::len(self)
    }

    fn push(&mut self, value: T) {
        self.insert(value);
    }

    fn peek(&self) -> Option<&T> {
        IndexedMinHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        self.poll()
    }

    fn clear(&mut self) {
        IndexedMinHeap::clear(self);
    }
}

impl<T: Ord + Hash + Clone> RemovableQueue<T> for IndexedMinHeap<T> {
    fn contains(&self, value: &T) -> bool {
        IndexedMinHeap::contains(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        IndexedMinHeap::remove(self, value)
    }
}
