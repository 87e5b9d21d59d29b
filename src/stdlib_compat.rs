//! Standard library compatibility layer
//!
//! Conversions that let [`IndexedMinHeap`] be built and unpacked the same
//! ways as `std::collections::BinaryHeap`.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<T>` to get max-heap behavior.
//! - **Bulk construction**: `From<Vec<T>>`, `From<[T; N]>` and `From<&[T]>`
//!   heapify in O(n); `FromIterator` and `Extend` insert one element at a time.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Reverse;
//! use rust_indexed_heap::indexed_binary::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::from([5, 3, 7]);
//! assert_eq!(heap.poll(), Some(3));
//!
//! let mut max_heap: IndexedMinHeap<Reverse<i32>> = [5, 3, 7].into_iter().map(Reverse).collect();
//! assert_eq!(max_heap.poll(), Some(Reverse(7)));
//! ```

use std::fmt;
use std::hash::Hash;

use crate::indexed_binary::IndexedMinHeap;

impl<T: Ord + Hash + Clone> From<Vec<T>> for IndexedMinHeap<T> {
    fn from(data: Vec<T>) -> Self {
        IndexedMinHeap::from_vec(data)
    }
}

impl<T: Ord + Hash + Clone, const N: usize> From<[T; N]> for IndexedMinHeap<T> {
    fn from(data: [T; N]) -> Self {
        IndexedMinHeap::from_vec(Vec::from(data))
    }
}

impl<T: Ord + Hash + Clone> From<&[T]> for IndexedMinHeap<T> {
    fn from(data: &[T]) -> Self {
        IndexedMinHeap::from_vec(data.to_vec())
    }
}

impl<T: Ord + Hash + Clone> From<IndexedMinHeap<T>> for Vec<T> {
    fn from(heap: IndexedMinHeap<T>) -> Self {
        heap.into_vec()
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for IndexedMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = IndexedMinHeap::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}

impl<T: Ord + Hash + Clone> Extend<T> for IndexedMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord + Hash + Clone + 'a> Extend<&'a T> for IndexedMinHeap<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

/// Renders the live elements in slot order, e.g. `[1, 3, 8, 5, 4]`
///
/// Slot order is heap order, not sorted order.
impl<T: Ord + Hash + Clone + fmt::Display> fmt::Display for IndexedMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
