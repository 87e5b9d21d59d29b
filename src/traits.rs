//! Common traits for the priority queues in this crate
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: Base trait for min-priority queues with the usual
//!   push / peek / pop surface
//! - [`RemovableQueue`]: Extended trait adding membership tests and removal of
//!   arbitrary elements by value
//!
//! The base trait follows `std::collections::BinaryHeap` naming, except that
//! every queue here is a min-queue.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The caller supplied an argument the heap cannot honor, e.g. a capacity
    /// the allocator cannot provide
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Base trait for min-priority queues
///
/// # Example
///
/// ```rust
/// use rust_indexed_heap::PriorityQueue;
/// use rust_indexed_heap::indexed_binary::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, value: T);

    /// Returns the minimum element without removing it, or `None` when empty
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element, or `None` when empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Removes every element
    fn clear(&mut self);
}

/// Extended queue trait with removal of arbitrary elements
///
/// # Example
///
/// ```rust
/// use rust_indexed_heap::{PriorityQueue, RemovableQueue};
/// use rust_indexed_heap::indexed_binary::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::new();
/// heap.push(4);
/// heap.push(9);
/// assert!(heap.remove(&4));
/// assert!(!heap.contains(&4));
/// assert_eq!(heap.peek(), Some(&9));
/// ```
pub trait RemovableQueue<T: Ord>: PriorityQueue<T> {
    /// Returns true if an element equal to `value` is in the queue
    ///
    /// # Time Complexity
    /// O(1) expected
    fn contains(&self, value: &T) -> bool;

    /// Removes one element equal to `value`, returning whether one was found
    ///
    /// When several equal elements are present exactly one is removed; the
    /// queue is left untouched if none is present.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove(&mut self, value: &T) -> bool;
}
