//! Indexed Heap Data Structures for Rust
//!
//! This crate provides a binary min-heap priority queue that, unlike
//! `std::collections::BinaryHeap`, can remove *any* element by value in
//! O(log n). It does so by keeping a position index from each value to the
//! heap slots holding it, updated on every swap.
//!
//! # Features
//!
//! - **Indexed Binary Heap**: O(log n) insert, poll, and remove-by-value; O(1) peek and
//!   expected O(1) membership test; O(n) bulk construction
//! - **Duplicates**: equal values may be stored many times; removal takes out exactly one
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heap::indexed_binary::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::new();
//! heap.insert(7);
//! heap.insert(7);
//! heap.insert(2);
//!
//! assert!(heap.remove(&7));
//! assert!(heap.contains(&7));
//! assert_eq!(heap.poll(), Some(2));
//! ```

pub mod indexed_binary;
pub mod position_index;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main traits for convenience
pub use indexed_binary::IndexedMinHeap;
pub use traits::{HeapError, PriorityQueue, RemovableQueue};
