//! Reverse index from heap values to the slots holding them
//!
//! [`PositionIndex`] maps each distinct value to the ordered set of live heap
//! slots currently holding an equal value. The heap keeps it in sync on every
//! slot mutation, which is what makes removal of an arbitrary element
//! O(log n) instead of a linear scan.
//!
//! Slot sets are ordered so that lookups by value are deterministic:
//! [`PositionIndex::last`] always answers the largest slot.

use std::collections::{BTreeSet, TryReserveError};
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Mapping from a value to every live slot holding an equal value
#[derive(Debug, Clone)]
pub struct PositionIndex<T> {
    slots: FxHashMap<T, BTreeSet<usize>>,
}

impl<T: Hash + Eq> PositionIndex<T> {
    /// Creates an empty index
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
        }
    }

    /// Creates an empty index with room for `capacity` distinct values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Records that `slot` holds `value`
    pub fn add(&mut self, value: T, slot: usize) {
        self.slots.entry(value).or_default().insert(slot);
    }

    /// Forgets that `slot` holds `value`, dropping the value's entry once its
    /// last slot is gone
    ///
    /// Returns false if the mapping was not present.
    pub fn remove(&mut self, value: &T, slot: usize) -> bool {
        let Some(set) = self.slots.get_mut(value) else {
            return false;
        };
        let removed = set.remove(&slot);
        if set.is_empty() {
            self.slots.remove(value);
        }
        removed
    }

    /// Updates the index after the values at `first_slot` and `second_slot`
    /// traded places
    ///
    /// `first` is the value that used to live at `first_slot` (and now lives
    /// at `second_slot`), `second` the reverse. Both mappings move.
    pub fn swap(&mut self, first: &T, second: &T, first_slot: usize, second_slot: usize) {
        // Equal values share one slot set that already holds both slots.
        if first_slot == second_slot || first == second {
            return;
        }

        if let Some(set) = self.slots.get_mut(first) {
            let moved = set.remove(&first_slot);
            debug_assert!(moved, "slot {first_slot} missing from index");
            set.insert(second_slot);
        }
        if let Some(set) = self.slots.get_mut(second) {
            let moved = set.remove(&second_slot);
            debug_assert!(moved, "slot {second_slot} missing from index");
            set.insert(first_slot);
        }
    }

    /// Returns the largest slot holding a value equal to `value`
    pub fn last(&self, value: &T) -> Option<usize> {
        self.slots.get(value).and_then(|set| set.last().copied())
    }

    /// Returns true if any live slot holds a value equal to `value`
    pub fn contains(&self, value: &T) -> bool {
        self.slots.contains_key(value)
    }

    /// Iterates the slots holding `value` in ascending order
    pub fn slots(&self, value: &T) -> impl Iterator<Item = usize> + '_ {
        self.slots.get(value).into_iter().flatten().copied()
    }

    /// Iterates every (value, slot set) entry in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&T, &BTreeSet<usize>)> {
        self.slots.iter()
    }

    /// Number of distinct values indexed
    pub fn distinct_len(&self) -> usize {
        self.slots.len()
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Reserves room for at least `additional` more distinct values
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    /// Fallible counterpart of [`PositionIndex::reserve`]
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.slots.try_reserve(additional)
    }
}

impl<T: Hash + Eq> Default for PositionIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_last() {
        let mut index = PositionIndex::new();
        index.add("a", 3);
        index.add("a", 0);
        index.add("b", 1);

        assert_eq!(index.last(&"a"), Some(3));
        assert_eq!(index.last(&"b"), Some(1));
        assert_eq!(index.last(&"c"), None);
        assert_eq!(index.slots(&"a").collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(index.distinct_len(), 2);
    }

    #[test]
    fn test_remove_drops_empty_entries() {
        let mut index = PositionIndex::new();
        index.add(7, 0);
        index.add(7, 1);

        assert!(index.remove(&7, 1));
        assert!(index.contains(&7));
        assert!(index.remove(&7, 0));
        assert!(!index.contains(&7));
        assert_eq!(index.distinct_len(), 0);

        // Absent mappings are reported, not invented
        assert!(!index.remove(&7, 0));
        index.add(7, 2);
        assert!(!index.remove(&7, 5));
        assert_eq!(index.last(&7), Some(2));
    }

    #[test]
    fn test_swap_moves_both_values() {
        let mut index = PositionIndex::new();
        index.add(10, 0);
        index.add(20, 4);

        index.swap(&10, &20, 0, 4);

        assert_eq!(index.slots(&10).collect::<Vec<_>>(), vec![4]);
        assert_eq!(index.slots(&20).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_swap_equal_values_is_noop() {
        let mut index = PositionIndex::new();
        index.add(5, 1);
        index.add(5, 2);

        index.swap(&5, &5, 1, 2);

        assert_eq!(index.slots(&5).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut index = PositionIndex::with_capacity(4);
        index.add('x', 0);
        index.add('y', 1);
        index.clear();

        assert!(!index.contains(&'x'));
        assert_eq!(index.iter().count(), 0);
    }
}
