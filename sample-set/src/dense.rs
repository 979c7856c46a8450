use std::collections::hash_map::{Entry, HashMap};
use std::hash::Hash;

/// Dense positional store paired with a reverse value-to-slot index.
///
/// `slots` is contiguous and gap-free: every index in `0..len` holds a
/// live value, and `positions` maps each of those values back to its
/// index. Removal repacks by swap-with-last, so both sides stay in
/// lockstep without ever shifting more than one element.
///
/// The map owns its own copy of each value, hence the `Clone` bound.
pub struct DenseIndex<T> {
    slots: Vec<T>,
    positions: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> DenseIndex<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Adds `value` to the store, returns whether it was absent.
    pub fn insert(&mut self, value: T) -> bool {
        match self.positions.entry(value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                let slot = self.slots.len();
                self.slots.push(e.key().clone());
                e.insert(slot);
                true
            }
        }
    }

    /// Removes `value` and returns the stored copy, or `None` if it
    /// was absent.
    ///
    /// The vacated slot is filled by the current last element, whose
    /// index entry is re-pointed. The position entry for `value` is
    /// deleted *before* the swap: when `value` itself occupies the
    /// last slot the swap degenerates to a pop, and this ordering is
    /// what keeps a stale entry from surviving it.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let slot = self.positions.remove(value)?;
        let removed = self.slots.swap_remove(slot);
        if let Some(moved) = self.slots.get(slot) {
            self.positions.insert(moved.clone(), slot);
        }
        Some(removed)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.positions.contains_key(value)
    }

    /// Slot currently occupied by `value`, if present. Only stable
    /// until the next removal.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.positions.get(value).copied()
    }

    pub fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.positions.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.slots
    }
}

impl<T: Eq + Hash + Clone> Default for DenseIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Clone for DenseIndex<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            positions: self.positions.clone(),
        }
    }
}

impl<T> std::ops::Index<usize> for DenseIndex<T> {
    type Output = T;

    fn index(&self, slot: usize) -> &Self::Output {
        self.slots.index(slot)
    }
}
