#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::hash::Hash;

use rand::Rng;

mod dense;
use dense::DenseIndex;

/// Error returned when sampling from an empty set.
///
/// This is the one failure mode of the crate: duplicate inserts and
/// misses on removal are ordinary `false` returns, but drawing an
/// index from an empty range has no meaningful answer, so [`sample`]
/// and [`sample_with`] surface it to the caller instead.
///
/// [`sample`]: SampleSet::sample
/// [`sample_with`]: SampleSet::sample_with
#[derive(Debug, PartialEq, Eq)]
pub struct EmptyError;
impl std::fmt::Display for EmptyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
impl std::error::Error for EmptyError {}

/// Set of distinct values with O(1) insertion, removal, and uniform
/// random sampling.
///
/// Members live in a dense slot vector paired with a reverse
/// value-to-slot index; removal swaps the last element into the
/// vacated slot. Slot order is therefore not meaningful and changes on
/// removal, but every slot in `0..len` always holds a live value,
/// which is what makes a uniform slot draw a uniform member draw.
pub struct SampleSet<T> {
    index: DenseIndex<T>,
}

impl<T: Eq + Hash + Clone> SampleSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: DenseIndex::new(),
        }
    }

    /// Creates an empty set pre-sized for at least `capacity` members.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: DenseIndex::with_capacity(capacity),
        }
    }

    /// Adds a value to the set. Returns whether the value was newly
    /// inserted; a duplicate leaves the set untouched.
    pub fn insert(&mut self, value: T) -> bool {
        self.index.insert(value)
    }

    /// Removes a value from the set. Returns whether it was present;
    /// a miss leaves the set untouched.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes a value from the set and returns the stored copy, or
    /// `None` if it was absent.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.index.take(value)
    }

    /// Returns whether the set contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains(value)
    }

    /// Returns the slot currently holding `value`, if present.
    ///
    /// Slots index into [`as_slice`](Self::as_slice) and are only
    /// stable until the next removal.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.index.position(value)
    }

    /// Returns the value in `slot`, or `None` if `slot >= len`.
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.index.get(slot)
    }

    /// Number of values in the set.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The members as a slice, in slot order.
    pub fn as_slice(&self) -> &[T] {
        self.index.as_slice()
    }

    /// Iterates over the members in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.index.as_slice().iter()
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// Consumes the set, returning its members in slot order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.index.into_vec()
    }

    /// Returns a uniformly random member, each with probability
    /// `1/len`. Repeated calls are independent draws.
    ///
    /// Draws from the thread-local generator; use
    /// [`sample_with`](Self::sample_with) to supply your own.
    ///
    /// # Errors
    ///
    /// [`EmptyError`] if the set is empty.
    pub fn sample(&self) -> Result<&T, EmptyError> {
        self.sample_with(&mut rand::rng())
    }

    /// Returns a uniformly random member using the supplied generator.
    ///
    /// # Errors
    ///
    /// [`EmptyError`] if the set is empty.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, EmptyError> {
        if self.index.is_empty() {
            return Err(EmptyError);
        }
        Ok(&self.index[rng.random_range(0..self.index.len())])
    }
}

impl<T: Eq + Hash + Clone> Default for SampleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Clone for SampleSet<T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index.clone(),
        }
    }
}

impl<T: Eq + Hash + Clone + std::fmt::Debug> std::fmt::Debug for SampleSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Membership equality: slot order is ignored.
impl<T: Eq + Hash + Clone> PartialEq for SampleSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}
impl<T: Eq + Hash + Clone> Eq for SampleSet<T> {}

impl<T: Eq + Hash + Clone> std::ops::Index<usize> for SampleSet<T> {
    type Output = T;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.index[slot]
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for SampleSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for SampleSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Eq + Hash + Clone> Extend<&'a T> for SampleSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value.clone());
        }
    }
}

impl<'a, T: Eq + Hash + Clone> IntoIterator for &'a SampleSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash + Clone> IntoIterator for SampleSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}
