// src/math/structures/unordered_pair.rs
use std::hash::{Hash, Hasher};

/// Paar ohne Reihenfolge: `(a, b) == (b, a)`.
///
/// The elements are stored as given; equality and hashing are symmetric.
#[derive(Debug, Clone, Copy)]
pub struct UnorderedPair<T> {
    pub first: T,
    pub second: T,
}

impl<T> UnorderedPair<T> {
    pub fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        &self.first == item || &self.second == item
    }

    /// The element that is not `item`, if `item` is part of the pair.
    pub fn other(&self, item: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        if &self.first == item {
            Some(&self.second)
        } else if &self.second == item {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl<T: Ord> UnorderedPair<T> {
    fn ordered(&self) -> (&T, &T) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

impl<T: Ord> PartialEq for UnorderedPair<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl<T: Ord> Eq for UnorderedPair<T> {}

impl<T: Ord + Hash> Hash for UnorderedPair<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}
