//! Deduplicating bucket.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use im::HashSet;

use super::Bucket;

/// A bucket merging equal elements.
///
/// Inserting an element equal to a member leaves the bucket unchanged. The
/// element designated for removal is the first one yielded by the underlying
/// hash array mapped trie; this order bears no relation to insertion order.
///
/// The default hasher is unseeded, so buckets holding the same elements
/// iterate identically, including across program runs. A custom hasher
/// state is shared by every bucket derived from the empty bucket it was
/// provided to.
pub struct SetBucket<T, S = BuildHasherDefault<DefaultHasher>> {
    elements: HashSet<T, S>,
}

impl<T: Hash + Eq + Clone> SetBucket<T> {
    /// Creates an empty bucket with the default hasher.
    pub fn new() -> Self {
        Self::with_hasher(BuildHasherDefault::default())
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher> SetBucket<T, S> {
    /// Creates an empty bucket hashing elements with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            elements: HashSet::with_hasher(hasher),
        }
    }

    /// Returns `true` if the bucket contains an element equal to `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher> Bucket for SetBucket<T, S> {
    type Element = T;
    type Iter<'a>
        = im::hashset::Iter<'a, T>
    where
        Self: 'a;

    fn insert(&self, element: T) -> Self {
        if self.elements.contains(&element) {
            return self.clone();
        }

        Self {
            elements: self.elements.update(element),
        }
    }

    fn remove_one(&self) -> Self {
        match self.elements.iter().next() {
            Some(first) => Self {
                elements: self.elements.without(first),
            },
            None => self.clone(),
        }
    }

    fn peek_one(&self) -> Option<&T> {
        self.elements.iter().next()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }
}

impl<T: Hash + Eq + Clone> Default for SetBucket<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher> Clone for SetBucket<T, S> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<T: Hash + Eq + Clone + fmt::Debug, S: BuildHasher> fmt::Debug for SetBucket<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}
