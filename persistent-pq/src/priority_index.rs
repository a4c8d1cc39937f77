//! Persistent, priority-ordered index of buckets.

use std::cmp::Ordering;

use im::OrdMap;

use crate::bucket::Bucket;
use crate::comparator::Comparator;

/// An immutable mapping from priorities to non-empty buckets.
///
/// The index is backed by a persistent B-tree whose keys are sorted with a
/// user-provided [`Comparator`]; the first key under this order is the *top*
/// priority. Updates have *O*(log(*P*)) complexity, where *P* is the number
/// of distinct priorities, plus the cost of the bucket update, and only copy
/// the tree nodes on the path to the updated key.
///
/// A bucket is removed from the index as soon as it would become empty, so
/// every key present in the index designates at least one element.
pub(crate) struct PriorityIndex<P, B> {
    buckets: OrdMap<PriorityKey<P>, B>,
    order: Comparator<P>,
}

impl<P: Clone, B: Bucket> PriorityIndex<P, B> {
    /// Creates an empty index sorted by `order`.
    pub(crate) fn new(order: Comparator<P>) -> Self {
        Self {
            buckets: OrdMap::new(),
            order,
        }
    }

    /// Returns an empty index with the same order.
    pub(crate) fn cleared(&self) -> Self {
        Self::new(self.order.clone())
    }

    /// Returns the order by which priorities are sorted.
    pub(crate) fn order(&self) -> &Comparator<P> {
        &self.order
    }

    /// Returns the number of distinct priorities.
    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns an index which also holds `element` under `priority`, as well
    /// as a flag indicating whether the element count has grown.
    ///
    /// If no bucket is yet associated to `priority`, the element is inserted
    /// in `seed`, which is expected to be empty. Otherwise the existing key is
    /// kept, even if the order only deems it equivalent to `priority`.
    ///
    /// The count does not grow if the bucket merged `element` with an equal
    /// element; the returned index is then a clone of `self`.
    pub(crate) fn insert(&self, priority: P, element: B::Element, seed: &B) -> (Self, bool) {
        let key = PriorityKey {
            priority,
            order: self.order.clone(),
        };

        let (key, bucket, old_len) = match self.buckets.get_key_value(&key) {
            Some((stored, bucket)) => (stored.clone(), bucket.insert(element), bucket.len()),
            None => (key, seed.insert(element), seed.len()),
        };

        if bucket.len() == old_len {
            return (self.clone(), false);
        }

        (
            Self {
                buckets: self.buckets.update(key, bucket),
                order: self.order.clone(),
            },
            true,
        )
    }

    /// Peeks the top priority and the element its bucket would hand out
    /// first.
    ///
    /// This operation has *O*(log(*P*)) complexity plus the cost of the bucket
    /// peek.
    pub(crate) fn peek_top(&self) -> Option<(&P, &B::Element)> {
        let (key, bucket) = self.buckets.get_min()?;

        Some((&key.priority, bucket.peek_one()?))
    }

    /// Returns an index without the element that [`PriorityIndex::peek_top`]
    /// designates.
    ///
    /// The top bucket is dropped altogether if it contains a single element.
    /// An empty index is returned unchanged.
    pub(crate) fn remove_top(&self) -> Self {
        let buckets = match self.buckets.get_min() {
            None => return self.clone(),
            Some((key, bucket)) if bucket.len() <= 1 => self.buckets.without(key),
            Some((key, bucket)) => self.buckets.update(key.clone(), bucket.remove_one()),
        };

        Self {
            buckets,
            order: self.order.clone(),
        }
    }

    /// Returns the top priority.
    pub(crate) fn top_priority(&self) -> Option<&P> {
        self.buckets.get_min().map(|(key, _)| &key.priority)
    }

    /// Returns an iterator over the priorities, top priority first.
    pub(crate) fn priorities(&self) -> impl Iterator<Item = &P> + '_ {
        self.buckets.keys().map(|key| &key.priority)
    }

    /// Returns an iterator over the buckets, top priority first.
    pub(crate) fn buckets(&self) -> Buckets<'_, P, B> {
        Buckets {
            inner: self.buckets.iter(),
        }
    }
}

impl<P: Clone, B: Bucket> Clone for PriorityIndex<P, B> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            order: self.order.clone(),
        }
    }
}

/// Iterator over the priorities and buckets of a [`PriorityIndex`].
pub(crate) struct Buckets<'a, P, B> {
    inner: im::ordmap::Iter<'a, PriorityKey<P>, B>,
}

impl<'a, P: Clone + 'a, B: Bucket + 'a> Iterator for Buckets<'a, P, B> {
    type Item = (&'a P, &'a B);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, bucket)| (&key.priority, bucket))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A priority sorted by a run-time comparator.
///
/// Each key carries a handle to the index-wide comparator so that the B-tree
/// can rely on `Ord`.
struct PriorityKey<P> {
    priority: P,
    order: Comparator<P>,
}

impl<P: Clone> Clone for PriorityKey<P> {
    fn clone(&self) -> Self {
        Self {
            priority: self.priority.clone(),
            order: self.order.clone(),
        }
    }
}

impl<P> PartialEq for PriorityKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P> Eq for PriorityKey<P> {}

impl<P> PartialOrd for PriorityKey<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for PriorityKey<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order.compare(&self.priority, &other.priority)
    }
}
