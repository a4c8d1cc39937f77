use std::fmt;
use std::iter::FusedIterator;

use crate::bucket::Bucket;
use crate::priority_index::Buckets;

/// Iterator over the elements of a [`PriorityQueue`](crate::PriorityQueue),
/// in the order in which they would be popped.
pub struct Iter<'a, P, B: Bucket + 'a> {
    buckets: Buckets<'a, P, B>,
    current: Option<B::Iter<'a>>,
    remaining: usize,
}

impl<'a, P: Clone, B: Bucket + 'a> Iter<'a, P, B> {
    /// Creates an iterator over the buckets of an index holding `len`
    /// elements.
    pub(super) fn new(buckets: Buckets<'a, P, B>, len: usize) -> Self {
        Self {
            buckets,
            current: None,
            remaining: len,
        }
    }
}

impl<'a, P: Clone, B: Bucket + 'a> Iterator for Iter<'a, P, B> {
    type Item = &'a B::Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.current.as_mut().and_then(|bucket| bucket.next()) {
                self.remaining = self.remaining.saturating_sub(1);

                return Some(element);
            }

            // Move on to the next bucket, or stop if this was the last one.
            let (_, bucket) = self.buckets.next()?;
            self.current = Some(bucket.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, P: Clone, B: Bucket + 'a> ExactSizeIterator for Iter<'a, P, B> {}

impl<'a, P: Clone, B: Bucket + 'a> FusedIterator for Iter<'a, P, B> {}

impl<'a, P, B: Bucket + 'a> fmt::Debug for Iter<'a, P, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
