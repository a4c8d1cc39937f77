//! Queue configuration.

use std::fmt;
use std::hash::Hash;

use crate::bucket::Variant;
use crate::comparator::Comparator;
use crate::queue::PriorityQueue;
use crate::Error;

/// Builder for a [`PriorityQueue`] with [`VariantBucket`](crate::VariantBucket)
/// buckets.
///
/// Unless specified otherwise, the queue:
///
/// - starts empty,
/// - hands out larger priorities first ([`Comparator::descending`]),
/// - uses FIFO buckets ([`Variant::Queue`]).
pub struct Options<T, P> {
    elements: Vec<T>,
    comparator: Comparator<P>,
    variant: Variant,
}

impl<T, P: Ord> Options<T, P> {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::with_comparator(Comparator::descending())
    }
}

impl<T, P> Options<T, P> {
    /// Creates a builder sorting priorities with the provided comparator.
    ///
    /// Unlike [`Options::new`], this does not require the priorities to
    /// implement `Ord`.
    pub fn with_comparator(comparator: Comparator<P>) -> Self {
        Self {
            elements: Vec::new(),
            comparator,
            variant: Variant::default(),
        }
    }

    /// Adds elements to be inserted at construction, after any elements
    /// added previously.
    ///
    /// Elements are inserted in iteration order, which matters for FIFO
    /// buckets.
    pub fn add_elements(mut self, elements: impl IntoIterator<Item = T>) -> Self {
        self.elements.extend(elements);

        self
    }

    /// Sets the order of the priorities.
    pub fn set_comparator(mut self, comparator: Comparator<P>) -> Self {
        self.comparator = comparator;

        self
    }

    /// Sets the bucket strategy.
    pub fn set_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;

        self
    }

    /// Sets the bucket strategy from its textual tag, `queue` or `set`.
    ///
    /// An error naming the tag is returned if it is not recognized.
    pub fn set_variant_tag(self, tag: &str) -> Result<Self, Error> {
        let variant = tag.parse()?;

        Ok(self.set_variant(variant))
    }

    /// Builds a queue deriving priorities with `priority_fn`.
    pub fn build<F>(self, priority_fn: F) -> PriorityQueue<T, P>
    where
        T: Hash + Eq + Clone,
        P: Clone,
        F: Fn(&T) -> P + Send + Sync + 'static,
    {
        PriorityQueue::with_options(priority_fn, self)
    }

    /// Splits the configuration into its initial elements, comparator and
    /// bucket strategy.
    pub(crate) fn into_parts(self) -> (Vec<T>, Comparator<P>, Variant) {
        (self.elements, self.comparator, self.variant)
    }
}

impl<T, P: Ord> Default for Options<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Options<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("elements", &self.elements)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// Creates a priority queue deriving priorities with `priority_fn`.
///
/// This is a shorthand for [`Options::build`].
///
/// # Examples
///
/// ```
/// use persistent_pq::{priority_queue, Options, Variant};
///
/// let options = Options::new()
///     .add_elements([3, 4, 5, 6, 7, 5])
///     .set_variant(Variant::Set);
/// let queue = priority_queue(|x: &u8| x % 2, options);
///
/// // The duplicate `5` was merged.
/// assert_eq!(queue.len(), 5);
/// assert_eq!(queue.top_priority(), Some(&1));
/// ```
pub fn priority_queue<T, P, F>(priority_fn: F, options: Options<T, P>) -> PriorityQueue<T, P>
where
    T: Hash + Eq + Clone,
    P: Clone,
    F: Fn(&T) -> P + Send + Sync + 'static,
{
    options.build(priority_fn)
}
