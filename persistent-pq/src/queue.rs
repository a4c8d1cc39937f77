//! Persistent priority queue.

mod iter;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::bucket::{Bucket, Variant, VariantBucket};
use crate::comparator::Comparator;
use crate::options::Options;
use crate::priority_index::PriorityIndex;
use crate::Error;

pub use iter::Iter;

/// Shared function deriving the priority of an element.
pub type PriorityFn<T, P> = Arc<dyn Fn(&T) -> P + Send + Sync>;

/// An immutable priority queue whose priorities are derived from its
/// elements.
///
/// The priority of an element is computed once, when the element is
/// inserted, by the *priority function* the queue was created with.
/// Elements are then handed out by decreasing priority, where the meaning of
/// "decreasing" is set by a [`Comparator`]: the priority sorting first under
/// the comparator is the top priority. By default larger priorities come
/// first.
///
/// Elements sharing a priority are kept together in a [`Bucket`] which
/// breaks ties. Queues built with [`Options`] select at run time between a
/// FIFO bucket and a deduplicating bucket (see [`Variant`]), but any
/// [`Bucket`] implementation can be used with
/// [`PriorityQueue::with_bucket`].
///
/// No method ever modifies a queue: [`insert`](PriorityQueue::insert),
/// [`pop`](PriorityQueue::pop) and their relatives return a new queue which
/// shares all unmodified storage with the original. Cloning a queue is
/// *O*(1).
///
/// Equality is extensional: two queues are equal if they yield the same
/// elements in the same order, whatever their priority functions, comparators
/// or buckets. A queue also compares equal to a vector, slice or array
/// holding the same sequence.
///
/// # Examples
///
/// ```
/// use persistent_pq::PriorityQueue;
///
/// let empty = PriorityQueue::new(|x: &u32| x % 5);
/// let queue = empty.insert_all([1, 2, 3, 4, 5, 6]);
///
/// assert_eq!(queue, [4, 3, 2, 1, 6, 5]);
/// assert_eq!(queue.peek(), Some(&4));
/// assert_eq!(queue.pop(), [3, 2, 1, 6, 5]);
///
/// // Older versions are left untouched.
/// assert!(empty.is_empty());
/// assert_eq!(queue.len(), 6);
/// ```
pub struct PriorityQueue<T, P, B = VariantBucket<T>> {
    priority_fn: PriorityFn<T, P>,
    seed: B,
    count: usize,
    index: PriorityIndex<P, B>,
}

impl<T, P: Clone, B: Bucket<Element = T>> PriorityQueue<T, P, B> {
    /// Creates an empty queue with a custom bucket strategy.
    ///
    /// The `seed` bucket is the template from which the bucket of each new
    /// priority is grown.
    ///
    /// # Panics
    ///
    /// This will panic if the seed bucket is not empty.
    pub fn with_bucket<F>(priority_fn: F, order: Comparator<P>, seed: B) -> Self
    where
        F: Fn(&T) -> P + Send + Sync + 'static,
    {
        assert!(seed.is_empty(), "the seed bucket should be empty");

        Self {
            priority_fn: Arc::new(priority_fn),
            seed,
            count: 0,
            index: PriorityIndex::new(order),
        }
    }

    /// Returns a queue which also contains `element`.
    ///
    /// The priority function is called once on `element`; the elements
    /// already in the queue are neither inspected nor re-prioritized. A panic
    /// in the priority function or in the comparator unwinds through this
    /// call and leaves `self` unaffected.
    ///
    /// This operation has *O*(log(*P*)) complexity, where *P* is the number of
    /// distinct priorities, plus the cost of the bucket insertion.
    pub fn insert(&self, element: T) -> Self {
        let priority = (self.priority_fn)(&element);
        let (index, grown) = self.index.insert(priority, element, &self.seed);

        Self {
            priority_fn: self.priority_fn.clone(),
            seed: self.seed.clone(),
            count: self.count + usize::from(grown),
            index,
        }
    }

    /// Returns a queue which also contains all the provided elements,
    /// inserted in iteration order.
    pub fn insert_all<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        elements
            .into_iter()
            .fold(self.clone(), |queue, element| queue.insert(element))
    }

    /// Peeks the element with the top priority.
    ///
    /// If several elements share the top priority, the bucket designates
    /// which one is returned. Returns `None` if the queue is empty.
    pub fn peek(&self) -> Option<&T> {
        self.index.peek_top().map(|(_, element)| element)
    }

    /// Peeks the top priority together with the element [`peek`] returns.
    ///
    /// [`peek`]: PriorityQueue::peek
    pub fn peek_with_priority(&self) -> Option<(&P, &T)> {
        self.index.peek_top()
    }

    /// Returns a queue without the element [`peek`] returns.
    ///
    /// Popping an empty queue returns an empty queue; use [`try_pop`] to
    /// treat this case as an error.
    ///
    /// [`peek`]: PriorityQueue::peek
    /// [`try_pop`]: PriorityQueue::try_pop
    pub fn pop(&self) -> Self {
        if self.count == 0 {
            return self.clone();
        }

        Self {
            priority_fn: self.priority_fn.clone(),
            seed: self.seed.clone(),
            count: self.count - 1,
            index: self.index.remove_top(),
        }
    }

    /// Returns a queue without the element [`peek`] returns, or an error if
    /// the queue is empty.
    ///
    /// [`peek`]: PriorityQueue::peek
    pub fn try_pop(&self) -> Result<Self, Error> {
        if self.count == 0 {
            #[cfg(feature = "tracing")]
            tracing::trace!("attempted to pop an empty priority queue");

            return Err(Error::EmptyQueue);
        }

        Ok(self.pop())
    }

    /// Returns the element with the top priority together with a queue
    /// without it, or `None` if the queue is empty.
    pub fn pull(&self) -> Option<(T, Self)>
    where
        T: Clone,
    {
        let element = self.peek()?.clone();

        Some((element, self.pop()))
    }

    /// Returns the number of elements in the queue.
    ///
    /// Elements merged by a deduplicating bucket are counted once.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the queue contains no element.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns an empty queue with the same priority function, comparator and
    /// bucket strategy.
    pub fn empty_like(&self) -> Self {
        Self {
            priority_fn: self.priority_fn.clone(),
            seed: self.seed.clone(),
            count: 0,
            index: self.index.cleared(),
        }
    }

    /// Returns an iterator over the elements in the order in which they
    /// would be popped.
    ///
    /// Buckets are visited by decreasing priority, and the elements of each
    /// bucket in the bucket's own order.
    pub fn iter(&self) -> Iter<'_, P, B> {
        Iter::new(self.index.buckets(), self.count)
    }

    /// Returns the elements in the order in which they would be popped.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Computes the priority `element` would be inserted with, without
    /// inserting it.
    pub fn priority_for(&self, element: &T) -> P {
        (self.priority_fn)(element)
    }

    /// Returns the priority function of the queue.
    pub fn priority_fn(&self) -> PriorityFn<T, P> {
        self.priority_fn.clone()
    }

    /// Returns the comparator sorting the priorities.
    pub fn comparator(&self) -> &Comparator<P> {
        self.index.order()
    }

    /// Returns an iterator over the distinct priorities present in the
    /// queue, top priority first.
    pub fn priorities(&self) -> impl Iterator<Item = &P> + '_ {
        self.index.priorities()
    }

    /// Returns the distinct priorities present in the queue, top priority
    /// first.
    pub fn available_priorities(&self) -> Vec<P> {
        let mut priorities = Vec::with_capacity(self.index.len());
        priorities.extend(self.index.priorities().cloned());

        priorities
    }

    /// Returns the top priority, or `None` if the queue is empty.
    pub fn top_priority(&self) -> Option<&P> {
        self.index.top_priority()
    }
}

impl<T: Hash + Eq + Clone, P: Clone> PriorityQueue<T, P> {
    /// Creates an empty queue with FIFO buckets and larger priorities first.
    pub fn new<F>(priority_fn: F) -> Self
    where
        F: Fn(&T) -> P + Send + Sync + 'static,
        P: Ord,
    {
        Self::with_options(priority_fn, Options::new())
    }

    /// Creates a queue from the provided options.
    ///
    /// The initial elements of `options` are inserted in order.
    pub fn with_options<F>(priority_fn: F, options: Options<T, P>) -> Self
    where
        F: Fn(&T) -> P + Send + Sync + 'static,
    {
        let (elements, comparator, variant) = options.into_parts();

        let queue = Self::with_bucket(priority_fn, comparator, VariantBucket::empty(variant))
            .insert_all(elements);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            variant = %variant,
            len = queue.len(),
            priorities = queue.index.len(),
            "priority queue created"
        );

        queue
    }

    /// Returns the bucket strategy of the queue.
    pub fn variant(&self) -> Variant {
        self.seed.variant()
    }
}

impl<T, P: Clone, B: Bucket<Element = T>> Clone for PriorityQueue<T, P, B> {
    fn clone(&self) -> Self {
        Self {
            priority_fn: self.priority_fn.clone(),
            seed: self.seed.clone(),
            count: self.count,
            index: self.index.clone(),
        }
    }
}

impl<T, P, B> fmt::Debug for PriorityQueue<T, P, B>
where
    T: fmt::Debug,
    P: Clone,
    B: Bucket<Element = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, P: Clone, B: Bucket<Element = T>> IntoIterator for &'a PriorityQueue<T, P, B> {
    type Item = &'a T;
    type IntoIter = Iter<'a, P, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P, B, P2, B2> PartialEq<PriorityQueue<T, P2, B2>> for PriorityQueue<T, P, B>
where
    T: PartialEq,
    P: Clone,
    P2: Clone,
    B: Bucket<Element = T>,
    B2: Bucket<Element = T>,
{
    fn eq(&self, other: &PriorityQueue<T, P2, B2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, P: Clone, B: Bucket<Element = T>> Eq for PriorityQueue<T, P, B> {}

impl<T: PartialEq, P: Clone, B: Bucket<Element = T>> PartialEq<[T]> for PriorityQueue<T, P, B> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, P: Clone, B: Bucket<Element = T>, const N: usize> PartialEq<[T; N]>
    for PriorityQueue<T, P, B>
{
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq, P: Clone, B: Bucket<Element = T>> PartialEq<Vec<T>> for PriorityQueue<T, P, B> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq, P: Clone, B: Bucket<Element = T>> PartialEq<PriorityQueue<T, P, B>> for Vec<T> {
    fn eq(&self, other: &PriorityQueue<T, P, B>) -> bool {
        *other == self[..]
    }
}

impl<T, P, B> PartialEq<im::Vector<T>> for PriorityQueue<T, P, B>
where
    T: PartialEq + Clone,
    P: Clone,
    B: Bucket<Element = T>,
{
    fn eq(&self, other: &im::Vector<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Hash, P: Clone, B: Bucket<Element = T>> Hash for PriorityQueue<T, P, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.count);
        for element in self.iter() {
            element.hash(state);
        }
    }
}
