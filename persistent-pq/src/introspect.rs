//! Metadata queries on values that may or may not be priority queues.
//!
//! The functions of this module accept any value implementing
//! [`AsPriorityQueue`] and return `None` when the value is not a priority
//! queue, which makes it possible to inspect heterogeneous collections
//! without matching on their type:
//!
//! ```
//! use persistent_pq::{introspect, PriorityQueue};
//!
//! let queue = PriorityQueue::new(|x: &u32| x % 5).insert_all([1, 2, 3]);
//! let plain = vec![1, 2, 3];
//!
//! assert!(introspect::is_priority_queue(&queue));
//! assert!(!introspect::is_priority_queue(&plain));
//!
//! assert_eq!(introspect::top_priority(&queue), Some(3));
//! assert_eq!(introspect::priority_for(&queue, &9), Some(4));
//! assert_eq!(introspect::priority_for(&plain, &9), None);
//! ```
//!
//! Type-erased values are inspected through an [`AnyValue`] view naming the
//! queue type to look for:
//!
//! ```
//! use std::any::Any;
//!
//! use persistent_pq::introspect::{self, AnyValue};
//! use persistent_pq::PriorityQueue;
//!
//! let values: Vec<Box<dyn Any>> = vec![
//!     Box::new(42u8),
//!     Box::new(PriorityQueue::new(|x: &u32| x % 5).insert(7)),
//! ];
//!
//! let tops: Vec<_> = values
//!     .iter()
//!     .map(|value| introspect::top_priority(&AnyValue::<u32, u32>::new(value.as_ref())))
//!     .collect();
//!
//! assert_eq!(tops, [None, Some(2)]);
//! ```

use std::any::Any;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::bucket::{Bucket, FifoBucket, VariantBucket};
use crate::queue::{PriorityFn, PriorityQueue};

/// Capability of viewing a value as a [`PriorityQueue`].
///
/// Priority queues view themselves as such; the other implementors are
/// plain collections which never do and use [`Infallible`] as their
/// priority type.
pub trait AsPriorityQueue {
    /// Type of the elements.
    type Element;
    /// Type of the priorities.
    type Priority;
    /// Type of the buckets.
    type Bucket: Bucket<Element = Self::Element>;

    /// Returns the value as a priority queue, if it is one.
    fn as_priority_queue(
        &self,
    ) -> Option<&PriorityQueue<Self::Element, Self::Priority, Self::Bucket>>;
}

impl<T, P: Clone, B: Bucket<Element = T>> AsPriorityQueue for PriorityQueue<T, P, B> {
    type Element = T;
    type Priority = P;
    type Bucket = B;

    fn as_priority_queue(&self) -> Option<&PriorityQueue<T, P, B>> {
        Some(self)
    }
}

macro_rules! impl_not_a_priority_queue {
    ($($collection:ty),*) => {
        $(
            impl<T: Clone> AsPriorityQueue for $collection {
                type Element = T;
                type Priority = Infallible;
                type Bucket = FifoBucket<T>;

                fn as_priority_queue(&self) -> Option<&PriorityQueue<T, Infallible, FifoBucket<T>>> {
                    None
                }
            }
        )*
    };
}

impl_not_a_priority_queue!([T], Vec<T>, VecDeque<T>, im::Vector<T>, Option<T>);

macro_rules! impl_scalar_not_a_priority_queue {
    ($($scalar:ty),*) => {
        $(
            impl AsPriorityQueue for $scalar {
                type Element = $scalar;
                type Priority = Infallible;
                type Bucket = FifoBucket<$scalar>;

                fn as_priority_queue(&self) -> Option<&PriorityQueue<$scalar, Infallible, FifoBucket<$scalar>>> {
                    None
                }
            }
        )*
    };
}

impl_scalar_not_a_priority_queue!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String
);

impl AsPriorityQueue for str {
    type Element = String;
    type Priority = Infallible;
    type Bucket = FifoBucket<String>;

    fn as_priority_queue(&self) -> Option<&PriorityQueue<String, Infallible, FifoBucket<String>>> {
        None
    }
}

impl<'a> AsPriorityQueue for &'a str {
    type Element = &'a str;
    type Priority = Infallible;
    type Bucket = FifoBucket<&'a str>;

    fn as_priority_queue(&self) -> Option<&PriorityQueue<&'a str, Infallible, FifoBucket<&'a str>>> {
        None
    }
}

/// A view of a type-erased value as a possible
/// `PriorityQueue<T, P, B>`.
///
/// The value is a priority queue if it downcasts to exactly this type; any
/// other value, queue or not, is reported as not being one.
pub struct AnyValue<'a, T, P, B = VariantBucket<T>> {
    value: &'a dyn Any,
    _queue: PhantomData<fn() -> PriorityQueue<T, P, B>>,
}

impl<'a, T, P, B> AnyValue<'a, T, P, B> {
    /// Creates a view of `value`.
    pub fn new(value: &'a dyn Any) -> Self {
        Self {
            value,
            _queue: PhantomData,
        }
    }
}

impl<T, P, B> AsPriorityQueue for AnyValue<'_, T, P, B>
where
    T: 'static,
    P: Clone + 'static,
    B: Bucket<Element = T> + 'static,
{
    type Element = T;
    type Priority = P;
    type Bucket = B;

    fn as_priority_queue(&self) -> Option<&PriorityQueue<T, P, B>> {
        self.value.downcast_ref()
    }
}

impl<T, P, B> fmt::Debug for AnyValue<'_, T, P, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValue").finish_non_exhaustive()
    }
}

/// Returns `true` if the value is a priority queue.
pub fn is_priority_queue<V: AsPriorityQueue + ?Sized>(value: &V) -> bool {
    value.as_priority_queue().is_some()
}

/// Returns the distinct priorities of a priority queue, top priority first,
/// or `None` if the value is not a priority queue.
pub fn available_priorities<V>(value: &V) -> Option<Vec<V::Priority>>
where
    V: AsPriorityQueue + ?Sized,
    V::Priority: Clone,
{
    value
        .as_priority_queue()
        .map(|queue| queue.available_priorities())
}

/// Returns the top priority of a priority queue, or `None` if the value is
/// not a priority queue or is an empty one.
pub fn top_priority<V>(value: &V) -> Option<V::Priority>
where
    V: AsPriorityQueue + ?Sized,
    V::Priority: Clone,
{
    value.as_priority_queue()?.top_priority().cloned()
}

/// Returns the priority function of a priority queue, or `None` if the
/// value is not a priority queue.
pub fn priority_fn<V>(value: &V) -> Option<PriorityFn<V::Element, V::Priority>>
where
    V: AsPriorityQueue + ?Sized,
    V::Priority: Clone,
{
    value.as_priority_queue().map(|queue| queue.priority_fn())
}

/// Computes the priority `element` would be inserted with into a priority
/// queue, without inserting it, or returns `None` if the value is not a
/// priority queue.
pub fn priority_for<V>(value: &V, element: &V::Element) -> Option<V::Priority>
where
    V: AsPriorityQueue + ?Sized,
    V::Priority: Clone,
{
    value
        .as_priority_queue()
        .map(|queue| queue.priority_for(element))
}
