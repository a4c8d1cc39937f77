//! Tie-break strategies for elements sharing a priority.
//!
//! All elements of a queue that map to the same priority are held in a
//! single *bucket*. The bucket decides which of them is peeked and popped
//! first, and whether equal elements are kept apart or merged:
//!
//! - [`FifoBucket`] hands out elements in insertion order and keeps
//!   duplicates,
//! - [`SetBucket`] merges equal elements and hands them out in the order of
//!   its underlying hash set.
//!
//! [`VariantBucket`] selects one of the two at run time from a [`Variant`]
//! tag, which is what queues built with [`Options`](crate::Options) use.
//! Other strategies can be plugged in by implementing [`Bucket`] and
//! building the queue with
//! [`PriorityQueue::with_bucket`](crate::PriorityQueue::with_bucket).

mod fifo_bucket;
mod set_bucket;

use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::Error;

pub use fifo_bucket::FifoBucket;
pub use set_bucket::SetBucket;

/// A persistent collection of same-priority elements.
///
/// None of the methods mutate the bucket: updates return a new bucket which
/// shares unmodified storage with `self`.
pub trait Bucket: Clone {
    /// Type of the elements held in the bucket.
    type Element;

    /// Iterator over the elements, in the order in which they would be
    /// removed.
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Returns a bucket which also contains `element`.
    ///
    /// Strategies that merge equal elements may return a bucket with the same
    /// length as `self`.
    fn insert(&self, element: Self::Element) -> Self;

    /// Returns a bucket without the element that [`Bucket::peek_one`]
    /// designates.
    ///
    /// Removing from an empty bucket returns an empty bucket.
    fn remove_one(&self) -> Self;

    /// Returns the element that [`Bucket::remove_one`] would remove, or
    /// `None` if the bucket is empty.
    fn peek_one(&self) -> Option<&Self::Element>;

    /// Returns the number of elements in the bucket.
    fn len(&self) -> usize;

    /// Returns `true` if the bucket holds no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements in removal order.
    fn iter(&self) -> Self::Iter<'_>;
}

/// Tag naming a built-in bucket strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// FIFO order among equal priorities, duplicates retained.
    #[default]
    Queue,
    /// Unspecified order among equal priorities, duplicates merged.
    Set,
}

impl Variant {
    /// Returns the textual tag of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::Set => "set",
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queue" => Ok(Self::Queue),
            "set" => Ok(Self::Set),
            other => Err(Error::InvalidVariant(other.to_owned())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

/// A bucket whose strategy is selected at run time by a [`Variant`] tag.
pub enum VariantBucket<T> {
    /// A FIFO bucket.
    Queue(FifoBucket<T>),
    /// A deduplicating bucket.
    Set(SetBucket<T>),
}

impl<T: Hash + Eq + Clone> VariantBucket<T> {
    /// Creates an empty bucket for the specified strategy.
    pub fn empty(variant: Variant) -> Self {
        match variant {
            Variant::Queue => Self::Queue(FifoBucket::new()),
            Variant::Set => Self::Set(SetBucket::new()),
        }
    }

    /// Returns the tag of the active strategy.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Queue(_) => Variant::Queue,
            Self::Set(_) => Variant::Set,
        }
    }
}

impl<T: Hash + Eq + Clone> Bucket for VariantBucket<T> {
    type Element = T;
    type Iter<'a>
        = VariantIter<'a, T>
    where
        Self: 'a;

    fn insert(&self, element: T) -> Self {
        match self {
            Self::Queue(bucket) => Self::Queue(bucket.insert(element)),
            Self::Set(bucket) => Self::Set(bucket.insert(element)),
        }
    }

    fn remove_one(&self) -> Self {
        match self {
            Self::Queue(bucket) => Self::Queue(bucket.remove_one()),
            Self::Set(bucket) => Self::Set(bucket.remove_one()),
        }
    }

    fn peek_one(&self) -> Option<&T> {
        match self {
            Self::Queue(bucket) => bucket.peek_one(),
            Self::Set(bucket) => bucket.peek_one(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Queue(bucket) => bucket.len(),
            Self::Set(bucket) => bucket.len(),
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        match self {
            Self::Queue(bucket) => VariantIter::Queue(bucket.iter()),
            Self::Set(bucket) => VariantIter::Set(bucket.iter()),
        }
    }
}

impl<T: Hash + Eq + Clone> Clone for VariantBucket<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Queue(bucket) => Self::Queue(bucket.clone()),
            Self::Set(bucket) => Self::Set(bucket.clone()),
        }
    }
}

impl<T: Hash + Eq + Clone + fmt::Debug> fmt::Debug for VariantBucket<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queue(bucket) => f.debug_tuple("Queue").field(bucket).finish(),
            Self::Set(bucket) => f.debug_tuple("Set").field(bucket).finish(),
        }
    }
}

/// Iterator over the elements of a [`VariantBucket`].
pub enum VariantIter<'a, T: Clone> {
    /// Iterator over a FIFO bucket.
    Queue(im::vector::Iter<'a, T>),
    /// Iterator over a deduplicating bucket.
    Set(im::hashset::Iter<'a, T>),
}

impl<'a, T: Hash + Eq + Clone> Iterator for VariantIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Queue(iter) => iter.next(),
            Self::Set(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Queue(iter) => iter.size_hint(),
            Self::Set(iter) => iter.size_hint(),
        }
    }
}

impl<T: Hash + Eq + Clone> FusedIterator for VariantIter<'_, T> {}

impl<T: Clone> fmt::Debug for VariantIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queue(_) => f.write_str("Queue(..)"),
            Self::Set(_) => f.write_str("Set(..)"),
        }
    }
}
