//! A persistent priority queue whose element priorities are derived from the
//! elements themselves.
//!
//! A [`PriorityQueue`] is created with a *priority function* mapping each
//! element to its priority. Elements are inserted without an explicit
//! priority: the function is evaluated once on insertion and the element is
//! filed under the resulting priority. Peeking and popping then hand out
//! elements by decreasing priority.
//!
//! Queues are immutable values. Inserting or popping an element returns a new
//! queue and leaves the original untouched, so any number of versions of a
//! queue can be kept around cheaply: versions share all the storage that an
//! update did not touch.
//!
//!
//! # A practical overview
//!
//! ## Creating a queue
//!
//! The simplest way to create a queue is [`PriorityQueue::new`], which uses
//! default settings. More settings are available through the [`Options`]
//! builder:
//!
//! ```
//! use persistent_pq::{Comparator, Options, PriorityQueue, Variant};
//!
//! // Tasks are prioritized by their urgency level.
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! struct Task {
//!     name: &'static str,
//!     urgency: u8,
//! }
//!
//! let default_queue = PriorityQueue::new(|task: &Task| task.urgency);
//!
//! let custom_queue = Options::new()
//!     .add_elements([
//!         Task { name: "write report", urgency: 2 },
//!         Task { name: "fix build", urgency: 9 },
//!     ])
//!     .set_comparator(Comparator::ascending())
//!     .set_variant(Variant::Set)
//!     .build(|task: &Task| task.urgency);
//!
//! assert!(default_queue.is_empty());
//! assert_eq!(custom_queue.peek().map(|task| task.name), Some("write report"));
//! ```
//!
//! The settings are:
//!
//! * the initial elements, inserted in order (default: none),
//! * the [`Comparator`] deciding which priority comes first (default:
//!   [`Comparator::descending`], i.e. larger priorities first),
//! * the [`Variant`] of the buckets holding elements with equal priorities
//!   (default: [`Variant::Queue`]).
//!
//! ## Ties between equal priorities
//!
//! Elements sharing a priority are held in a common bucket which decides
//! which of them comes first:
//!
//! * with [`Variant::Queue`] buckets, equal-priority elements come out in
//!   insertion order and duplicate elements are all retained,
//! * with [`Variant::Set`] buckets, an element equal to one already in the
//!   bucket is not inserted again, and equal-priority elements come out in an
//!   unspecified but deterministic order.
//!
//! ```
//! use persistent_pq::{Options, Variant};
//!
//! let elements = [3, 4, 5, 6, 7, 5];
//!
//! let fifo = Options::new()
//!     .add_elements(elements)
//!     .build(|x: &u32| x % 2);
//! let set = Options::new()
//!     .add_elements(elements)
//!     .set_variant(Variant::Set)
//!     .build(|x: &u32| x % 2);
//!
//! assert_eq!(fifo, [3, 5, 7, 5, 4, 6]);
//! assert_eq!(set.len(), 5);
//! ```
//!
//! Other tie-breaking strategies can be implemented with the [`Bucket`] trait
//! and used with [`PriorityQueue::with_bucket`].
//!
//! ## Deriving new queues
//!
//! ```
//! use persistent_pq::PriorityQueue;
//!
//! let base = PriorityQueue::new(|x: &i32| x % 5).insert_all([1, 2, 3, 4, 5, 6]);
//!
//! let popped = base.pop();
//! let extended = base.insert(9);
//!
//! assert_eq!(base, [4, 3, 2, 1, 6, 5]);
//! assert_eq!(popped, [3, 2, 1, 6, 5]);
//! assert_eq!(extended, [4, 9, 3, 2, 1, 6, 5]);
//! ```
//!
//! Popping an empty queue returns an empty queue. Where this should be
//! treated as an error, [`PriorityQueue::try_pop`] returns
//! [`Error::EmptyQueue`] instead.
//!
//! Queues compare equal when they yield the same elements in the same order,
//! irrespective of how they were configured. They can also be compared to
//! vectors, slices and arrays.
//!
//! ## Introspection
//!
//! The [`introspect`] module answers metadata queries (available priorities,
//! top priority, priority of a hypothetical element) on values which may or
//! may not be priority queues.
//!
//!
//! # Feature flags
//!
//! * `tracing`: emits [`tracing`](https://docs.rs/tracing) events on queue
//!   construction and on attempts to pop an empty queue.
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod bucket;
mod comparator;
mod error;
pub mod introspect;
mod options;
mod priority_index;
mod queue;

pub use bucket::{Bucket, FifoBucket, SetBucket, Variant, VariantBucket};
pub use comparator::Comparator;
pub use error::Error;
pub use options::{priority_queue, Options};
pub use queue::{Iter, PriorityFn, PriorityQueue};
