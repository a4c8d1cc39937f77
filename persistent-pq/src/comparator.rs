//! Total orders over priorities.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A shareable total order over priorities of type `P`.
///
/// The priority that sorts first under the comparator is the one whose
/// elements are peeked and popped first. Cloning a `Comparator` only bumps a
/// reference count.
pub struct Comparator<P> {
    cmp: Arc<dyn Fn(&P, &P) -> Ordering + Send + Sync>,
}

impl<P> Comparator<P> {
    /// Creates a comparator from a closure.
    ///
    /// The closure must implement a total order; a closure that does not
    /// will produce an arbitrary (but memory-safe) traversal order.
    pub fn from_fn<F>(cmp: F) -> Self
    where
        F: Fn(&P, &P) -> Ordering + Send + Sync + 'static,
    {
        Self { cmp: Arc::new(cmp) }
    }

    /// Returns a comparator with the opposite order.
    pub fn reversed(&self) -> Self
    where
        P: 'static,
    {
        let cmp = self.cmp.clone();

        Self::from_fn(move |a, b| cmp(b, a))
    }

    /// Compares two priorities.
    #[inline]
    pub fn compare(&self, a: &P, b: &P) -> Ordering {
        (self.cmp)(a, b)
    }
}

impl<P: Ord> Comparator<P> {
    /// Larger priorities come first.
    ///
    /// This is the default order.
    pub fn descending() -> Self {
        Self::from_fn(|a: &P, b: &P| b.cmp(a))
    }

    /// Smaller priorities come first.
    pub fn ascending() -> Self {
        Self::from_fn(|a: &P, b: &P| a.cmp(b))
    }
}

impl<P: Ord> Default for Comparator<P> {
    fn default() -> Self {
        Self::descending()
    }
}

impl<P> Clone for Comparator<P> {
    fn clone(&self) -> Self {
        Self {
            cmp: self.cmp.clone(),
        }
    }
}

impl<P> fmt::Debug for Comparator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}
