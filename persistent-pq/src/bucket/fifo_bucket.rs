//! First-in, first-out bucket.

use std::fmt;

use im::Vector;

use super::Bucket;

/// A bucket handing out elements in insertion order.
///
/// Equal elements are kept as distinct entries, so inserting the same value
/// twice grows the bucket by 2.
///
/// Elements are held in an RRB vector: appending at the back and removing
/// from the front are both amortized *O*(1), and a derived bucket only copies
/// the chunks it touches.
pub struct FifoBucket<T> {
    elements: Vector<T>,
}

impl<T: Clone> FifoBucket<T> {
    /// Creates an empty bucket.
    pub fn new() -> Self {
        Self {
            elements: Vector::new(),
        }
    }
}

impl<T: Clone> Bucket for FifoBucket<T> {
    type Element = T;
    type Iter<'a>
        = im::vector::Iter<'a, T>
    where
        Self: 'a;

    fn insert(&self, element: T) -> Self {
        let mut elements = self.elements.clone();
        elements.push_back(element);

        Self { elements }
    }

    fn remove_one(&self) -> Self {
        let mut elements = self.elements.clone();
        elements.pop_front();

        Self { elements }
    }

    fn peek_one(&self) -> Option<&T> {
        self.elements.front()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }
}

impl<T: Clone> Default for FifoBucket<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for FifoBucket<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for FifoBucket<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}
