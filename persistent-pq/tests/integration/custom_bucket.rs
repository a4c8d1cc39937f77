//! Queues over a user-defined tie-breaking strategy.

use persistent_pq::{Bucket, Comparator, FifoBucket, PriorityQueue};

/// A bucket handing out the most recently inserted element first.
#[derive(Clone, Debug, Default)]
struct LifoBucket<T: Clone> {
    elements: im::Vector<T>,
}

impl<T: Clone> Bucket for LifoBucket<T> {
    type Element = T;
    type Iter<'a>
        = std::iter::Rev<im::vector::Iter<'a, T>>
    where
        Self: 'a;

    fn insert(&self, element: T) -> Self {
        let mut elements = self.elements.clone();
        elements.push_back(element);

        Self { elements }
    }

    fn remove_one(&self) -> Self {
        let mut elements = self.elements.clone();
        elements.pop_back();

        Self { elements }
    }

    fn peek_one(&self) -> Option<&T> {
        self.elements.back()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter().rev()
    }
}

#[test]
fn lifo_tie_breaking() {
    let queue = PriorityQueue::with_bucket(
        |x: &u32| x % 2,
        Comparator::descending(),
        LifoBucket::default(),
    )
    .insert_all([1, 2, 3, 4, 5]);

    assert_eq!(queue, [5, 3, 1, 4, 2]);
    assert_eq!(queue.peek(), Some(&5));
    assert_eq!(queue.pop().pop(), [1, 4, 2]);
}

#[test]
fn fifo_bucket_without_hash() {
    #[derive(Clone, Debug, PartialEq)]
    struct Reading {
        sensor: u8,
        value: f32,
    }

    let queue = PriorityQueue::with_bucket(
        |r: &Reading| r.sensor,
        Comparator::ascending(),
        FifoBucket::new(),
    )
    .insert(Reading { sensor: 2, value: 0.5 })
    .insert(Reading { sensor: 1, value: 1.5 })
    .insert(Reading { sensor: 2, value: -0.5 });

    let values: Vec<f32> = queue.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![1.5, 0.5, -0.5]);
}
