//! Traversal, peek and pop order of queues built from options.

use persistent_pq::{priority_queue, Comparator, Error, Options, PriorityQueue, Variant};

fn mod5_queue(comparator: Comparator<u32>) -> PriorityQueue<u32, u32> {
    Options::with_comparator(comparator)
        .add_elements([1, 2, 3, 4, 5, 6])
        .build(|x: &u32| x % 5)
}

#[test]
fn descending_order_by_default() {
    let queue = mod5_queue(Comparator::descending());

    assert_eq!(queue.to_vec(), vec![4, 3, 2, 1, 6, 5]);
    assert_eq!(queue.peek(), Some(&4));
    assert_eq!(queue.pop().to_vec(), vec![3, 2, 1, 6, 5]);
    assert_eq!(queue, PriorityQueue::new(|x: &u32| x % 5).insert_all(1..=6));
}

#[test]
fn ascending_order() {
    let queue = mod5_queue(Comparator::ascending());

    assert_eq!(queue.to_vec(), vec![5, 1, 6, 2, 3, 4]);
    assert_eq!(queue.peek(), Some(&5));
}

#[test]
fn reversed_comparator_keeps_buckets() {
    let descending = mod5_queue(Comparator::descending());
    let ascending = mod5_queue(Comparator::descending().reversed());

    // Bucket contents are unchanged, only the bucket order is reversed.
    let mut descending_priorities = descending.available_priorities();
    descending_priorities.reverse();
    assert_eq!(ascending.available_priorities(), descending_priorities);
    assert_eq!(ascending, [5, 1, 6, 2, 3, 4]);
}

#[test]
fn fifo_variant_keeps_duplicates() {
    let queue = priority_queue(
        |x: &u32| x % 2,
        Options::new().add_elements([3, 4, 5, 6, 7, 5]),
    );

    assert_eq!(queue.variant(), Variant::Queue);
    assert_eq!(queue.len(), 6);
    assert_eq!(queue, [3, 5, 7, 5, 4, 6]);
}

#[test]
fn set_variant_merges_duplicates() {
    let queue = priority_queue(
        |x: &u32| x % 2,
        Options::new()
            .add_elements([3, 4, 5, 6, 7, 5])
            .set_variant(Variant::Set),
    );

    let elements = queue.to_vec();
    assert_eq!(queue.len(), 5);
    assert_eq!(elements.len(), 5);

    // Odd elements come first, in any order.
    let mut odd = elements[..3].to_vec();
    odd.sort_unstable();
    assert_eq!(odd, vec![3, 5, 7]);
    let mut even = elements[3..].to_vec();
    even.sort_unstable();
    assert_eq!(even, vec![4, 6]);

    // Re-inserting a member changes nothing.
    let same = queue.insert(7);
    assert_eq!(same.len(), 5);
    assert_eq!(same.to_vec(), elements);

    // Traversal is stable for a given queue.
    assert_eq!(queue.to_vec(), elements);
}

#[test]
fn set_variant_peek_matches_pop() {
    let mut queue = Options::new()
        .add_elements(0..40)
        .set_variant(Variant::Set)
        .build(|x: &u32| x / 10);

    let mut popped = Vec::new();
    while let Some(&top) = queue.peek() {
        popped.push(top);
        queue = queue.pop();
        assert!(!queue.iter().any(|&x| x == top));
    }

    // Priorities come out in order even though members of a bucket may not.
    assert!(popped.windows(2).all(|w| w[0] / 10 >= w[1] / 10));
    popped.sort_unstable();
    assert_eq!(popped, (0..40).collect::<Vec<_>>());
}

#[test]
fn peek_is_top_priority_element() {
    let mut queue = PriorityQueue::new(|x: &i64| x.rem_euclid(7));

    for x in [12, -3, 40, 6, 13, 0, 27, -8] {
        queue = queue.insert(x);

        let top = queue.iter().map(|x| x.rem_euclid(7)).max();
        assert_eq!(queue.peek().map(|x| x.rem_euclid(7)), top);
        assert_eq!(queue.top_priority().copied(), top);
        assert_eq!(queue.len(), queue.iter().count());
    }
}

#[test]
fn emptiness() {
    let empty = PriorityQueue::new(|x: &u8| *x);
    let single = Options::new().add_elements([42]).build(|x: &u8| *x);

    assert!(empty.is_empty());
    assert!(!single.is_empty());
    assert_eq!(empty.peek(), None);
    assert_eq!(empty.try_pop().err(), Some(Error::EmptyQueue));
    assert!(empty.pop().is_empty());
    assert!(single.pop().is_empty());
}

#[test]
fn invalid_variant_tag() {
    let err = Options::<u8, u8>::new()
        .set_variant_tag("priority")
        .unwrap_err();

    assert_eq!(err, Error::InvalidVariant("priority".to_owned()));
    assert!(err.to_string().contains("priority"));
}
