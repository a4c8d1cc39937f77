//! Metadata queries on queues and non-queues.

use std::collections::VecDeque;

use persistent_pq::introspect::{
    available_priorities, is_priority_queue, priority_fn, priority_for, top_priority,
};
use persistent_pq::{Comparator, Options, PriorityQueue};

#[test]
fn queue_metadata() {
    let queue = PriorityQueue::new(|x: &u32| x % 5).insert_all([1, 2, 3, 4, 5, 6]);

    assert!(is_priority_queue(&queue));
    assert_eq!(available_priorities(&queue), Some(vec![4, 3, 2, 1, 0]));
    assert_eq!(top_priority(&queue), Some(4));
    assert_eq!(top_priority(&queue.empty_like()), None);
    assert_eq!(priority_for(&queue, &17), Some(2));
    assert_eq!(priority_fn(&queue).map(|f| f(&17)), Some(2));

    // None of the above inserted anything.
    assert_eq!(queue, [4, 3, 2, 1, 6, 5]);
}

#[test]
fn ascending_metadata() {
    let queue = Options::with_comparator(Comparator::ascending())
        .add_elements(["ccc", "a", "bb"])
        .build(|s: &&str| s.len());

    assert_eq!(available_priorities(&queue), Some(vec![1, 2, 3]));
    assert_eq!(top_priority(&queue), Some(1));
}

#[test]
fn non_queue_values() {
    let list = vec!['a', 'b'];
    let deque = VecDeque::from(vec!['a', 'b']);

    assert!(!is_priority_queue(&list));
    assert!(!is_priority_queue(&deque));
    assert!(!is_priority_queue(&None::<char>));
    assert!(available_priorities(&list).is_none());
    assert!(top_priority(&deque).is_none());
    assert!(priority_for(&list, &'a').is_none());
    assert!(priority_fn(&list).is_none());
}

#[test]
fn queue_equals_plain_sequence() {
    let queue = PriorityQueue::new(|x: &u8| *x).insert_all([2, 9, 4]);

    assert_eq!(queue, vec![9, 4, 2]);
    assert_eq!(vec![9, 4, 2], queue);
    assert_eq!(queue, [9, 4, 2][..]);
}
