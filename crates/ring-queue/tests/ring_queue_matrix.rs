use ring_queue::{QueueError, RingQueue, DEFAULT_CAPACITY};

#[test]
fn new_queue_matrix() {
    let q = RingQueue::<i32>::new().unwrap();
    assert_eq!(q.capacity(), DEFAULT_CAPACITY);
    assert_eq!(q.capacity(), 16);
    assert_eq!(q.size(), 0);
    assert!(q.is_empty());
    assert_eq!(q.front(), Err(QueueError::Empty));
    assert_eq!(q.dump().count(), 0);
    assert_eq!(q.to_string(), "");
}

#[test]
fn zero_capacity_is_rejected() {
    assert_eq!(
        RingQueue::<u8>::with_capacity(0).err(),
        Some(QueueError::ZeroCapacity)
    );
}

#[test]
fn dequeue_on_empty_is_checked() {
    let mut q = RingQueue::<i32>::new().unwrap();
    assert_eq!(q.dequeue(), Err(QueueError::Empty));
    q.enqueue(1).unwrap();
    assert_eq!(q.dequeue(), Ok(1));
    assert_eq!(q.dequeue(), Err(QueueError::Empty));
    assert_eq!(q.size(), 0);
}

#[test]
fn growth_past_default_capacity_matrix() {
    let mut q = RingQueue::new().unwrap();
    for i in 0..16 {
        q.enqueue(i).unwrap();
    }
    assert_eq!(q.capacity(), 16);
    q.enqueue(16).unwrap();
    assert_eq!(q.capacity(), 32);
    assert_eq!(q.size(), 17);

    let mut out = Vec::new();
    while let Ok(x) = q.dequeue() {
        out.push(x);
    }
    assert_eq!(out, (0..17).collect::<Vec<_>>());
}

#[test]
fn front_wraps_before_any_resize() {
    let mut q = RingQueue::with_capacity(6).unwrap();
    for i in 1..=5 {
        q.enqueue(i).unwrap();
    }
    for _ in 0..3 {
        q.dequeue().unwrap();
    }
    for i in 6..=8 {
        q.enqueue(i).unwrap();
    }
    assert_eq!(q.capacity(), 6);
    assert_eq!(q.to_string(), "4 5 6 7 8");
    assert_eq!(q.front(), Ok(&4));
    assert_eq!(q.size(), 5);
}

#[test]
fn default_capacity_wrap_then_grow() {
    let mut q = RingQueue::new().unwrap();
    for i in 0..5 {
        q.enqueue(i).unwrap();
    }
    for _ in 0..3 {
        q.dequeue().unwrap();
    }
    for i in 5..8 {
        q.enqueue(i).unwrap();
    }
    assert_eq!(q.dump().copied().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);

    // Fill until the back wraps past the array end, then force growth.
    for i in 8..19 {
        q.enqueue(i).unwrap();
    }
    assert_eq!(q.size(), 16);
    assert_eq!(q.capacity(), 16);
    q.enqueue(19).unwrap();
    assert_eq!(q.capacity(), 32);
    assert_eq!(q.dump().copied().collect::<Vec<_>>(), (3..20).collect::<Vec<_>>());
}

#[test]
fn front_does_not_consume() {
    let mut q = RingQueue::new().unwrap();
    q.enqueue("a").unwrap();
    q.enqueue("b").unwrap();
    assert_eq!(q.front(), Ok(&"a"));
    assert_eq!(q.front(), Ok(&"a"));
    assert_eq!(q.size(), 2);
}

#[test]
fn owned_items_are_moved_out() {
    let mut q = RingQueue::with_capacity(2).unwrap();
    for s in ["x", "y", "z"] {
        q.enqueue(s.to_string()).unwrap();
    }
    let taken: String = std::iter::from_fn(|| q.dequeue().ok()).collect();
    assert_eq!(taken, "xyz");
    assert_eq!(format!("{q:?}"), "[]");
}
