use std::fmt;

use crate::error::QueueError;

/// Capacity of a queue created with [`RingQueue::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// FIFO queue over a circular array.
///
/// Logical element `i` (counting from the front) is stored at
/// `(front + i) % capacity`. `size <= capacity` and `front < capacity`
/// always hold.
pub struct RingQueue<T> {
    items: Vec<Option<T>>,
    size: usize,
    front: usize,
}

/// Arrangement of a full buffer at the moment it grows.
#[derive(Debug, PartialEq, Eq)]
enum Layout {
    /// `front == 0`, the back is the last slot: nothing to move.
    Contiguous,
    /// The back wrapped around to `0..=back`, below `front`.
    Wrapped { back: usize },
}

impl<T> RingQueue<T> {
    pub fn new() -> Result<Self, QueueError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        items.resize_with(capacity, || None);
        Ok(Self {
            items,
            size: 0,
            front: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Slot of the last item. Only meaningful when the queue is non-empty.
    #[inline]
    fn back(&self) -> usize {
        (self.front + self.size - 1) % self.capacity()
    }

    /// Adds an item at the back, doubling the capacity if the queue is full.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        if self.size == 0 {
            self.items[self.front] = Some(item);
            self.size = 1;
            return Ok(());
        }

        if self.size < self.capacity() {
            let slot = (self.back() + 1) % self.capacity();
            self.items[slot] = Some(item);
            self.size += 1;
            return Ok(());
        }

        self.grow()?;
        // Contiguous after growth with free room past the back.
        let slot = self.back() + 1;
        self.items[slot] = Some(item);
        self.size += 1;
        Ok(())
    }

    fn layout(&self) -> Layout {
        let back = self.back();
        if self.front <= back {
            Layout::Contiguous
        } else {
            Layout::Wrapped { back }
        }
    }

    /// Doubles a full buffer. `front` is left where it is.
    fn grow(&mut self) -> Result<(), QueueError> {
        let old = self.capacity();
        let layout = self.layout();

        self.items.try_reserve_exact(old)?;
        self.items.resize_with(old * 2, || None);

        match layout {
            Layout::Contiguous => {}
            Layout::Wrapped { back } => {
                for i in 0..=back {
                    self.items[old + i] = self.items[i].take();
                }
            }
        }
        Ok(())
    }

    /// Removes and returns the front item.
    ///
    /// Dequeuing from an empty queue is a caller error reported as
    /// [`QueueError::Empty`].
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.size == 0 {
            return Err(QueueError::Empty);
        }
        let item = self.items[self.front].take().ok_or(QueueError::Empty)?;
        self.front = (self.front + 1) % self.capacity();
        self.size -= 1;
        Ok(item)
    }

    /// Front item without removing it.
    pub fn front(&self) -> Result<&T, QueueError> {
        if self.size == 0 {
            return Err(QueueError::Empty);
        }
        self.items[self.front].as_ref().ok_or(QueueError::Empty)
    }

    /// Items from front to back.
    pub fn dump(&self) -> Iter<'_, T> {
        Iter { queue: self, pos: 0 }
    }
}

pub struct Iter<'a, T> {
    queue: &'a RingQueue<T>,
    pos: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let q = self.queue;
        if self.pos >= q.size {
            return None;
        }
        let slot = (q.front + self.pos) % q.capacity();
        self.pos += 1;
        q.items[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.queue.size - self.pos;
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.dump()
    }
}

/// Items separated by single spaces, front first.
impl<T: fmt::Display> fmt::Display for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.dump().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.dump()).finish()
    }
}
