use crate::error::{PopError, PushError};
use crate::loom::Arc;
use crate::raw::RawRing;
use std::fmt;
use std::marker::PhantomData;

/// Marker fixing which cursor each half of a split pair owns. The two
/// implementors are [`Forward`] and [`Reverse`]; the parameter selects an
/// end at compile time and carries no data.
pub trait Direction {}

/// The producer appends at the back, the consumer drains at the front.
pub enum Forward {}

/// The producer inserts at the front, the consumer drains at the back.
pub enum Reverse {}

impl Direction for Forward {}
impl Direction for Reverse {}

pub(crate) fn pair<D: Direction>(ring: RawRing) -> (Producer<D>, Consumer<D>) {
    let inner = Arc::new(ring);
    (
        Producer {
            inner: inner.clone(),
            _dir: PhantomData,
        },
        Consumer {
            inner,
            _dir: PhantomData,
        },
    )
}

/// Inserting half of a split [`RingDeque`](crate::RingDeque).
///
/// A producer owns exactly one cursor, so it may live in a different thread
/// or interrupt context than the matching [`Consumer`]. It is `Send` and
/// deliberately not `Clone`.
pub struct Producer<D = Forward> {
    inner: Arc<RawRing>,
    _dir: PhantomData<D>,
}

/// Removing half of a split [`RingDeque`](crate::RingDeque).
pub struct Consumer<D = Forward> {
    inner: Arc<RawRing>,
    _dir: PhantomData<D>,
}

impl<D: Direction> Producer<D> {
    /// Number of bytes that can still be inserted.
    pub fn space(&self) -> usize {
        self.inner.space()
    }

    pub fn is_full(&self) -> bool {
        self.inner.space() == 0
    }

    /// Total slots, including the reserved one.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// True once the matching consumer has been dropped.
    pub fn is_abandoned(&self) -> bool {
        Arc::strong_count(&self.inner) <= 1
    }
}

impl Producer<Forward> {
    /// Appends `item` after the newest element.
    pub fn push(&mut self, item: u8) -> Result<(), PushError> {
        if self.inner.space() >= 1 {
            unsafe { self.inner.push_back(item) };
            Ok(())
        } else {
            Err(PushError::Full)
        }
    }
}

impl Producer<Reverse> {
    /// Inserts `item` in front of the oldest element.
    pub fn push(&mut self, item: u8) -> Result<(), PushError> {
        if self.inner.space() >= 1 {
            unsafe { self.inner.push_front(item) };
            Ok(())
        } else {
            Err(PushError::Full)
        }
    }
}

impl<D: Direction> Consumer<D> {
    /// Number of bytes waiting to be removed.
    pub fn population(&self) -> usize {
        self.inner.population()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Total slots, including the reserved one.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// True once the matching producer has been dropped.
    pub fn is_abandoned(&self) -> bool {
        Arc::strong_count(&self.inner) <= 1
    }
}

impl Consumer<Forward> {
    /// Removes and returns the oldest byte.
    pub fn pop(&mut self) -> Result<u8, PopError> {
        if self.inner.is_empty() {
            Err(PopError::Empty)
        } else {
            Ok(unsafe { self.inner.pop_front() })
        }
    }

    /// Returns the byte `index` steps in from the front without removing
    /// it. Offset 0 is the oldest element. The producer only ever writes
    /// free slots, so occupied ones can be read without further
    /// synchronization.
    pub fn peek(&self, index: usize) -> Option<u8> {
        if index < self.inner.population() {
            Some(unsafe { self.inner.peek_front(index) })
        } else {
            None
        }
    }
}

impl Consumer<Reverse> {
    /// Removes and returns the newest byte.
    pub fn pop(&mut self) -> Result<u8, PopError> {
        if self.inner.is_empty() {
            Err(PopError::Empty)
        } else {
            Ok(unsafe { self.inner.pop_back() })
        }
    }

    /// Returns the byte `index` steps in from the back without removing it.
    /// Offset 0 is the newest element.
    pub fn peek(&self, index: usize) -> Option<u8> {
        if index < self.inner.population() {
            Some(unsafe { self.inner.peek_back(index) })
        } else {
            None
        }
    }
}

impl<D: Direction> fmt::Debug for Producer<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("capacity", &self.inner.capacity())
            .field("space", &self.inner.space())
            .field("abandoned", &self.is_abandoned())
            .finish()
    }
}

impl<D: Direction> fmt::Debug for Consumer<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("capacity", &self.inner.capacity())
            .field("population", &self.inner.population())
            .field("abandoned", &self.is_abandoned())
            .finish()
    }
}
