use crate::error::{PlaceError, PopError, PushError};
use crate::raw::RawRing;
use crate::spsc::{pair, Consumer, Forward, Producer, Reverse};
use std::fmt;

/// Fixed-capacity double-ended ring buffer of bytes.
///
/// One slot of the backing storage is kept free so that a full ring stays
/// distinguishable from an empty one: a deque built with capacity `C` holds
/// at most `C - 1` bytes.
///
/// Every method runs in constant time and never touches a lock. Mutation
/// takes `&mut self`; to hand the two ends to two execution contexts, turn
/// the deque into a producer/consumer pair with [`split`](Self::split) or
/// [`split_rev`](Self::split_rev).
///
/// ```
/// use ringdeq::RingDeque;
///
/// let mut dq = RingDeque::new(4);
/// dq.push_back(1).unwrap();
/// dq.push_front(2).unwrap();
/// assert_eq!(dq.pop_back(), Ok(1));
/// assert_eq!(dq.pop_front(), Ok(2));
/// assert!(dq.is_empty());
/// ```
pub struct RingDeque {
    ring: RawRing,
}

impl RingDeque {
    /// Creates a deque with `capacity` slots, `capacity - 1` of them usable.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: RawRing::with_capacity(capacity),
        }
    }

    /// Total number of storage slots, including the reserved one.
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Largest number of bytes the deque can hold, `capacity() - 1`.
    pub fn usable(&self) -> usize {
        self.ring.usable()
    }

    /// Number of bytes currently held.
    pub fn population(&self) -> usize {
        self.ring.population()
    }

    /// Number of bytes that can still be inserted.
    pub fn space(&self) -> usize {
        self.ring.space()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ring.space() == 0
    }

    /// Appends `item` after the newest element.
    pub fn push_back(&mut self, item: u8) -> Result<(), PushError> {
        if self.ring.space() >= 1 {
            unsafe { self.ring.push_back(item) };
            Ok(())
        } else {
            Err(PushError::Full)
        }
    }

    /// Inserts `item` in front of the oldest element.
    pub fn push_front(&mut self, item: u8) -> Result<(), PushError> {
        if self.ring.space() >= 1 {
            unsafe { self.ring.push_front(item) };
            Ok(())
        } else {
            Err(PushError::Full)
        }
    }

    /// Removes and returns the newest byte.
    pub fn pop_back(&mut self) -> Result<u8, PopError> {
        if self.ring.is_empty() {
            Err(PopError::Empty)
        } else {
            Ok(unsafe { self.ring.pop_back() })
        }
    }

    /// Removes and returns the oldest byte.
    pub fn pop_front(&mut self) -> Result<u8, PopError> {
        if self.ring.is_empty() {
            Err(PopError::Empty)
        } else {
            Ok(unsafe { self.ring.pop_front() })
        }
    }

    /// Returns the byte `index` steps in from the back without removing it.
    /// Offset 0 is the newest element.
    pub fn peek_back(&self, index: usize) -> Option<u8> {
        if index < self.ring.population() {
            Some(unsafe { self.ring.peek_back(index) })
        } else {
            None
        }
    }

    /// Returns the byte `index` steps in from the front without removing it.
    /// Offset 0 is the oldest element.
    pub fn peek_front(&self, index: usize) -> Option<u8> {
        if index < self.ring.population() {
            Some(unsafe { self.ring.peek_front(index) })
        } else {
            None
        }
    }

    /// Overwrites the byte `index` steps in from the back. Cursors and
    /// population are unchanged.
    pub fn place_back(&mut self, item: u8, index: usize) -> Result<(), PlaceError> {
        if index < self.ring.population() {
            unsafe { self.ring.place_back(item, index) };
            Ok(())
        } else {
            Err(PlaceError::OutOfRange)
        }
    }

    /// Overwrites the byte `index` steps in from the front. Cursors and
    /// population are unchanged.
    pub fn place_front(&mut self, item: u8, index: usize) -> Result<(), PlaceError> {
        if index < self.ring.population() {
            unsafe { self.ring.place_front(item, index) };
            Ok(())
        } else {
            Err(PlaceError::OutOfRange)
        }
    }

    /// Discards the whole contents in constant time. Storage is untouched.
    pub fn flush(&mut self) {
        self.ring.flush();
    }

    /// Empties the deque and parks both cursors at `offset`, so that later
    /// operations exercise a chosen region of storage.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= capacity()`.
    pub fn reset_at(&mut self, offset: usize) {
        assert!(offset < self.ring.capacity(), "reset offset out of bounds");
        self.ring.reset_at(offset);
    }

    /// `push_back` without the occupancy check.
    ///
    /// # Safety
    ///
    /// `space()` must be at least 1.
    pub unsafe fn push_back_unchecked(&mut self, item: u8) {
        self.ring.push_back(item);
    }

    /// `push_front` without the occupancy check.
    ///
    /// # Safety
    ///
    /// `space()` must be at least 1.
    pub unsafe fn push_front_unchecked(&mut self, item: u8) {
        self.ring.push_front(item);
    }

    /// `pop_back` without the occupancy check.
    ///
    /// # Safety
    ///
    /// `population()` must be at least 1.
    pub unsafe fn pop_back_unchecked(&mut self) -> u8 {
        self.ring.pop_back()
    }

    /// `pop_front` without the occupancy check.
    ///
    /// # Safety
    ///
    /// `population()` must be at least 1.
    pub unsafe fn pop_front_unchecked(&mut self) -> u8 {
        self.ring.pop_front()
    }

    /// `peek_back` without the bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `population()`.
    pub unsafe fn peek_back_unchecked(&self, index: usize) -> u8 {
        self.ring.peek_back(index)
    }

    /// `peek_front` without the bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `population()`.
    pub unsafe fn peek_front_unchecked(&self, index: usize) -> u8 {
        self.ring.peek_front(index)
    }

    /// `place_back` without the bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `population()`.
    pub unsafe fn place_back_unchecked(&mut self, item: u8, index: usize) {
        self.ring.place_back(item, index);
    }

    /// `place_front` without the bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `population()`.
    pub unsafe fn place_front_unchecked(&mut self, item: u8, index: usize) {
        self.ring.place_front(item, index);
    }

    /// Splits the deque into a back-inserting producer and a front-removing
    /// consumer, the classic FIFO arrangement. Bytes already in the deque
    /// stay available to the consumer.
    pub fn split(self) -> (Producer<Forward>, Consumer<Forward>) {
        pair(self.ring)
    }

    /// Splits the deque the other way around: the producer inserts at the
    /// front and the consumer removes at the back.
    pub fn split_rev(self) -> (Producer<Reverse>, Consumer<Reverse>) {
        pair(self.ring)
    }
}

impl fmt::Debug for RingDeque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingDeque")
            .field("capacity", &self.ring.capacity())
            .field("population", &self.ring.population())
            .field("space", &self.ring.space())
            .finish()
    }
}
