use crate::cursor::AtomicCursor;
use crate::loom::UnsafeCell;
use std::mem::MaybeUninit;
use std::sync::atomic::Ordering;

// tail always points at free space, head at the oldest occupied slot, except
// when the ring is empty (head == tail). One slot is never written so that a
// full ring (tail one slot behind head) stays distinguishable from an empty
// one; the usable capacity is therefore `cap - 1`.
//
// Cursor discipline: an operation loads the cursor it owns with `Relaxed`
// (nothing else writes it) and publishes it with `Release`; the occupancy
// queries load both cursors with `Acquire`, which is where a reader
// synchronizes with the other side's slot writes.
pub(crate) struct RawRing {
    buf: Box<[UnsafeCell<MaybeUninit<u8>>]>,
    cap: usize,
    head: AtomicCursor,
    tail: AtomicCursor,
}

unsafe impl Send for RawRing {}
unsafe impl Sync for RawRing {}

impl RawRing {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        assert!(cap >= 1, "ring capacity must be at least 1");

        let buf = (0..cap)
            .map(|_| UnsafeCell::new(MaybeUninit::uninit()))
            .collect();
        Self {
            buf,
            cap,
            head: Default::default(),
            tail: Default::default(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn usable(&self) -> usize {
        self.cap - 1
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.load(Ordering::Acquire) == self.tail.load(Ordering::Acquire)
    }

    /// Forward distance from `head` to `tail`.
    pub(crate) fn population(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        if tail >= head {
            tail - head
        } else {
            (self.cap - head) + tail
        }
    }

    /// Slots that can still be appended. One less than the physically free
    /// count: the reserved slot keeps full and empty states apart.
    pub(crate) fn space(&self) -> usize {
        self.cap - 1 - self.population()
    }

    /// Discards all occupied slots by parking `tail` on `head`. Storage
    /// content is untouched. Callers must have exclusive access: this writes
    /// a cursor that is otherwise owned by one side of a split.
    pub(crate) fn flush(&self) {
        let head = self.head.load(Ordering::Acquire);
        self.tail.store(head, Ordering::Release);
    }

    /// Empties the ring and parks both cursors at `offset`.
    pub(crate) fn reset_at(&self, offset: usize) {
        debug_assert!(offset < self.cap);
        self.head.store(offset, Ordering::Release);
        self.tail.store(offset, Ordering::Release);
    }

    /// Writes `item` at `tail`, then advances `tail` one slot.
    ///
    /// # Safety
    ///
    /// `space() >= 1`, and the caller is the only context mutating `tail`.
    /// The caller's occupancy check is also what synchronizes it with the
    /// consumer's `head` updates.
    pub(crate) unsafe fn push_back(&self, item: u8) {
        debug_assert!(self.space() >= 1);
        let tail = self.tail.load(Ordering::Relaxed);
        self.slot_write(tail, item);
        self.tail.store(self.next_slot(tail), Ordering::Release);
    }

    /// Retreats `head` one slot, then writes `item` there. Unlike
    /// `push_back`, the cursor arithmetic comes first: `head` must always
    /// land on an occupied slot, while `tail` always rests on free space.
    ///
    /// # Safety
    ///
    /// `space() >= 1`, and the caller is the only context mutating `head`.
    pub(crate) unsafe fn push_front(&self, item: u8) {
        debug_assert!(self.space() >= 1);
        let head = self.head.load(Ordering::Relaxed);
        let slot = self.prev_slot(head);
        self.slot_write(slot, item);
        self.head.store(slot, Ordering::Release);
    }

    /// Retreats `tail` one slot and returns the byte there (the newest).
    ///
    /// # Safety
    ///
    /// `population() >= 1`, and the caller is the only context mutating
    /// `tail`. The slot read after the cursor store cannot be written
    /// concurrently: the only insertion that could reach it is a
    /// `push_front` whose `space() >= 1` precondition rules the state out.
    pub(crate) unsafe fn pop_back(&self) -> u8 {
        debug_assert!(self.population() >= 1);
        let tail = self.tail.load(Ordering::Relaxed);
        let slot = self.prev_slot(tail);
        self.tail.store(slot, Ordering::Release);
        self.slot_read(slot)
    }

    /// Returns the byte at `head`, then advances `head` one slot.
    ///
    /// # Safety
    ///
    /// `population() >= 1`, and the caller is the only context mutating
    /// `head`.
    pub(crate) unsafe fn pop_front(&self) -> u8 {
        debug_assert!(self.population() >= 1);
        let head = self.head.load(Ordering::Relaxed);
        let item = self.slot_read(head);
        self.head.store(self.next_slot(head), Ordering::Release);
        item
    }

    /// Reads the byte `index` steps back from the newest element.
    ///
    /// # Safety
    ///
    /// `index < population()`, and no other context may be mutating the
    /// addressed slot (see the crate-level access contract).
    pub(crate) unsafe fn peek_back(&self, index: usize) -> u8 {
        debug_assert!(index < self.population());
        let tail = self.tail.load(Ordering::Acquire);
        self.slot_read(self.back_slot(tail, index))
    }

    /// Reads the byte `index` steps forward from the oldest element.
    ///
    /// # Safety
    ///
    /// `index < population()`, and no other context may be mutating the
    /// addressed slot.
    pub(crate) unsafe fn peek_front(&self, index: usize) -> u8 {
        debug_assert!(index < self.population());
        let head = self.head.load(Ordering::Acquire);
        self.slot_read(self.front_slot(head, index))
    }

    /// Overwrites the byte `index` steps back from the newest element.
    /// Cursors and population are unchanged.
    ///
    /// # Safety
    ///
    /// `index < population()`, and no other context may be accessing the
    /// addressed slot.
    pub(crate) unsafe fn place_back(&self, item: u8, index: usize) {
        debug_assert!(index < self.population());
        let tail = self.tail.load(Ordering::Acquire);
        self.slot_write(self.back_slot(tail, index), item);
    }

    /// Overwrites the byte `index` steps forward from the oldest element.
    ///
    /// # Safety
    ///
    /// `index < population()`, and no other context may be accessing the
    /// addressed slot.
    pub(crate) unsafe fn place_front(&self, item: u8, index: usize) {
        debug_assert!(index < self.population());
        let head = self.head.load(Ordering::Acquire);
        self.slot_write(self.front_slot(head, index), item);
    }

    /// Next slot clockwise from `i`, wrapping at the storage boundary.
    fn next_slot(&self, i: usize) -> usize {
        debug_assert!(i < self.cap);
        if i == self.cap - 1 {
            0
        } else {
            i + 1
        }
    }

    /// Previous slot, wrapping through the end of storage.
    fn prev_slot(&self, i: usize) -> usize {
        debug_assert!(i < self.cap);
        if i == 0 {
            self.cap - 1
        } else {
            i - 1
        }
    }

    /// Physical slot of the element `index` steps forward from `head`.
    /// Wraps across the storage boundary at most once.
    fn front_slot(&self, head: usize, index: usize) -> usize {
        debug_assert!(head < self.cap && index < self.cap);
        // slots from head (inclusive) up to the boundary
        let run = self.cap - head;
        if index < run {
            head + index
        } else {
            index - run
        }
    }

    /// Physical slot of the element `index` steps back from `tail`
    /// (exclusive), i.e. offset 0 is the newest element.
    fn back_slot(&self, tail: usize, index: usize) -> usize {
        debug_assert!(tail < self.cap && index < self.cap);
        let last = self.prev_slot(tail);
        if index <= last {
            last - index
        } else {
            self.cap - (index - last)
        }
    }

    unsafe fn slot_read(&self, idx: usize) -> u8 {
        debug_assert!(idx < self.cap);
        let cell = self.buf.get_unchecked(idx);
        cell.with(|inner| inner.read().assume_init())
    }

    unsafe fn slot_write(&self, idx: usize, value: u8) {
        debug_assert!(idx < self.cap);
        let cell = self.buf.get_unchecked(idx);
        cell.with_mut(|ptr| ptr.write(MaybeUninit::new(value)));
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::*;

    #[test]
    fn wrap_select_hits_both_boundaries() {
        let r = RawRing::with_capacity(4);
        assert_eq!(r.next_slot(3), 0);
        assert_eq!(r.next_slot(0), 1);
        assert_eq!(r.prev_slot(0), 3);
        assert_eq!(r.prev_slot(1), 0);
    }

    #[test]
    fn population_covers_the_wrapped_region() {
        let r = RawRing::with_capacity(8);
        r.reset_at(5);
        unsafe {
            r.push_back(1);
            r.push_back(2);
            r.push_back(3);
            r.push_back(4);
        }
        assert_eq!(r.population(), 4);
        assert_eq!(r.space(), 3);
        assert!(!r.is_empty());
    }

    #[test]
    fn offset_mapping_wraps_once_in_both_directions() {
        let r = RawRing::with_capacity(4);
        r.reset_at(3);
        unsafe {
            r.push_back(10); // slot 3
            r.push_back(20); // slot 0
            r.push_back(30); // slot 1
            assert_eq!(r.peek_front(0), 10);
            assert_eq!(r.peek_front(1), 20);
            assert_eq!(r.peek_front(2), 30);
            assert_eq!(r.peek_back(0), 30);
            assert_eq!(r.peek_back(1), 20);
            assert_eq!(r.peek_back(2), 10);
        }
    }

    #[test]
    fn back_mapping_with_tail_at_origin() {
        // tail wrapped to 0, so the newest element sits in the last slot
        let r = RawRing::with_capacity(4);
        r.reset_at(1);
        unsafe {
            r.push_back(7);
            r.push_back(8);
            r.push_back(9);
            assert_eq!(r.peek_back(0), 9);
            assert_eq!(r.peek_back(1), 8);
            assert_eq!(r.peek_back(2), 7);
        }
    }

    #[test]
    fn head_retreats_into_the_last_slot() {
        let r = RawRing::with_capacity(4);
        unsafe {
            r.push_front(42); // head wraps from 0 to 3
            assert_eq!(r.population(), 1);
            assert_eq!(r.peek_front(0), 42);
            assert_eq!(r.pop_back(), 42);
        }
        assert!(r.is_empty());
    }

    #[test]
    fn flush_discards_everything() {
        let r = RawRing::with_capacity(4);
        unsafe {
            r.push_back(1);
            r.push_back(2);
        }
        r.flush();
        assert!(r.is_empty());
        assert_eq!(r.population(), 0);
        assert_eq!(r.space(), 3);
    }
}
