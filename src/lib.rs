//! Fixed-capacity double-ended ring buffer for lock-free hand-off between
//! two execution contexts.
//!
//! [`RingDeque`] is the owning form: constant-time push, pop, peek, and
//! in-place overwrite at either end. Splitting it yields a
//! [`Producer`]/[`Consumer`] pair over the same storage, one cursor per
//! half, which moves bytes between two threads, or between an interrupt
//! handler and a main loop, without locks and without waiting.
//!
//! ```
//! use ringdeq::RingDeque;
//!
//! let (mut tx, mut rx) = RingDeque::new(64).split();
//!
//! let feeder = std::thread::spawn(move || {
//!     for b in 0..10u8 {
//!         while tx.push(b).is_err() {
//!             std::hint::spin_loop();
//!         }
//!     }
//! });
//!
//! for expected in 0..10u8 {
//!     let got = loop {
//!         match rx.pop() {
//!             Ok(b) => break b,
//!             Err(_) => std::hint::spin_loop(),
//!         }
//!     };
//!     assert_eq!(got, expected);
//! }
//!
//! feeder.join().unwrap();
//! ```

mod cursor;
mod deque;
pub mod error;
mod loom;
mod raw;
mod spsc;

pub use deque::RingDeque;
pub use spsc::{Consumer, Direction, Forward, Producer, Reverse};
