//! Synchronization primitives, swapped for loom's checked versions when the
//! crate is built with `--cfg loom`.

#[cfg(not(loom))]
mod cell;

#[cfg(not(loom))]
pub(crate) use self::cell::UnsafeCell;
#[cfg(not(loom))]
pub(crate) use std::sync::atomic::*;
#[cfg(not(loom))]
pub(crate) use std::sync::Arc;

#[cfg(loom)]
pub(crate) use loom::cell::UnsafeCell;
#[cfg(loom)]
pub(crate) use loom::sync::atomic::*;
#[cfg(loom)]
pub(crate) use loom::sync::Arc;
