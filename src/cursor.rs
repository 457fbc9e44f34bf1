//! The head/tail cursor cells.
//!
//! With the `cache-padded` feature enabled, each cursor occupies its own
//! cache line so the two sides of a split ring do not false-share.

#[cfg(feature = "cache-padded")]
mod inner {
    use crate::loom::AtomicUsize;
    use cache_padded::CachePadded;
    use core::ops::Deref;

    #[derive(Default)]
    pub(crate) struct AtomicCursor {
        inner: CachePadded<AtomicUsize>,
    }

    impl Deref for AtomicCursor {
        type Target = AtomicUsize;

        fn deref(&self) -> &Self::Target {
            &self.inner
        }
    }
}

#[cfg(not(feature = "cache-padded"))]
mod inner {
    use crate::loom::AtomicUsize;
    use core::ops::Deref;

    #[derive(Default)]
    pub(crate) struct AtomicCursor {
        inner: AtomicUsize,
    }

    impl Deref for AtomicCursor {
        type Target = AtomicUsize;

        fn deref(&self) -> &Self::Target {
            &self.inner
        }
    }
}

pub(crate) use self::inner::AtomicCursor;
