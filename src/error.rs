use std::fmt;

/// Returned by the checked insertion methods when no usable slot is left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PushError {
    Full,
}

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            PushError::Full => write!(f, "push failed because the ring is full"),
        }
    }
}

impl std::error::Error for PushError {}

/// Returned by the checked removal methods on an empty ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopError {
    Empty,
}

impl fmt::Display for PopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            PopError::Empty => write!(f, "pop failed because the ring is empty"),
        }
    }
}

impl std::error::Error for PopError {}

/// Returned by the in-place overwrite methods for an offset that does not
/// land on an occupied slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceError {
    OutOfRange,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            PlaceError::OutOfRange => write!(f, "offset is outside the occupied region"),
        }
    }
}

impl std::error::Error for PlaceError {}
