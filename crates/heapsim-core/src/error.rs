//! Error types for arena access and record stores.
//!
//! [`ArenaError`] is what the arena collaborator reports; [`StoreError`]
//! is the taxonomy surfaced by the array and vector stores, which wraps
//! arena failures it cannot classify more precisely.

use std::error::Error;
use std::fmt;

use crate::handle::Address;

/// Errors reported by an [`Arena`](crate::Arena) implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The allocation does not fit in the remaining arena capacity.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: u64,
        /// Bytes already allocated.
        used: u32,
        /// Total arena capacity in bytes.
        capacity: u32,
    },
    /// A read or write touched bytes outside the allocated region.
    OutOfBounds {
        /// Start of the access.
        address: Address,
        /// Width of the access in bytes.
        len: u32,
        /// High-water mark at the time of the access.
        used: u32,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                used,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, used {used} of {capacity} bytes"
                )
            }
            Self::OutOfBounds { address, len, used } => {
                write!(
                    f,
                    "arena access out of bounds: {len} bytes at {address}, allocated {used} bytes"
                )
            }
        }
    }
}

impl Error for ArenaError {}

/// Which kind of sequence an indexed access was made against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceKind {
    /// Fixed-length array record.
    Array,
    /// Growable vector record.
    Vector,
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array => write!(f, "array"),
            Self::Vector => write!(f, "vector"),
        }
    }
}

/// Errors from array and vector store operations.
///
/// Every store operation validates its preconditions before writing to the
/// arena, so an `Err` means the arena contents were left unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A creation argument was out of range (negative length or capacity,
    /// non-positive element size, or a record too large to address).
    InvalidArgument {
        /// Human-readable description.
        reason: String,
    },
    /// The address is negative or its header span runs past the arena's
    /// high-water mark.
    InvalidPointer {
        /// The rejected address.
        address: Address,
        /// Header bytes the record needs at that address.
        span: u32,
        /// Arena high-water mark.
        used: u32,
        /// Arena capacity.
        capacity: u32,
    },
    /// An index outside `0..length`.
    IndexOutOfBounds {
        /// The requested index.
        index: i32,
        /// Live element count.
        length: i32,
        /// Sequence the access was made against.
        kind: SequenceKind,
    },
    /// The record is in a state where the operation is undefined.
    IllegalState {
        /// Human-readable description.
        reason: String,
    },
    /// The arena rejected an allocation or access.
    Arena(ArenaError),
    /// The output sink refused a write while rendering.
    Format,
}

impl StoreError {
    /// Shorthand for [`StoreError::InvalidArgument`].
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`StoreError::IllegalState`].
    pub fn illegal_state(reason: impl Into<String>) -> Self {
        Self::IllegalState {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::InvalidPointer {
                address,
                span,
                used,
                capacity,
            } => {
                write!(
                    f,
                    "invalid pointer {address} (needs {span} bytes, arena used {used} of {capacity})"
                )
            }
            Self::IndexOutOfBounds {
                index,
                length,
                kind,
            } => {
                write!(
                    f,
                    "Index {index} out of bounds for {kind} of length {length}"
                )
            }
            Self::IllegalState { reason } => write!(f, "illegal state: {reason}"),
            Self::Arena(e) => write!(f, "arena error: {e}"),
            Self::Format => write!(f, "output sink rejected write"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for StoreError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<fmt::Error> for StoreError {
    fn from(_: fmt::Error) -> Self {
        Self::Format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_message_matches_console_wording() {
        let e = StoreError::IndexOutOfBounds {
            index: 3,
            length: 3,
            kind: SequenceKind::Array,
        };
        assert_eq!(e.to_string(), "Index 3 out of bounds for array of length 3");
    }

    #[test]
    fn invalid_pointer_reports_arena_usage() {
        let e = StoreError::InvalidPointer {
            address: Address(40),
            span: 12,
            used: 24,
            capacity: 64,
        };
        assert_eq!(
            e.to_string(),
            "invalid pointer 40 (needs 12 bytes, arena used 24 of 64)"
        );
    }

    #[test]
    fn arena_error_is_source() {
        let inner = ArenaError::CapacityExceeded {
            requested: 16,
            used: 60,
            capacity: 64,
        };
        let e = StoreError::from(inner.clone());
        let source = e.source().expect("wrapped arena error");
        assert_eq!(source.to_string(), inner.to_string());
    }

    #[test]
    fn fmt_error_maps_to_format() {
        assert_eq!(StoreError::from(fmt::Error), StoreError::Format);
    }
}
