//! Arena addresses and typed record handles.
//!
//! An [`Address`] is a raw byte offset into an arena. It carries no type
//! information: the bytes at an array address and at a vector address are
//! indistinguishable. [`ArrayHandle`] and [`VectorHandle`] wrap an address
//! in a record-specific type so the two can never be mixed up at compile
//! time, while leaving the in-arena byte layout untouched.

use std::fmt;

/// Byte offset into an arena.
///
/// Addresses are signed because the vector header encodes "no data block"
/// as `-1` and because callers may hand in arbitrary raw offsets; every
/// store accessor rejects negative or dangling addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub i32);

impl Address {
    /// The encoded "no block allocated" sentinel.
    pub const NULL: Address = Address(-1);

    /// Raw offset value.
    pub fn get(self) -> i32 {
        self.0
    }

    /// Whether this is the `-1` sentinel.
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// Address `bytes` past this one, or `None` on `i32` overflow.
    pub fn checked_offset(self, bytes: i32) -> Option<Address> {
        self.0.checked_add(bytes).map(Address)
    }

    /// Decode a stored slot, mapping the sentinel to `None`.
    pub fn from_slot(raw: i32) -> Option<Address> {
        if raw == Self::NULL.0 {
            None
        } else {
            Some(Address(raw))
        }
    }

    /// Encode an optional address as a stored slot.
    pub fn to_slot(addr: Option<Address>) -> i32 {
        addr.unwrap_or(Self::NULL).0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Address {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Handle to a fixed-length array record.
///
/// Besides the record address, the handle remembers the element size the
/// array was created with. The arena record itself only stores the
/// length, so the element size cannot be recovered from the bytes alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct ArrayHandle {
    address: Address,
    element_size: u32,
}

impl ArrayHandle {
    /// Rebuild a handle from a raw address and element size.
    ///
    /// Nothing is validated here; accessors check the address against the
    /// arena on every call.
    pub fn from_raw(address: Address, element_size: u32) -> Self {
        Self {
            address,
            element_size,
        }
    }

    /// Base address of the record.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Element size in bytes recorded at creation.
    pub fn element_size(&self) -> u32 {
        self.element_size
    }
}

impl fmt::Display for ArrayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Array(@{}, elem={})", self.address, self.element_size)
    }
}

/// Handle to a growable vector header.
///
/// The header never moves once created, so a handle stays valid across
/// growth events even though the data block it points to is replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct VectorHandle {
    address: Address,
}

impl VectorHandle {
    /// Rebuild a handle from a raw header address.
    pub fn from_raw(address: Address) -> Self {
        Self { address }
    }

    /// Address of the 12-byte header.
    pub fn address(&self) -> Address {
        self.address
    }
}

impl fmt::Display for VectorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(@{})", self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_round_trips_through_slot() {
        assert_eq!(Address::from_slot(-1), None);
        assert_eq!(Address::to_slot(None), -1);
        assert_eq!(Address::from_slot(48), Some(Address(48)));
        assert_eq!(Address::to_slot(Some(Address(48))), 48);
    }

    #[test]
    fn checked_offset_detects_overflow() {
        assert_eq!(Address(8).checked_offset(4), Some(Address(12)));
        assert_eq!(Address(i32::MAX).checked_offset(1), None);
    }

    #[test]
    fn array_handle_keeps_element_size() {
        let h = ArrayHandle::from_raw(Address(16), 8);
        assert_eq!(h.address(), Address(16));
        assert_eq!(h.element_size(), 8);
        assert_eq!(h.to_string(), "Array(@16, elem=8)");
    }

    #[test]
    fn vector_handle_display() {
        let h = VectorHandle::from_raw(Address(0));
        assert_eq!(h.to_string(), "Vector(@0)");
        assert!(!h.address().is_null());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn slot_encoding_round_trips(
                raw in proptest::option::of(any::<i32>().prop_filter("sentinel", |&v| v != -1)),
            ) {
                let addr = raw.map(Address);
                prop_assert_eq!(Address::from_slot(Address::to_slot(addr)), addr);
            }

            #[test]
            fn checked_offset_matches_wide_sum(base in any::<i32>(), bytes in any::<i32>()) {
                let wide = i64::from(base) + i64::from(bytes);
                let expected = i32::try_from(wide).ok().map(Address);
                prop_assert_eq!(Address(base).checked_offset(bytes), expected);
            }
        }
    }
}
