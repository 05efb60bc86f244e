//! Byte layouts of array and vector records.
//!
//! All integers are 4-byte signed values in the arena's byte order.

use heapsim_core::{Address, StoreError};

/// Width of every stored integer, and of every int element slot.
pub const INT_BYTES: i32 = 4;

/// Array record: `length` followed by packed elements.
pub mod array {
    /// Offset of the element count.
    pub const LENGTH_OFFSET: i32 = 0;
    /// Offset of the first element; also the header size.
    pub const DATA_OFFSET: i32 = 4;
}

/// Vector header: `length`, `capacity`, `data address` (or `-1`).
pub mod vector {
    /// Offset of the live element count.
    pub const LENGTH_OFFSET: i32 = 0;
    /// Offset of the slot count of the data block.
    pub const CAPACITY_OFFSET: i32 = 4;
    /// Offset of the data block address.
    pub const DATA_PTR_OFFSET: i32 = 8;
    /// Total header size. The header never moves.
    pub const HEADER_SIZE: i32 = 12;
    /// Bytes per element in the data block.
    pub const ELEMENT_SIZE: i32 = super::INT_BYTES;
}

/// Address of a header field at `offset` from `base`.
///
/// Only called after the pointer check has proven `base + header size`
/// lies inside the arena, so this cannot overflow.
pub(crate) fn field(base: Address, offset: i32) -> Address {
    Address(base.get() + offset)
}

/// Address of int slot `index` in a block whose slots start `first` bytes
/// past `base`.
pub(crate) fn slot(base: Address, first: i32, index: i32) -> Result<Address, StoreError> {
    let raw = i64::from(base.get()) + i64::from(first) + i64::from(index) * i64::from(INT_BYTES);
    i32::try_from(raw)
        .map(Address)
        .map_err(|_| StoreError::illegal_state(format!("slot {index} past {base} overflows")))
}
