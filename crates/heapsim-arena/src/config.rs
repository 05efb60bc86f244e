//! Arena configuration parameters.

use heapsim_core::ArenaError;

/// Byte order used to encode 4-byte integers in arena memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    pub(crate) fn encode(self, value: i32) -> [u8; 4] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }

    pub(crate) fn decode(self, bytes: [u8; 4]) -> i32 {
        match self {
            Self::Little => i32::from_le_bytes(bytes),
            Self::Big => i32::from_be_bytes(bytes),
        }
    }
}

/// Configuration for a [`BumpArena`](crate::BumpArena).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// Total size of the backing buffer in bytes.
    ///
    /// Default: 65_536. Must fit in a non-negative `i32`, since addresses
    /// are signed 4-byte offsets.
    pub capacity: u32,

    /// Integer encoding for `read_i32` / `write_i32`.
    pub byte_order: ByteOrder,

    /// Hand out zeroed memory.
    ///
    /// Default: `true`. With `false` the backing buffer is filled with
    /// [`ArenaConfig::UNINIT_BYTE`] instead, which makes reads of
    /// never-written record slots easy to spot in tests and dumps.
    pub zero_fill: bool,
}

impl ArenaConfig {
    /// Default capacity: 64 KiB.
    pub const DEFAULT_CAPACITY: u32 = 64 * 1024;

    /// Fill byte for the backing buffer when `zero_fill` is off.
    pub const UNINIT_BYTE: u8 = 0xCD;

    /// Largest capacity whose every offset is a valid `i32` address.
    pub const MAX_CAPACITY: u32 = i32::MAX as u32;

    /// Create a config with the given capacity and default settings.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            byte_order: ByteOrder::default(),
            zero_fill: true,
        }
    }

    /// Use the given integer byte order.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Enable or disable zeroing of fresh allocations.
    pub fn with_zero_fill(mut self, zero_fill: bool) -> Self {
        self.zero_fill = zero_fill;
        self
    }

    /// Check that every offset in the arena is addressable.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.capacity > Self::MAX_CAPACITY {
            return Err(ArenaError::CapacityExceeded {
                requested: u64::from(self.capacity),
                used: 0,
                capacity: Self::MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_64k() {
        let config = ArenaConfig::default();
        assert_eq!(config.capacity, 65_536);
        assert_eq!(config.byte_order, ByteOrder::Little);
        assert!(config.zero_fill);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = ArenaConfig::new(128)
            .with_byte_order(ByteOrder::Big)
            .with_zero_fill(false);
        assert_eq!(config.capacity, 128);
        assert_eq!(config.byte_order, ByteOrder::Big);
        assert!(!config.zero_fill);
    }

    #[test]
    fn validate_rejects_unaddressable_capacity() {
        assert!(ArenaConfig::new(ArenaConfig::MAX_CAPACITY).validate().is_ok());
        let result = ArenaConfig::new(u32::MAX).validate();
        assert!(matches!(result, Err(ArenaError::CapacityExceeded { .. })));
    }

    #[test]
    fn byte_orders_differ_on_the_wire() {
        assert_eq!(ByteOrder::Little.encode(1), [1, 0, 0, 0]);
        assert_eq!(ByteOrder::Big.encode(1), [0, 0, 0, 1]);
        assert_eq!(ByteOrder::Big.decode([0xff, 0xff, 0xff, 0xfe]), -2);
    }
}
