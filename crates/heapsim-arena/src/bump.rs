//! The bump allocator.
//!
//! A [`BumpArena`] is one pre-allocated `Vec<u8>` and a cursor. Every
//! allocation advances the cursor; nothing is ever handed back.

use heapsim_core::{Address, Arena, ArenaError};
use log::{trace, warn};

use crate::config::{ArenaConfig, ByteOrder};

/// Width of the integers the arena reads and writes.
const INT_BYTES: u32 = 4;

/// A single contiguous byte region with monotonic bump allocation.
///
/// The backing buffer is allocated to full capacity at construction and
/// never resized. Space is never reused, so an address returned by
/// [`alloc`](Arena::alloc) is always at or beyond the end of every earlier
/// allocation.
pub struct BumpArena {
    /// Backing storage, `capacity` bytes long.
    data: Vec<u8>,
    /// Bump pointer: first unallocated byte.
    cursor: u32,
    byte_order: ByteOrder,
}

impl BumpArena {
    /// Create an arena from a validated config.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let fill = if config.zero_fill {
            0
        } else {
            ArenaConfig::UNINIT_BYTE
        };
        Ok(Self {
            data: vec![fill; config.capacity as usize],
            cursor: 0,
            byte_order: config.byte_order,
        })
    }

    /// Create an arena of `capacity` bytes with default settings.
    pub fn with_capacity(capacity: u32) -> Result<Self, ArenaError> {
        Self::new(ArenaConfig::new(capacity))
    }

    /// Remaining free capacity in bytes.
    pub fn remaining(&self) -> u32 {
        self.capacity() - self.cursor
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len()
    }

    /// Integer encoding in use.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Borrow `len` allocated bytes starting at `addr`.
    pub fn bytes(&self, addr: Address, len: u32) -> Result<&[u8], ArenaError> {
        let (start, end) = self.span(addr, len)?;
        Ok(&self.data[start..end])
    }

    /// Resolve `[addr, addr + len)` to buffer indices, rejecting anything
    /// outside the allocated prefix.
    fn span(&self, addr: Address, len: u32) -> Result<(usize, usize), ArenaError> {
        let out_of_bounds = ArenaError::OutOfBounds {
            address: addr,
            len,
            used: self.cursor,
        };
        let start = u32::try_from(addr.get()).map_err(|_| out_of_bounds.clone())?;
        match start.checked_add(len) {
            Some(end) if end <= self.cursor => Ok((start as usize, end as usize)),
            _ => Err(out_of_bounds),
        }
    }
}

impl Arena for BumpArena {
    fn alloc(&mut self, size: u32) -> Result<Address, ArenaError> {
        let new_cursor = match self.cursor.checked_add(size) {
            Some(end) if end <= self.capacity() => end,
            _ => {
                warn!(
                    "arena allocation of {size} bytes rejected: {} of {} bytes used",
                    self.cursor,
                    self.capacity()
                );
                return Err(ArenaError::CapacityExceeded {
                    requested: u64::from(size),
                    used: self.cursor,
                    capacity: self.capacity(),
                });
            }
        };
        // capacity <= i32::MAX, so the old cursor is a valid address.
        let addr = Address(self.cursor as i32);
        self.cursor = new_cursor;
        trace!("arena alloc {size} bytes at {addr}, used {new_cursor}");
        Ok(addr)
    }

    fn read_i32(&self, addr: Address) -> Result<i32, ArenaError> {
        let (start, end) = self.span(addr, INT_BYTES)?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&self.data[start..end]);
        Ok(self.byte_order.decode(raw))
    }

    fn write_i32(&mut self, addr: Address, value: i32) -> Result<(), ArenaError> {
        let (start, end) = self.span(addr, INT_BYTES)?;
        self.data[start..end].copy_from_slice(&self.byte_order.encode(value));
        Ok(())
    }

    fn used(&self) -> u32 {
        self.cursor
    }

    fn capacity(&self) -> u32 {
        // Bounded by ArenaConfig::MAX_CAPACITY at construction.
        self.data.len() as u32
    }
}
