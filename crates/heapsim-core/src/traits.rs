//! The arena collaborator contract.

use crate::error::ArenaError;
use crate::handle::Address;

/// A monotonic, byte-addressed memory region.
///
/// The record stores are written purely against this trait. Implementors
/// must behave as strict bump allocators: `alloc` never returns an address
/// below any earlier allocation's end, and nothing is ever freed. Every
/// pointer check in the stores compares against [`used`](Arena::used),
/// so reusing space would silently break them.
pub trait Arena {
    /// Reserve `size` bytes and return the address of the first one.
    fn alloc(&mut self, size: u32) -> Result<Address, ArenaError>;

    /// Read a 4-byte signed integer at `addr`.
    fn read_i32(&self, addr: Address) -> Result<i32, ArenaError>;

    /// Write a 4-byte signed integer at `addr`.
    fn write_i32(&mut self, addr: Address, value: i32) -> Result<(), ArenaError>;

    /// High-water mark: bytes allocated so far.
    fn used(&self) -> u32;

    /// Total backing size in bytes.
    fn capacity(&self) -> u32;
}

impl<A: Arena + ?Sized> Arena for &mut A {
    fn alloc(&mut self, size: u32) -> Result<Address, ArenaError> {
        (**self).alloc(size)
    }

    fn read_i32(&self, addr: Address) -> Result<i32, ArenaError> {
        (**self).read_i32(addr)
    }

    fn write_i32(&mut self, addr: Address, value: i32) -> Result<(), ArenaError> {
        (**self).write_i32(addr, value)
    }

    fn used(&self) -> u32 {
        (**self).used()
    }

    fn capacity(&self) -> u32 {
        (**self).capacity()
    }
}
