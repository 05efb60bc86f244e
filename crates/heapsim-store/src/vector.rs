//! Growable vector records.
//!
//! A vector is a fixed 12-byte header pointing at a separately allocated
//! data block of `capacity` int slots. Appending to a full vector grows it:
//! a new block is allocated, the live elements are copied across and the
//! header is repointed. Superseded blocks are never reclaimed.

use std::fmt;

use heapsim_core::{Address, Arena, ArenaError, SequenceKind, StoreError, VectorHandle};
use log::debug;

use crate::growth::next_capacity;
use crate::layout::{
    self,
    vector::{CAPACITY_OFFSET, DATA_PTR_OFFSET, ELEMENT_SIZE, HEADER_SIZE, LENGTH_OFFSET},
};
use crate::{pointer, render};

/// Decoded vector header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorHeader {
    /// Live element count.
    pub length: i32,
    /// Slot count of the data block.
    pub capacity: i32,
    /// Data block address; `None` when stored as the `-1` sentinel.
    pub data: Option<Address>,
}

/// View over an arena that creates and accesses vector records.
pub struct VectorStore<A> {
    arena: A,
}

impl<A: Arena> VectorStore<A> {
    /// Wrap an arena (owned, or borrowed via `&mut`).
    pub fn new(arena: A) -> Self {
        Self { arena }
    }

    /// The underlying arena.
    pub fn arena(&self) -> &A {
        &self.arena
    }

    /// Give the arena back.
    pub fn into_inner(self) -> A {
        self.arena
    }

    /// Allocate an empty vector with room for `initial_capacity` elements.
    ///
    /// With a zero capacity no data block is allocated and the header
    /// stores the `-1` sentinel. Free space for the header and the data
    /// block is checked up front, so on a strict bump arena a capacity
    /// failure allocates neither. An arena that refuses the data block for
    /// another reason leaves the header bytes allocated but unreachable.
    pub fn create(&mut self, initial_capacity: i32) -> Result<VectorHandle, StoreError> {
        if initial_capacity < 0 {
            return Err(StoreError::invalid_argument(format!(
                "initial capacity cannot be negative (got {initial_capacity})"
            )));
        }
        let data_bytes = block_bytes(initial_capacity).ok_or_else(|| {
            StoreError::invalid_argument(format!(
                "initial capacity {initial_capacity} is not addressable"
            ))
        })?;
        let needed = u64::from(HEADER_SIZE.unsigned_abs()) + u64::from(data_bytes);
        let free = self.arena.capacity().saturating_sub(self.arena.used());
        if needed > u64::from(free) {
            return Err(ArenaError::CapacityExceeded {
                requested: needed,
                used: self.arena.used(),
                capacity: self.arena.capacity(),
            }
            .into());
        }

        let addr = self.arena.alloc(HEADER_SIZE.unsigned_abs())?;
        let data = if initial_capacity > 0 {
            Some(self.arena.alloc(data_bytes)?)
        } else {
            None
        };
        self.write_header(
            addr,
            VectorHeader {
                length: 0,
                capacity: initial_capacity,
                data,
            },
        )?;
        debug!("created vector at {addr}: capacity {initial_capacity}, data {data:?}");
        Ok(VectorHandle::from_raw(addr))
    }

    /// Live element count.
    pub fn length(&self, vector: VectorHandle) -> Result<i32, StoreError> {
        self.check(vector.address())?;
        self.read_field(vector.address(), LENGTH_OFFSET)
    }

    /// Slot count of the current data block.
    pub fn capacity(&self, vector: VectorHandle) -> Result<i32, StoreError> {
        self.check(vector.address())?;
        self.read_field(vector.address(), CAPACITY_OFFSET)
    }

    /// Address of the current data block, `None` before the first one.
    pub fn data_address(&self, vector: VectorHandle) -> Result<Option<Address>, StoreError> {
        self.check(vector.address())?;
        Ok(Address::from_slot(
            self.read_field(vector.address(), DATA_PTR_OFFSET)?,
        ))
    }

    /// All three header fields at once.
    pub fn header(&self, vector: VectorHandle) -> Result<VectorHeader, StoreError> {
        self.check(vector.address())?;
        self.read_header(vector.address())
    }

    /// Append `value`, growing the data block first if it is full.
    pub fn append(&mut self, vector: VectorHandle, value: i32) -> Result<(), StoreError> {
        let addr = vector.address();
        self.check(addr)?;
        let mut header = self.read_header(addr)?;
        if header.length >= header.capacity {
            header = self.grow(addr, header)?;
        }
        let data = header.data.ok_or_else(null_data)?;
        let new_length = header
            .length
            .checked_add(1)
            .ok_or_else(|| StoreError::illegal_state("vector length overflow"))?;
        let slot = layout::slot(data, 0, header.length)?;
        self.arena.write_i32(slot, value)?;
        self.arena
            .write_i32(layout::field(addr, LENGTH_OFFSET), new_length)?;
        Ok(())
    }

    /// Read element `index`.
    pub fn get(&self, vector: VectorHandle, index: i32) -> Result<i32, StoreError> {
        let slot = self.element_slot(vector, index)?;
        Ok(self.arena.read_i32(slot)?)
    }

    /// Overwrite element `index`.
    pub fn set(&mut self, vector: VectorHandle, index: i32, value: i32) -> Result<(), StoreError> {
        let slot = self.element_slot(vector, index)?;
        self.arena.write_i32(slot, value)?;
        Ok(())
    }

    /// Live elements in index order.
    pub fn to_vec(&self, vector: VectorHandle) -> Result<Vec<i32>, StoreError> {
        let length = self.length(vector)?;
        (0..length).map(|i| self.get(vector, i)).collect()
    }

    /// Render as `[v0, v1, ...] (capacity: C)`.
    pub fn render(&self, vector: VectorHandle) -> Result<String, StoreError> {
        let values = self.to_vec(vector)?;
        let capacity = self.capacity(vector)?;
        let mut out = String::new();
        render::write_list(&mut out, values)?;
        fmt::Write::write_fmt(&mut out, format_args!(" (capacity: {capacity})"))?;
        Ok(out)
    }

    /// Write the rendered vector followed by a newline to `out`.
    pub fn write_to<W: fmt::Write + ?Sized>(
        &self,
        vector: VectorHandle,
        out: &mut W,
    ) -> Result<(), StoreError> {
        let line = self.render(vector)?;
        writeln!(out, "{line}")?;
        Ok(())
    }

    /// Replace the data block with one of the next capacity.
    ///
    /// Everything that can fail is checked before the first allocation, so
    /// an error leaves both the header and the arena untouched.
    fn grow(&mut self, addr: Address, header: VectorHeader) -> Result<VectorHeader, StoreError> {
        if header.length < 0 || header.length > header.capacity {
            return Err(StoreError::illegal_state(format!(
                "vector length {} outside capacity {}",
                header.length, header.capacity
            )));
        }
        let old_data = match header.data {
            Some(data) => Some(data),
            None if header.length > 0 => return Err(null_data()),
            None => None,
        };
        if let Some(data) = old_data {
            self.check_block(data, header.length)?;
        }

        let exceeded = |requested: u64| ArenaError::CapacityExceeded {
            requested,
            used: self.arena.used(),
            capacity: self.arena.capacity(),
        };
        let new_capacity = next_capacity(header.capacity)
            .ok_or_else(|| exceeded(u64::from(u32::MAX) + 1))?;
        let bytes = block_bytes(new_capacity)
            .ok_or_else(|| exceeded(i64::from(new_capacity).unsigned_abs() * 4))?;

        let new_data = self.arena.alloc(bytes)?;
        if let Some(old) = old_data {
            for i in 0..header.length {
                let value = self.arena.read_i32(layout::slot(old, 0, i)?)?;
                self.arena.write_i32(layout::slot(new_data, 0, i)?, value)?;
            }
        }

        let grown = VectorHeader {
            length: header.length,
            capacity: new_capacity,
            data: Some(new_data),
        };
        self.arena
            .write_i32(layout::field(addr, CAPACITY_OFFSET), grown.capacity)?;
        self.arena.write_i32(
            layout::field(addr, DATA_PTR_OFFSET),
            Address::to_slot(grown.data),
        )?;
        let orphaned = old_data.map_or(0, |_| i64::from(header.capacity) * i64::from(ELEMENT_SIZE));
        debug!(
            "grew vector at {addr}: capacity {} -> {}, data {:?} -> {new_data}, {orphaned} bytes orphaned",
            header.capacity, new_capacity, old_data
        );
        Ok(grown)
    }

    fn check(&self, addr: Address) -> Result<(), StoreError> {
        pointer::check(&self.arena, addr, HEADER_SIZE)
    }

    /// Reject a data block whose first `slots` ints are not all allocated.
    fn check_block(&self, data: Address, slots: i32) -> Result<(), StoreError> {
        let len = i64::from(slots) * i64::from(ELEMENT_SIZE);
        let end = i64::from(data.get()) + len;
        if data.get() < 0 || end > i64::from(self.arena.used()) {
            return Err(ArenaError::OutOfBounds {
                address: data,
                len: u32::try_from(len).unwrap_or(u32::MAX),
                used: self.arena.used(),
            }
            .into());
        }
        Ok(())
    }

    fn read_field(&self, addr: Address, offset: i32) -> Result<i32, StoreError> {
        Ok(self.arena.read_i32(layout::field(addr, offset))?)
    }

    fn read_header(&self, addr: Address) -> Result<VectorHeader, StoreError> {
        Ok(VectorHeader {
            length: self.read_field(addr, LENGTH_OFFSET)?,
            capacity: self.read_field(addr, CAPACITY_OFFSET)?,
            data: Address::from_slot(self.read_field(addr, DATA_PTR_OFFSET)?),
        })
    }

    fn write_header(&mut self, addr: Address, header: VectorHeader) -> Result<(), StoreError> {
        self.arena
            .write_i32(layout::field(addr, LENGTH_OFFSET), header.length)?;
        self.arena
            .write_i32(layout::field(addr, CAPACITY_OFFSET), header.capacity)?;
        self.arena.write_i32(
            layout::field(addr, DATA_PTR_OFFSET),
            Address::to_slot(header.data),
        )?;
        Ok(())
    }

    /// Validate pointer and index, then locate the element slot.
    fn element_slot(&self, vector: VectorHandle, index: i32) -> Result<Address, StoreError> {
        let addr = vector.address();
        self.check(addr)?;
        let length = self.read_field(addr, LENGTH_OFFSET)?;
        if index < 0 || index >= length {
            return Err(StoreError::IndexOutOfBounds {
                index,
                length,
                kind: SequenceKind::Vector,
            });
        }
        let data = Address::from_slot(self.read_field(addr, DATA_PTR_OFFSET)?)
            .ok_or_else(null_data)?;
        layout::slot(data, 0, index)
    }
}

/// Bytes needed for a data block of `capacity` slots, if representable.
fn block_bytes(capacity: i32) -> Option<u32> {
    u32::try_from(capacity)
        .ok()?
        .checked_mul(ELEMENT_SIZE.unsigned_abs())
        .filter(|&b| b <= i32::MAX as u32)
}

fn null_data() -> StoreError {
    StoreError::illegal_state("vector data pointer is null")
}
