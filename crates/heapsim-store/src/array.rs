//! Fixed-length array records.
//!
//! An array record is `length` followed by `length * element_size` bytes
//! of element storage. The length is written once at creation and never
//! changes. Element bytes are left as the arena handed them out.

use std::fmt;

use heapsim_core::{Address, Arena, ArrayHandle, SequenceKind, StoreError};
use log::debug;

use crate::layout::{self, array::DATA_OFFSET, array::LENGTH_OFFSET, INT_BYTES};
use crate::{pointer, render};

/// View over an arena that creates and accesses array records.
///
/// The store holds no state of its own beyond the arena; two stores over
/// the same arena see the same records.
pub struct ArrayStore<A> {
    arena: A,
}

impl<A: Arena> ArrayStore<A> {
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

    /// Allocate an array of `length` elements of `element_size` bytes.
    ///
    /// Fails with [`StoreError::InvalidArgument`] for a negative length, a
    /// non-positive element size, or a record too large to address.
    pub fn create(&mut self, length: i32, element_size: i32) -> Result<ArrayHandle, StoreError> {
        if length < 0 {
            return Err(StoreError::invalid_argument(format!(
                "array length cannot be negative (got {length})"
            )));
        }
        if element_size <= 0 {
            return Err(StoreError::invalid_argument(format!(
                "element size must be positive (got {element_size})"
            )));
        }
        let total = i64::from(DATA_OFFSET) + i64::from(length) * i64::from(element_size);
        let total = u32::try_from(total)
            .ok()
            .filter(|&t| t <= i32::MAX as u32)
            .ok_or_else(|| {
                StoreError::invalid_argument(format!(
                    "array of {length} x {element_size} bytes is not addressable"
                ))
            })?;

        let addr = self.arena.alloc(total)?;
        self.arena
            .write_i32(layout::field(addr, LENGTH_OFFSET), length)?;
        debug!("created array at {addr}: length {length}, element size {element_size}");
        Ok(ArrayHandle::from_raw(addr, element_size.unsigned_abs()))
    }

    /// Element count.
    pub fn length(&self, array: ArrayHandle) -> Result<i32, StoreError> {
        self.check(array.address())?;
        self.read_length(array.address())
    }

    /// Element size in bytes, as recorded when the array was created.
    ///
    /// Fails with [`StoreError::IllegalState`] for an empty array, which has
    /// no elements to size.
    pub fn element_size(&self, array: ArrayHandle) -> Result<u32, StoreError> {
        self.check(array.address())?;
        if self.read_length(array.address())? == 0 {
            return Err(StoreError::illegal_state(
                "cannot determine element size for empty array",
            ));
        }
        Ok(array.element_size())
    }

    /// Read the 4-byte slot at `index`.
    pub fn get_int(&self, array: ArrayHandle, index: i32) -> Result<i32, StoreError> {
        let slot = self.int_slot(array, index)?;
        Ok(self.arena.read_i32(slot)?)
    }

    /// Overwrite the 4-byte slot at `index`.
    pub fn set_int(&mut self, array: ArrayHandle, index: i32, value: i32) -> Result<(), StoreError> {
        let slot = self.int_slot(array, index)?;
        self.arena.write_i32(slot, value)?;
        Ok(())
    }

    /// All int slots in index order.
    pub fn to_vec(&self, array: ArrayHandle) -> Result<Vec<i32>, StoreError> {
        let length = self.length(array)?;
        (0..length).map(|i| self.get_int(array, i)).collect()
    }

    /// Render as `[v0, v1, ...]`.
    pub fn render(&self, array: ArrayHandle) -> Result<String, StoreError> {
        let mut out = String::new();
        render::write_list(&mut out, self.to_vec(array)?)?;
        Ok(out)
    }

    /// Write the rendered array followed by a newline to `out`.
    ///
    /// Nothing is written if any element cannot be read.
    pub fn write_to<W: fmt::Write + ?Sized>(
        &self,
        array: ArrayHandle,
        out: &mut W,
    ) -> Result<(), StoreError> {
        let line = self.render(array)?;
        writeln!(out, "{line}")?;
        Ok(())
    }

    fn check(&self, addr: Address) -> Result<(), StoreError> {
        pointer::check(&self.arena, addr, DATA_OFFSET)
    }

    fn read_length(&self, addr: Address) -> Result<i32, StoreError> {
        Ok(self.arena.read_i32(layout::field(addr, LENGTH_OFFSET))?)
    }

    /// Validate pointer and index, then locate the int slot.
    fn int_slot(&self, array: ArrayHandle, index: i32) -> Result<Address, StoreError> {
        let addr = array.address();
        self.check(addr)?;
        let length = self.read_length(addr)?;
        if index < 0 || index >= length {
            return Err(StoreError::IndexOutOfBounds {
                index,
                length,
                kind: SequenceKind::Array,
            });
        }
        // Slots are 4 bytes wide regardless of element size. With elements
        // narrower than that, trailing slots can end past the record.
        let slot_end = (i64::from(index) + 1) * i64::from(INT_BYTES);
        let data_len = i64::from(length) * i64::from(array.element_size());
        if slot_end > data_len {
            return Err(StoreError::illegal_state(format!(
                "int slot {index} ends past the {data_len}-byte element area"
            )));
        }
        layout::slot(addr, DATA_OFFSET, index)
    }
}
