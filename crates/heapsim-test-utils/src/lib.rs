//! Test utilities and mock arenas for heapsim development.
//!
//! Provides wrappers around any [`Arena`] that observe or perturb its
//! behaviour: [`RecordingArena`] logs every allocation, and
//! [`FailingArena`] starts refusing allocations after a fixed count.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use heapsim_core::{Address, Arena, ArenaError};

/// Arena wrapper that records every successful allocation.
///
/// Lets tests see which blocks a vector has allocated over its lifetime,
/// including the ones orphaned by growth.
pub struct RecordingArena<A> {
    inner: A,
    allocations: Vec<(Address, u32)>,
}

impl<A: Arena> RecordingArena<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            allocations: Vec::new(),
        }
    }

    /// `(address, size)` of every allocation so far, in order.
    pub fn allocations(&self) -> &[(Address, u32)] {
        &self.allocations
    }

    /// Number of allocations performed.
    pub fn alloc_count(&self) -> usize {
        self.allocations.len()
    }

    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: Arena> Arena for RecordingArena<A> {
    fn alloc(&mut self, size: u32) -> Result<Address, ArenaError> {
        let addr = self.inner.alloc(size)?;
        self.allocations.push((addr, size));
        Ok(addr)
    }

    fn read_i32(&self, addr: Address) -> Result<i32, ArenaError> {
        self.inner.read_i32(addr)
    }

    fn write_i32(&mut self, addr: Address, value: i32) -> Result<(), ArenaError> {
        self.inner.write_i32(addr, value)
    }

    fn used(&self) -> u32 {
        self.inner.used()
    }

    fn capacity(&self) -> u32 {
        self.inner.capacity()
    }
}

/// Arena wrapper whose allocations fail after the first `allowed`.
///
/// Failures are reported as [`ArenaError::CapacityExceeded`] even when the
/// inner arena has room, so tests can hit exhaustion at an exact point.
pub struct FailingArena<A> {
    inner: A,
    allowed: usize,
    performed: usize,
}

impl<A: Arena> FailingArena<A> {
    pub fn new(inner: A, allowed: usize) -> Self {
        Self {
            inner,
            allowed,
            performed: 0,
        }
    }
}

impl<A: Arena> Arena for FailingArena<A> {
    fn alloc(&mut self, size: u32) -> Result<Address, ArenaError> {
        if self.performed >= self.allowed {
            return Err(ArenaError::CapacityExceeded {
                requested: u64::from(size),
                used: self.inner.used(),
                capacity: self.inner.capacity(),
            });
        }
        self.performed += 1;
        self.inner.alloc(size)
    }

    fn read_i32(&self, addr: Address) -> Result<i32, ArenaError> {
        self.inner.read_i32(addr)
    }

    fn write_i32(&mut self, addr: Address, value: i32) -> Result<(), ArenaError> {
        self.inner.write_i32(addr, value)
    }

    fn used(&self) -> u32 {
        self.inner.used()
    }

    fn capacity(&self) -> u32 {
        self.inner.capacity()
    }
}
