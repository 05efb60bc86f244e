//! heapsim: fixed-length arrays and growable vectors laid out as raw
//! records inside a single bump-allocated byte arena.
//!
//! This is the facade crate that re-exports the public API from the
//! heapsim sub-crates and adds [`Heap`], an owner that lends array and
//! vector store views over one arena.
//!
//! # Quick start
//!
//! ```rust
//! use heapsim::prelude::*;
//!
//! let mut heap = Heap::with_capacity(1024).unwrap();
//!
//! let a = heap.arrays().create(3, 4).unwrap();
//! for (i, v) in [10, 20, 30].into_iter().enumerate() {
//!     heap.arrays().set_int(a, i as i32, v).unwrap();
//! }
//! assert_eq!(heap.arrays().render(a).unwrap(), "[10, 20, 30]");
//!
//! let v = heap.vectors().create(0).unwrap();
//! for value in [5, 7, 9] {
//!     heap.vectors().append(v, value).unwrap();
//! }
//! assert_eq!(heap.vectors().render(v).unwrap(), "[5, 7, 9] (capacity: 3)");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `heapsim-core` | Addresses, handles, the `Arena` trait, errors |
//! | [`arena`] | `heapsim-arena` | `BumpArena` and its configuration |
//! | [`store`] | `heapsim-store` | `ArrayStore`, `VectorStore`, layouts, growth policy |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Bump arena and configuration (`heapsim-arena`).
pub use heapsim_arena as arena;

/// Addresses, handles, the arena trait and error types (`heapsim-core`).
pub use heapsim_core as types;

/// Array and vector record stores (`heapsim-store`).
///
/// Byte offsets of every record field live in [`store::layout`].
pub use heapsim_store as store;

use heapsim_arena::{ArenaConfig, BumpArena};
use heapsim_core::{Arena, ArenaError};
use heapsim_store::{ArrayStore, VectorStore};

/// An arena together with the stores that read and write records in it.
///
/// The stores are cheap views; [`arrays`](Heap::arrays) and
/// [`vectors`](Heap::vectors) borrow the arena for as long as the view is
/// held, so records of both kinds can be interleaved freely.
pub struct Heap<A = BumpArena> {
    arena: A,
}

impl Heap<BumpArena> {
    /// Heap over a fresh [`BumpArena`] built from `config`.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        Ok(Self::from_arena(BumpArena::new(config)?))
    }

    /// Heap over a default-configured arena of `capacity` bytes.
    pub fn with_capacity(capacity: u32) -> Result<Self, ArenaError> {
        Self::new(ArenaConfig::new(capacity))
    }
}

impl<A: Arena> Heap<A> {
    /// Heap over an existing arena.
    pub fn from_arena(arena: A) -> Self {
        Self { arena }
    }

    /// Array store view.
    pub fn arrays(&mut self) -> ArrayStore<&mut A> {
        ArrayStore::new(&mut self.arena)
    }

    /// Vector store view.
    pub fn vectors(&mut self) -> VectorStore<&mut A> {
        VectorStore::new(&mut self.arena)
    }

    /// The underlying arena.
    pub fn arena(&self) -> &A {
        &self.arena
    }

    /// Bytes allocated so far.
    pub fn used(&self) -> u32 {
        self.arena.used()
    }

    /// Total arena size in bytes.
    pub fn capacity(&self) -> u32 {
        self.arena.capacity()
    }

    /// Give the arena back.
    pub fn into_inner(self) -> A {
        self.arena
    }
}

/// Common imports for typical heapsim usage.
///
/// ```rust
/// use heapsim::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Heap;
    pub use heapsim_arena::{ArenaConfig, BumpArena, ByteOrder};
    pub use heapsim_core::{
        Address, Arena, ArenaError, ArrayHandle, SequenceKind, StoreError, VectorHandle,
    };
    pub use heapsim_store::{ArrayStore, VectorHeader, VectorStore};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use heapsim_test_utils::RecordingArena;

    #[test]
    fn views_share_the_arena() {
        let mut heap = Heap::with_capacity(256).unwrap();
        let a = heap.arrays().create(2, 4).unwrap();
        let v = heap.vectors().create(1).unwrap();
        heap.arrays().set_int(a, 1, 3).unwrap();
        heap.vectors().append(v, 4).unwrap();
        assert_eq!(heap.used(), 12 + 12 + 4);
        assert_eq!(heap.arrays().to_vec(a).unwrap(), vec![0, 3]);
        assert_eq!(heap.vectors().to_vec(v).unwrap(), vec![4]);
    }

    #[test]
    fn heap_over_custom_arena() {
        let arena = RecordingArena::new(BumpArena::with_capacity(64).unwrap());
        let mut heap = Heap::from_arena(arena);
        let _ = heap.vectors().create(0).unwrap();
        assert_eq!(heap.capacity(), 64);
        assert_eq!(heap.into_inner().alloc_count(), 1);
    }

    #[test]
    fn oversized_config_rejected() {
        assert!(Heap::with_capacity(u32::MAX).is_err());
    }
}
