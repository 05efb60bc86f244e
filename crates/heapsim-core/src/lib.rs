//! Core types and traits for heapsim.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the arena and the record stores: raw arena
//! addresses, the typed handles layered on top of them, the [`Arena`]
//! collaborator trait, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handle;
pub mod traits;

pub use error::{ArenaError, SequenceKind, StoreError};
pub use handle::{Address, ArrayHandle, VectorHandle};
pub use traits::Arena;
