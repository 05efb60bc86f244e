//! Monotonic bump-allocated byte arena for heapsim.
//!
//! [`BumpArena`] is a single contiguous `Vec<u8>` with a cursor. It
//! implements the [`Arena`](heapsim_core::Arena) contract the record
//! stores are written against:
//!
//! ```text
//! 0                     used                 capacity
//! |==== allocated ======|------ free --------|
//!                       ^ next alloc() returns here
//! ```
//!
//! Allocations are never freed and the cursor never moves backwards, so
//! the arena only grows until it is dropped as a whole.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bump;
pub mod config;

pub use bump::BumpArena;
pub use config::{ArenaConfig, ByteOrder};
pub use heapsim_core::ArenaError;
