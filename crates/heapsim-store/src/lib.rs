//! Fixed-length arrays and growable vectors encoded in arena bytes.
//!
//! Both stores are thin views over an [`Arena`](heapsim_core::Arena): all
//! state lives in the arena, the stores only know the byte layouts.
//!
//! ```text
//! Array record                     Vector header         data block
//! +--------+----+----+----+        +-----+-----+------+  +----+----+----+
//! | length | e0 | e1 | .. |        | len | cap | data |->| v0 | v1 | .. |
//! +--------+----+----+----+        +-----+-----+------+  +----+----+----+
//! 0        4                       0     4     8     12
//! ```
//!
//! Vector growth allocates a fresh, larger data block, copies the live
//! elements across and repoints the header. The old block stays in the
//! arena forever; the arena never reclaims anything.
//!
//! # Pointer validation
//!
//! There is no registry of live records. Every accessor only checks that
//! the address is non-negative and that the record header fits below the
//! arena's high-water mark. Passing a vector address to the array store
//! cannot happen through the typed handles, but a handle rebuilt with
//! `from_raw` from an unrelated offset is read as whatever bytes are there.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod growth;
pub mod layout;
mod pointer;
mod render;
pub mod vector;

pub use array::ArrayStore;
pub use growth::next_capacity;
pub use vector::{VectorHeader, VectorStore};
