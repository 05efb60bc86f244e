//! Benchmark profiles for heapsim record stores.
//!
//! - [`arena_for_appends`]: an arena sized for `n` appends from empty,
//!   including every superseded data block.
//! - [`filled_vector`]: a vector pre-populated with `0..n`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use heapsim_arena::BumpArena;
use heapsim_core::{StoreError, VectorHandle};
use heapsim_store::{next_capacity, VectorStore};

/// Total bytes consumed by a vector header plus every data block allocated
/// while appending `n` elements to an initially empty vector.
pub fn bytes_for_appends(n: u32) -> u32 {
    let mut capacity = 0i32;
    let mut total = 12u32;
    while (capacity as u32) < n {
        capacity = next_capacity(capacity).unwrap_or(i32::MAX);
        total = total.saturating_add((capacity as u32).saturating_mul(4));
    }
    total
}

/// A bump arena just large enough for `n` appends from empty.
pub fn arena_for_appends(n: u32) -> Result<BumpArena, StoreError> {
    Ok(BumpArena::with_capacity(bytes_for_appends(n))?)
}

/// A vector store holding one vector with elements `0..n`.
pub fn filled_vector(n: i32) -> Result<(VectorStore<BumpArena>, VectorHandle), StoreError> {
    let mut store = VectorStore::new(arena_for_appends(n.unsigned_abs())?);
    let v = store.create(0)?;
    for i in 0..n {
        store.append(v, i)?;
    }
    Ok((store, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapsim_core::Arena;

    #[test]
    fn sized_arena_fits_exactly() {
        let (store, v) = filled_vector(10).unwrap();
        assert_eq!(store.length(v).unwrap(), 10);
        assert_eq!(store.arena().used(), store.arena().capacity());
    }

    #[test]
    fn empty_profile_is_header_only() {
        assert_eq!(bytes_for_appends(0), 12);
    }
}
