//! Ready-made arenas for tests.

use heapsim_arena::{ArenaConfig, BumpArena, ByteOrder};

/// Zeroed little-endian arena of `capacity` bytes.
///
/// # Panics
///
/// Panics if `capacity` is not addressable.
pub fn arena(capacity: u32) -> BumpArena {
    BumpArena::with_capacity(capacity).expect("test arena capacity must be addressable")
}

/// Big-endian arena with uninitialised memory marked by
/// [`ArenaConfig::UNINIT_BYTE`].
pub fn poisoned_big_endian(capacity: u32) -> BumpArena {
    let config = ArenaConfig::new(capacity)
        .with_byte_order(ByteOrder::Big)
        .with_zero_fill(false);
    BumpArena::new(config).expect("test arena capacity must be addressable")
}
