//! heapsim quickstart: arrays and vectors living in one arena.
//!
//! Demonstrates:
//!   1. Building an arena-backed heap
//!   2. Creating and filling a fixed-length array
//!   3. Appending to a vector and watching its capacity grow
//!   4. Pointer validation on a dangling handle
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use heapsim::prelude::*;

const ARENA_BYTES: u32 = 1024;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut heap = Heap::with_capacity(ARENA_BYTES)?;
    let mut console = String::new();

    // ─── Fixed-length array ─────────────────────────────────────
    let a = heap.arrays().create(3, 4)?;
    for (i, value) in [10, 20, 30].into_iter().enumerate() {
        heap.arrays().set_int(a, i as i32, value)?;
    }
    heap.arrays().write_to(a, &mut console)?;

    // ─── Growable vector ────────────────────────────────────────
    let v = heap.vectors().create(0)?;
    for value in 1..=10 {
        heap.vectors().append(v, value * value)?;
        heap.vectors().write_to(v, &mut console)?;
    }
    heap.vectors().set(v, 0, -1)?;
    heap.vectors().write_to(v, &mut console)?;

    print!("{console}");
    println!("arena: {} of {} bytes used", heap.used(), heap.capacity());

    // ─── Dangling handle ────────────────────────────────────────
    let dangling = VectorHandle::from_raw(Address(heap.used() as i32));
    match heap.vectors().length(dangling) {
        Ok(len) => println!("unexpected length {len}"),
        Err(e) => {
            log::warn!("rejected dangling handle: {e}");
            println!("error: {e}");
        }
    }
    Ok(())
}
