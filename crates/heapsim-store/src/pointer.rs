//! Heuristic pointer validation shared by both stores.

use heapsim_core::{Address, Arena, StoreError};

/// Reject `address` unless `[address, address + span)` lies inside the
/// allocated prefix of the arena.
///
/// This is a containment check only. It cannot prove the address came
/// from the matching `create` call.
pub(crate) fn check<A: Arena>(arena: &A, address: Address, span: i32) -> Result<(), StoreError> {
    let used = arena.used();
    let span = span.unsigned_abs();
    let in_bounds = u32::try_from(address.get())
        .ok()
        .and_then(|start| start.checked_add(span))
        .is_some_and(|end| end <= used);
    if in_bounds {
        Ok(())
    } else {
        Err(StoreError::InvalidPointer {
            address,
            span,
            used,
            capacity: arena.capacity(),
        })
    }
}
