use crate::common::config::{ProductCode, SlotIndex};

/// Maps a product code to its home slot by division hashing.
///
/// The remainder is Euclidean, so negative codes land in `0..slot_count`
/// like any other code; no part of the key domain is rejected or reserved.
///
/// # Parameters
/// - `code`: The product code to hash.
/// - `slot_count`: The table capacity. Must be non-zero; the table
///   constructor guarantees this.
///
/// # Returns
/// The home slot index, in `0..slot_count`.
pub fn home_slot(code: ProductCode, slot_count: usize) -> SlotIndex {
    debug_assert!(slot_count > 0, "slot_count must be non-zero");
    code.rem_euclid(slot_count as i64) as SlotIndex
}
