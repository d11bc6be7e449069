/** Number of slots in the reference inventory table. */
pub const DEFAULT_SLOT_COUNT: usize = 10;

pub type ProductCode = i64; // product code type (hash key)
pub type SlotIndex = usize; // slot index type
