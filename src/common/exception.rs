use crate::common::config::{ProductCode, SlotIndex};
use thiserror::Error;

/// Everything a table operation can fail with. All variants are
/// recoverable; callers render them and carry on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryError {
    #[error("no empty slot left after probing all {0} slots")]
    TableFull(usize),
    #[error("product {0} not found")]
    ProductNotFound(ProductCode),
    #[error("product {code} already stored at slot {slot}")]
    DuplicateCode { code: ProductCode, slot: SlotIndex },
    #[error("slot count must be at least 1, got {0}")]
    InvalidCapacity(usize),
}
