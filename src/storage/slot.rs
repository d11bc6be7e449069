use crate::storage::record::ProductRecord;

/// State of one table slot. A slot is strictly empty or occupied: removal
/// restores `Empty`, so there is no "was occupied" marker and no reserved
/// key value standing in for vacancy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(ProductRecord),
}

impl Slot {
    /// Returns whether the slot holds no record.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Returns whether the slot holds a record.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// Returns the stored record, if any.
    pub fn record(&self) -> Option<&ProductRecord> {
        match self {
            Slot::Occupied(record) => Some(record),
            Slot::Empty => None,
        }
    }

    /// Returns the stored record for in-place mutation, if any.
    pub fn record_mut(&mut self) -> Option<&mut ProductRecord> {
        match self {
            Slot::Occupied(record) => Some(record),
            Slot::Empty => None,
        }
    }

    /// Clears the slot, handing back the record it held.
    pub fn take(&mut self) -> Option<ProductRecord> {
        match std::mem::replace(self, Slot::Empty) {
            Slot::Occupied(record) => Some(record),
            Slot::Empty => None,
        }
    }
}
