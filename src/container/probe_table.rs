use crate::common::config::{ProductCode, SlotIndex, DEFAULT_SLOT_COUNT};
use crate::common::exception::InventoryError;
use crate::container::hash_fn::home_slot;
use crate::storage::record::ProductRecord;
use crate::storage::slot::Slot;
use log::debug;

/// Where an insert placed its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The home slot was free; the record landed directly on it.
    Home(SlotIndex),
    /// The home slot was taken; linear probing placed the record further on.
    Probed { home: SlotIndex, slot: SlotIndex },
}

impl Placement {
    /// The slot the record ended up in.
    pub fn slot(&self) -> SlotIndex {
        match *self {
            Placement::Home(slot) => slot,
            Placement::Probed { slot, .. } => slot,
        }
    }
}

/// Fixed-capacity closed-hashing store for product records.
///
/// Codes are hashed by division (`code mod capacity`) and collisions are
/// resolved by linear probing. Removal backward-shifts the occupied run
/// that follows the cleared slot, so occupied probe chains stay contiguous
/// and every scan may stop at the first empty slot it meets.
///
/// The capacity is fixed at construction: the table never resizes, and an
/// insert into a table with no empty slot reports `TableFull` instead.
pub struct ProbeTable {
    slots: Box<[Slot]>,
    len: usize,
}

impl ProbeTable {
    /// Creates a table of `capacity` empty slots.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, InventoryError> {
        if capacity == 0 {
            return Err(InventoryError::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: vec![Slot::Empty; capacity].into_boxed_slice(),
            len: 0,
        })
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// The slot `code` hashes to before any probing.
    pub fn home_slot(&self, code: ProductCode) -> SlotIndex {
        home_slot(code, self.slots.len())
    }

    /// Inserts `record`, probing past occupied slots when its home slot is
    /// taken.
    ///
    /// # Returns
    ///
    /// `Placement::Home` when the record landed on its home slot,
    /// `Placement::Probed` when linear probing had to move it further on.
    ///
    /// # Errors
    ///
    /// `DuplicateCode` if the code is already stored; `TableFull` if no
    /// slot is empty after probing the whole table.
    pub fn insert(&mut self, record: ProductRecord) -> Result<Placement, InventoryError> {
        let capacity = self.slots.len();
        let code = record.get_code();
        let home = self.home_slot(code);

        for offset in 0..capacity {
            let index = (home + offset) % capacity;
            match &self.slots[index] {
                Slot::Empty => {
                    self.slots[index] = Slot::Occupied(record);
                    self.len += 1;
                    if offset == 0 {
                        return Ok(Placement::Home(index));
                    }
                    debug!(
                        "code {} placed at slot {} after {} probes",
                        code, index, offset
                    );
                    return Ok(Placement::Probed { home, slot: index });
                }
                Slot::Occupied(existing) if existing.get_code() == code => {
                    return Err(InventoryError::DuplicateCode { code, slot: index });
                }
                Slot::Occupied(_) => {
                    if offset == 0 {
                        debug!("collision at slot {} for code {}, probing", index, code);
                    }
                }
            }
        }

        Err(InventoryError::TableFull(capacity))
    }

    /// Looks up `code` and returns the slot index together with the record.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` if no occupied slot holds the code.
    pub fn search(&self, code: ProductCode) -> Result<(SlotIndex, &ProductRecord), InventoryError> {
        self.find_slot(code)
            .and_then(|index| self.slots[index].record().map(|record| (index, record)))
            .ok_or(InventoryError::ProductNotFound(code))
    }

    /// Overwrites the stock and price of the record holding `code`. The
    /// code itself is immutable once inserted.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` if no occupied slot holds the code.
    pub fn update(
        &mut self,
        code: ProductCode,
        stock: i64,
        price: f64,
    ) -> Result<SlotIndex, InventoryError> {
        let index = self
            .find_slot(code)
            .ok_or(InventoryError::ProductNotFound(code))?;
        let record = self.slots[index]
            .record_mut()
            .ok_or(InventoryError::ProductNotFound(code))?;
        record.set_details(stock, price);
        Ok(index)
    }

    /// Adds `delta` to the stock of the record holding `code` and returns
    /// the new stock level. Negative deltas are applied as-is and may
    /// drive the level below zero.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` if no occupied slot holds the code.
    pub fn restock(
        &mut self,
        code: ProductCode,
        delta: i64,
    ) -> Result<(SlotIndex, i64), InventoryError> {
        let index = self
            .find_slot(code)
            .ok_or(InventoryError::ProductNotFound(code))?;
        let record = self.slots[index]
            .record_mut()
            .ok_or(InventoryError::ProductNotFound(code))?;
        let new_stock = record.add_stock(delta);
        Ok((index, new_stock))
    }

    /// Removes the record holding `code`, returning the slot it was found
    /// in together with the record, then repairs the probe chain that
    /// followed it.
    ///
    /// # Errors
    ///
    /// `ProductNotFound` if no occupied slot holds the code.
    pub fn remove(
        &mut self,
        code: ProductCode,
    ) -> Result<(SlotIndex, ProductRecord), InventoryError> {
        let index = self
            .find_slot(code)
            .ok_or(InventoryError::ProductNotFound(code))?;
        let record = self.slots[index]
            .take()
            .ok_or(InventoryError::ProductNotFound(code))?;
        self.len -= 1;
        self.close_gap(index);
        Ok((index, record))
    }

    /// Iterates every slot in index order, empty slots included. The
    /// display layer renders the whole table from this.
    pub fn iter(&self) -> SlotIter<'_> {
        SlotIter {
            inner: self.slots.iter().enumerate(),
        }
    }

    /// Probe scan shared by search/update/restock/remove. Chains are kept
    /// contiguous, so the first empty slot ends the scan; a full cycle
    /// bounds it when no slot is empty.
    fn find_slot(&self, code: ProductCode) -> Option<SlotIndex> {
        let capacity = self.slots.len();
        let home = self.home_slot(code);

        for offset in 0..capacity {
            let index = (home + offset) % capacity;
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(record) if record.get_code() == code => return Some(index),
                Slot::Occupied(_) => {}
            }
        }

        None
    }

    /// Backward-shift pass after a removal. Walks the occupied run that
    /// follows `gap` and moves a record back into the gap whenever the gap
    /// sits between that record's home slot and its current slot — exactly
    /// the records a scan from their home slot could no longer reach.
    ///
    /// The walk ends at the first empty slot. The gap itself is empty and
    /// relocates forward with every move, so the walk is bounded even when
    /// every other slot is occupied.
    fn close_gap(&mut self, gap: SlotIndex) {
        let capacity = self.slots.len();
        let mut gap = gap;
        let mut cursor = (gap + 1) % capacity;

        while let Some(record) = self.slots[cursor].record().copied() {
            let home = self.home_slot(record.get_code());
            // The gap strands the record iff it lies cyclically in [home, cursor).
            let stranded = if home <= cursor {
                gap >= home && gap < cursor
            } else {
                gap >= home || gap < cursor
            };

            if stranded {
                debug!(
                    "shifting code {} from slot {} back to slot {}",
                    record.get_code(),
                    cursor,
                    gap
                );
                let moved = std::mem::replace(&mut self.slots[cursor], Slot::Empty);
                self.slots[gap] = moved;
                gap = cursor;
            }

            cursor = (cursor + 1) % capacity;
        }
    }
}

impl Default for ProbeTable {
    /// A table with the reference capacity of ten slots.
    fn default() -> Self {
        Self {
            slots: vec![Slot::Empty; DEFAULT_SLOT_COUNT].into_boxed_slice(),
            len: 0,
        }
    }
}

/// Index-ordered iterator over all slots of a table, empty ones included.
pub struct SlotIter<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Slot>>,
}

impl<'a> Iterator for SlotIter<'a> {
    type Item = (SlotIndex, &'a Slot);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SlotIter<'_> {}

impl<'a> IntoIterator for &'a ProbeTable {
    type Item = (SlotIndex, &'a Slot);
    type IntoIter = SlotIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
