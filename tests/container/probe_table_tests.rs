use stockroom::common::exception::InventoryError;
use stockroom::container::probe_table::{Placement, ProbeTable};
use stockroom::storage::record::ProductRecord;

use crate::common::logger::init_test_logger;

fn setup_table(capacity: usize) -> ProbeTable {
    init_test_logger();
    ProbeTable::new(capacity).unwrap()
}

fn product(code: i64, stock: i64, price: f64) -> ProductRecord {
    ProductRecord::new(code, stock, price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_lifecycle() {
        let mut table = setup_table(10);

        table.insert(product(101, 25, 49.99)).unwrap();
        table.insert(product(205, 8, 3.50)).unwrap();
        table.insert(product(318, 120, 0.99)).unwrap();
        assert_eq!(table.len(), 3);

        let (_, record) = table.search(205).unwrap();
        assert_eq!(record.get_stock(), 8);
        assert_eq!(record.get_price(), 3.50);

        table.update(205, 40, 2.50).unwrap();
        let (_, record) = table.search(205).unwrap();
        assert_eq!(record.get_stock(), 40);
        assert_eq!(record.get_price(), 2.50);

        let (_, new_stock) = table.restock(101, 75).unwrap();
        assert_eq!(new_stock, 100);

        let (_, removed) = table.remove(318).unwrap();
        assert_eq!(removed.get_code(), 318);
        assert_eq!(table.len(), 2);
        assert!(table.search(318).is_err());
        assert!(table.search(101).is_ok());
        assert!(table.search(205).is_ok());
    }

    #[test]
    fn test_collision_chain_survives_head_removal() {
        // Codes 0, 5 and 10 all hash to slot 0 in a five-slot table, so
        // they occupy slots 0, 1 and 2 as one probe chain.
        let mut table = setup_table(5);
        assert_eq!(table.insert(product(0, 1, 1.0)).unwrap(), Placement::Home(0));
        assert_eq!(
            table.insert(product(5, 1, 1.0)).unwrap(),
            Placement::Probed { home: 0, slot: 1 }
        );
        assert_eq!(
            table.insert(product(10, 1, 1.0)).unwrap(),
            Placement::Probed { home: 0, slot: 2 }
        );

        table.remove(0).unwrap();

        // The displaced records must remain reachable after the chain head
        // is gone.
        assert!(table.search(5).is_ok());
        assert!(table.search(10).is_ok());
        assert_eq!(table.len(), 2);

        let occupied = table.iter().filter(|(_, slot)| slot.is_occupied()).count();
        assert_eq!(occupied, 2);
    }

    #[test]
    fn test_full_table_reports_and_recovers() {
        let mut table = setup_table(3);
        for code in [1, 2, 3] {
            table.insert(product(code, 10, 5.0)).unwrap();
        }

        assert_eq!(
            table.insert(product(4, 10, 5.0)).err(),
            Some(InventoryError::TableFull(3))
        );

        table.remove(2).unwrap();
        assert!(table.insert(product(4, 10, 5.0)).is_ok());
        assert!(table.is_full());
    }

    #[test]
    fn test_duplicate_detected_behind_collisions() {
        let mut table = setup_table(10);
        for code in [7, 17, 27] {
            table.insert(product(code, 1, 1.0)).unwrap();
        }

        assert_eq!(
            table.insert(product(17, 99, 99.0)).err(),
            Some(InventoryError::DuplicateCode { code: 17, slot: 8 })
        );

        // The stored record is untouched by the rejected insert.
        let (_, record) = table.search(17).unwrap();
        assert_eq!(record.get_stock(), 1);
    }

    #[test]
    fn test_wrap_around_chain_repair() {
        // 3, 8 and 13 chain on slot 3; 13 wraps to slot 0 and pushes 4 out
        // to slot 1. Removing 8 must repair the chain across the wrap.
        let mut table = setup_table(5);
        for code in [3, 8, 13, 4] {
            table.insert(product(code, 1, 1.0)).unwrap();
        }

        table.remove(8).unwrap();

        for code in [3, 13, 4] {
            assert!(table.search(code).is_ok(), "code {} unreachable", code);
        }
        assert_eq!(
            table.search(8).err(),
            Some(InventoryError::ProductNotFound(8))
        );
    }

    #[test]
    fn test_negative_codes_normalize() {
        let mut table = setup_table(10);
        assert_eq!(
            table.insert(product(-7, 4, 12.0)).unwrap(),
            Placement::Home(3)
        );

        assert_eq!(table.search(-7).unwrap().0, 3);
        table.update(-7, 6, 11.0).unwrap();
        assert_eq!(table.remove(-7).unwrap().0, 3);
        assert!(table.is_empty());
    }

    #[test]
    fn test_every_slot_enumerated() {
        let mut table = setup_table(10);
        for code in [2, 12, 22, 5] {
            table.insert(product(code, 1, 1.0)).unwrap();
        }
        table.remove(12).unwrap();

        let slots: Vec<_> = table.iter().collect();
        assert_eq!(slots.len(), table.capacity());
        for (expected, (index, _)) in slots.iter().enumerate() {
            assert_eq!(expected, *index);
        }

        let occupied = slots.iter().filter(|(_, slot)| slot.is_occupied()).count();
        assert_eq!(occupied, table.len());
    }

    #[test]
    fn test_update_then_restock_compose() {
        let mut table = setup_table(10);
        table.insert(product(42, 10, 5.00)).unwrap();

        table.update(42, 40, 2.50).unwrap();
        let (_, new_stock) = table.restock(42, -15).unwrap();
        assert_eq!(new_stock, 25);

        let (_, record) = table.search(42).unwrap();
        assert_eq!(record.get_stock(), 25);
        assert_eq!(record.get_price(), 2.50);
    }
}
