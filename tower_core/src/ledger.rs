//! EquipmentLedger - equipped and inventoried items for one actor
//!
//! The ledger is the only writer of an actor's StatTable: equipping applies
//! an item's modifiers, unequipping reverses them. An item sits in at most
//! one of the two lists at a time.

use crate::item::Item;
use crate::stats::{StatError, StatTable};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq)]
pub enum EquipError {
    #[error("equipped list is full")]
    CapacityExceeded,
    #[error("item is not currently equipped")]
    NotEquipped,
    #[error("item is not in the inventory")]
    ItemNotFound,
    #[error(transparent)]
    Stat(#[from] StatError),
}

#[derive(Debug, Clone)]
pub struct EquipmentLedger {
    equipped: Vec<Item>,
    inventory: Vec<Item>,
    equipped_capacity: usize,
    inventory_capacity: usize,
}

impl EquipmentLedger {
    pub fn new(equipped_capacity: usize, inventory_capacity: usize) -> Self {
        EquipmentLedger {
            equipped: Vec::new(),
            inventory: Vec::new(),
            equipped_capacity,
            inventory_capacity,
        }
    }

    pub fn equipped(&self) -> &[Item] {
        &self.equipped
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn equipped_capacity(&self) -> usize {
        self.equipped_capacity
    }

    pub fn inventory_capacity(&self) -> usize {
        self.inventory_capacity
    }

    pub fn is_equipped(&self, item: &Item) -> bool {
        self.equipped.iter().any(|e| e == item)
    }

    /// Equip an item and apply its non-zero modifiers to `stats`. The item
    /// is moved out of the inventory when held there. Capacity and every
    /// modifier key are checked up front, so a failed equip leaves both the
    /// ledger and the table untouched.
    pub fn equip(&mut self, item: &Item, stats: &mut StatTable) -> Result<(), EquipError> {
        if self.equipped.len() >= self.equipped_capacity {
            return Err(EquipError::CapacityExceeded);
        }
        for (stat, _) in item.modifiers() {
            stats.get(stat)?;
        }

        let owned = match self.inventory.iter().position(|held| held == item) {
            Some(pos) => self.inventory.remove(pos),
            None => item.clone(),
        };
        for (stat, delta) in owned.modifiers() {
            if delta == 0.0 {
                continue;
            }
            stats.add(stat, delta)?;
        }
        debug!(item = %owned.name(), "equipped");
        self.equipped.push(owned);
        Ok(())
    }

    /// Unequip an item and reverse its non-zero modifiers. Subtraction
    /// clamps at zero, so this is not always a perfect inverse of equip:
    /// value some other effect already spent cannot be refunded.
    pub fn unequip(&mut self, item: &Item, stats: &mut StatTable) -> Result<Item, EquipError> {
        let pos = self
            .equipped
            .iter()
            .position(|e| e == item)
            .ok_or(EquipError::NotEquipped)?;
        for (stat, _) in item.modifiers() {
            stats.get(stat)?;
        }

        let removed = self.equipped.remove(pos);
        for (stat, delta) in removed.modifiers() {
            if delta == 0.0 {
                continue;
            }
            stats.subtract(stat, delta)?;
        }
        debug!(item = %removed.name(), "unequipped");
        Ok(removed)
    }

    /// Store an item without equipping it; false when the inventory is full
    pub fn add_to_inventory(&mut self, item: Item) -> bool {
        if self.inventory.len() >= self.inventory_capacity {
            debug!(item = %item.name(), "inventory is full");
            return false;
        }
        self.inventory.push(item);
        true
    }

    pub fn remove_from_inventory(&mut self, item: &Item) -> Result<Item, EquipError> {
        let pos = self
            .inventory
            .iter()
            .position(|held| held == item)
            .ok_or(EquipError::ItemNotFound)?;
        Ok(self.inventory.remove(pos))
    }
}
