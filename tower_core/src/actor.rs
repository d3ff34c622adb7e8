//! Actor - one combatant assembled from its parts
//!
//! Stats, equipment ledger, health and the combat snapshot are owned
//! directly and constructed together; there is no ambient lookup. Equipment
//! changes go through the actor so the snapshot and max health stay current.

use crate::combat::{resolve_attack, CombatActor, DamageEvent};
use crate::health::HealthTracker;
use crate::item::Item;
use crate::ledger::{EquipError, EquipmentLedger};
use crate::stats::{StatError, StatTable};
use crate::types::{ActorKind, Stat};
use rand::Rng;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ActorError {
    #[error(transparent)]
    Stat(#[from] StatError),
    #[error("{0:?} must spawn with positive health, got {1}")]
    NonPositiveHealth(ActorKind, f64),
}

#[derive(Debug, Clone)]
pub struct Actor {
    kind: ActorKind,
    stats: StatTable,
    ledger: EquipmentLedger,
    health: HealthTracker,
    snapshot: CombatActor,
}

impl Actor {
    /// Validate and assemble an actor. Every combat stat must be declared on
    /// the table (armour may be omitted) and health must be positive; this
    /// runs at construction so a bad stat table never reaches combat.
    pub fn new(
        kind: ActorKind,
        stats: StatTable,
        equipped_capacity: usize,
        inventory_capacity: usize,
    ) -> Result<Self, ActorError> {
        let health_value = stats.get(Stat::Health)?;
        if health_value <= 0.0 {
            return Err(ActorError::NonPositiveHealth(kind, health_value));
        }
        let snapshot = CombatActor::from_table(&stats)?;
        Ok(Actor {
            kind,
            ledger: EquipmentLedger::new(equipped_capacity, inventory_capacity),
            health: HealthTracker::new(health_value),
            snapshot,
            stats,
        })
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    pub fn ledger(&self) -> &EquipmentLedger {
        &self.ledger
    }

    pub fn health(&self) -> &HealthTracker {
        &self.health
    }

    pub fn health_mut(&mut self) -> &mut HealthTracker {
        &mut self.health
    }

    pub fn snapshot(&self) -> &CombatActor {
        &self.snapshot
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    fn refresh(&mut self) -> Result<(), StatError> {
        self.snapshot.refresh(&self.stats)?;
        self.health.set_max(self.stats.get(Stat::Health)?);
        Ok(())
    }

    /// Equip an item (moving it out of the inventory when held there) and
    /// refresh the combat snapshot
    pub fn equip(&mut self, item: &Item) -> Result<(), EquipError> {
        self.ledger.equip(item, &mut self.stats)?;
        self.refresh()?;
        Ok(())
    }

    /// Unequip an item, reverse its modifiers and refresh the snapshot
    pub fn unequip(&mut self, item: &Item) -> Result<Item, EquipError> {
        let removed = self.ledger.unequip(item, &mut self.stats)?;
        self.refresh()?;
        Ok(removed)
    }

    pub fn add_to_inventory(&mut self, item: Item) -> bool {
        self.ledger.add_to_inventory(item)
    }

    pub fn remove_from_inventory(&mut self, item: &Item) -> Result<Item, EquipError> {
        self.ledger.remove_from_inventory(item)
    }

    /// Attempt one attack on `target` at time `now`
    pub fn attack(
        &mut self,
        target: &mut Actor,
        now: f64,
        rng: &mut impl Rng,
    ) -> Option<DamageEvent> {
        resolve_attack(
            &mut self.snapshot,
            &target.snapshot,
            &mut target.health,
            now,
            rng,
        )
    }
}
