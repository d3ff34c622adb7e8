//! Drop rolls - rarity-bucketed item tables and kill-position drop chances
//!
//! Drop chance scales with where the enemy died: full strength right at the
//! tower, nothing back at the spawn line. All percentages are 0..=100.

use crate::item::Item;
use crate::types::Rarity;
use rand::Rng;
use tracing::debug;

/// Item pool split by rarity, plus the tuning for drop and rarity rolls
#[derive(Debug, Clone)]
pub struct DropTable {
    common: Vec<Item>,
    rare: Vec<Item>,
    epic: Vec<Item>,
    /// Drop chance (percent) for a kill right at the tower
    peak_drop_chance: f64,
    rare_chance: f64,
    epic_chance: f64,
}

impl DropTable {
    pub fn new(peak_drop_chance: f64, rare_chance: f64, epic_chance: f64) -> Self {
        DropTable {
            common: Vec::new(),
            rare: Vec::new(),
            epic: Vec::new(),
            peak_drop_chance,
            rare_chance,
            epic_chance,
        }
    }

    /// Add an item to its rarity bucket
    pub fn insert(&mut self, item: Item) {
        match item.rarity() {
            Rarity::Common => self.common.push(item),
            Rarity::Rare => self.rare.push(item),
            Rarity::Epic => self.epic.push(item),
        }
    }

    pub fn items(&self, rarity: Rarity) -> &[Item] {
        match rarity {
            Rarity::Common => &self.common,
            Rarity::Rare => &self.rare,
            Rarity::Epic => &self.epic,
        }
    }

    /// Rarity for a percentile roll. The epic threshold is inclusive and the
    /// rare threshold exclusive; both thresholds count from zero.
    pub fn rarity_for_roll(&self, roll: f64) -> Rarity {
        if roll <= self.epic_chance {
            Rarity::Epic
        } else if roll < self.rare_chance {
            Rarity::Rare
        } else {
            Rarity::Common
        }
    }

    pub fn roll_rarity(&self, rng: &mut impl Rng) -> Rarity {
        self.rarity_for_roll(rng.gen_range(0.0..100.0))
    }

    /// Drop chance for a kill at `death_distance_sq` from the tower, for an
    /// enemy spawned `spawn_distance_sq` away (both squared distances)
    pub fn drop_chance(&self, spawn_distance_sq: f64, death_distance_sq: f64) -> f64 {
        if spawn_distance_sq <= 0.0 {
            return 0.0;
        }
        self.peak_drop_chance * (1.0 - death_distance_sq / spawn_distance_sq)
    }

    pub fn roll_for_drop(
        &self,
        spawn_distance_sq: f64,
        death_distance_sq: f64,
        rng: &mut impl Rng,
    ) -> bool {
        let chance = self.drop_chance(spawn_distance_sq, death_distance_sq);
        let dropped = rng.gen_range(0.0..100.0) <= chance;
        debug!(chance, dropped, "drop roll");
        dropped
    }

    /// Random item of the given rarity; None when that bucket is empty
    pub fn random_item(&self, rarity: Rarity, rng: &mut impl Rng) -> Option<&Item> {
        let bucket = self.items(rarity);
        if bucket.is_empty() {
            debug!(?rarity, "drop table bucket is empty");
            return None;
        }
        Some(&bucket[rng.gen_range(0..bucket.len())])
    }
}
