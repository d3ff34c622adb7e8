//! Game data configuration
//!
//! Actors, items, drop tuning and waves are authored in one TOML document.
//! Stat maps deserialize as tables keyed by stat name; `stat_table` and
//! `build` lay the entries out in catalog order so loaded tables iterate
//! the same way hand-built ones do.

use super::ConfigError;
use crate::actor::{Actor, ActorError};
use crate::drops::DropTable;
use crate::item::Item;
use crate::stats::StatTable;
use crate::types::{ActorKind, Rarity, Stat};
use crate::waves::Wave;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level game data document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameData {
    #[serde(default)]
    pub actors: HashMap<String, ActorConfig>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    #[serde(default)]
    pub drops: DropConfig,
    #[serde(default)]
    pub waves: Vec<Wave>,
}

/// One actor archetype
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorConfig {
    pub kind: ActorKind,
    #[serde(default = "default_equipped_capacity")]
    pub equipped_capacity: usize,
    #[serde(default = "default_inventory_capacity")]
    pub inventory_capacity: usize,
    pub stats: HashMap<Stat, f64>,
}

fn default_equipped_capacity() -> usize {
    4
}
fn default_inventory_capacity() -> usize {
    16
}

impl ActorConfig {
    /// Build the stat table in catalog order, regardless of TOML key order
    pub fn stat_table(&self) -> StatTable {
        StatTable::from_pairs(
            Stat::all()
                .iter()
                .filter(|stat| self.stats.contains_key(*stat))
                .map(|stat| (*stat, self.stats[stat])),
        )
    }

    pub fn spawn(&self) -> Result<Actor, ActorError> {
        Actor::new(
            self.kind,
            self.stat_table(),
            self.equipped_capacity,
            self.inventory_capacity,
        )
    }
}

/// One droppable item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    pub rarity: Rarity,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub modifiers: HashMap<Stat, f64>,
}

fn default_level() -> u32 {
    1
}

impl ItemConfig {
    pub fn build(&self) -> Item {
        let modifiers = Stat::all()
            .iter()
            .filter(|stat| self.modifiers.contains_key(*stat))
            .map(|stat| (*stat, self.modifiers[stat]))
            .collect();
        Item::new(self.name.clone(), self.rarity, self.level, modifiers)
            .with_description(self.description.clone())
            .with_icon(self.icon.clone())
    }
}

/// Drop tuning, all percentages in 0-100
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropConfig {
    #[serde(default = "default_peak_chance")]
    pub peak_chance: f64,
    #[serde(default = "default_rare_chance")]
    pub rare_chance: f64,
    #[serde(default = "default_epic_chance")]
    pub epic_chance: f64,
}

impl Default for DropConfig {
    fn default() -> Self {
        DropConfig {
            peak_chance: 50.0,
            rare_chance: 30.0,
            epic_chance: 10.0,
        }
    }
}

fn default_peak_chance() -> f64 {
    50.0
}
fn default_rare_chance() -> f64 {
    30.0
}
fn default_epic_chance() -> f64 {
    10.0
}

impl GameData {
    /// Cross-check references between sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (id, actor) in &self.actors {
            if !actor.stats.contains_key(&Stat::Health) {
                return Err(ConfigError::ValidationError(format!(
                    "actor '{}' has no health stat",
                    id
                )));
            }
        }
        for (i, wave) in self.waves.iter().enumerate() {
            for enemy_id in &wave.enemies {
                if !self.actors.contains_key(enemy_id) {
                    return Err(ConfigError::ValidationError(format!(
                        "wave {} spawns unknown actor '{}'",
                        i, enemy_id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Build the drop table with every configured item sorted into its
    /// rarity bucket
    pub fn drop_table(&self) -> DropTable {
        let mut table = DropTable::new(
            self.drops.peak_chance,
            self.drops.rare_chance,
            self.drops.epic_chance,
        );
        for config in &self.items {
            table.insert(config.build());
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[actors.tower]
kind = "tower"
equipped_capacity = 6

[actors.tower.stats]
health = 500
damage = 12
critical_chance = 5
critical_damage = 150
attack_speed = 1.5
armour = 10
armour_penetration = 0

[actors.slime]
kind = "enemy"

[actors.slime.stats]
health = 30
damage = 4
critical_chance = 0
critical_damage = 100
attack_speed = 0.8
armour_penetration = 0

[[items]]
name = "Rusty Blade"
rarity = "common"
description = "Better than nothing"

[items.modifiers]
damage = 3

[[items]]
name = "Stormpiercer"
rarity = "epic"
level = 3

[items.modifiers]
damage = 14
armour_penetration = 8

[drops]
peak_chance = 60
epic_chance = 8

[[waves]]
enemies = ["slime", "slime"]

[[waves]]
enemies = ["slime"]
boss = true
"#;

    #[test]
    fn test_parse_game_data() {
        let data: GameData = super::super::parse_toml(SAMPLE).unwrap();
        data.validate().unwrap();

        assert_eq!(data.actors.len(), 2);
        let tower = &data.actors["tower"];
        assert_eq!(tower.kind, ActorKind::Tower);
        assert_eq!(tower.equipped_capacity, 6);
        assert_eq!(tower.inventory_capacity, 16);

        assert_eq!(data.items.len(), 2);
        assert_eq!(data.items[1].rarity, Rarity::Epic);
        assert_eq!(data.items[1].level, 3);
        assert_eq!(data.items[0].level, 1);

        assert!((data.drops.peak_chance - 60.0).abs() < f64::EPSILON);
        assert!((data.drops.rare_chance - 30.0).abs() < f64::EPSILON);

        assert_eq!(data.waves.len(), 2);
        assert!(data.waves[1].boss);
    }

    #[test]
    fn test_stat_table_in_catalog_order() {
        let data: GameData = super::super::parse_toml(SAMPLE).unwrap();
        let table = data.actors["tower"].stat_table();
        let order: Vec<Stat> = table.iter().map(|(stat, _)| stat).collect();
        assert_eq!(
            order,
            vec![
                Stat::Health,
                Stat::Damage,
                Stat::CriticalChance,
                Stat::CriticalDamage,
                Stat::AttackSpeed,
                Stat::Armour,
                Stat::ArmourPenetration,
            ]
        );
    }

    #[test]
    fn test_spawned_actor_is_playable() {
        let data: GameData = super::super::parse_toml(SAMPLE).unwrap();
        let slime = data.actors["slime"].spawn().unwrap();
        assert_eq!(slime.health().max(), 30.0);
        // Armour was omitted and reads as zero
        assert_eq!(slime.snapshot().armour, 0.0);
    }

    #[test]
    fn test_validate_rejects_unknown_wave_actor() {
        let mut data: GameData = super::super::parse_toml(SAMPLE).unwrap();
        data.waves[0].enemies.push("dragon".to_string());
        let err = data.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_drop_table_buckets_items() {
        let data: GameData = super::super::parse_toml(SAMPLE).unwrap();
        let table = data.drop_table();
        assert_eq!(table.items(Rarity::Common).len(), 1);
        assert_eq!(table.items(Rarity::Rare).len(), 0);
        assert_eq!(table.items(Rarity::Epic).len(), 1);
    }
}
